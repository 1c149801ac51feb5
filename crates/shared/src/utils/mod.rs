mod gracefullshutdown;
mod logs;
mod metrics;
mod operation;
mod otel;
mod parse_datetime;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::operation::OperationTracer;
pub use self::otel::{Telemetry, TracingContext};
pub use self::parse_datetime::{
    DateBound, end_of_day, format_datetime, parse_date_bound, start_of_day,
};
