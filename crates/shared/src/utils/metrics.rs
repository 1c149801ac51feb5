use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family, gauge::Gauge};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    fs,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use sysinfo::{Pid, System};

/// Reads `Threads:` from procfs; `None` off Linux.
fn thread_count(pid: u32) -> Option<i64> {
    fs::read_to_string(format!("/proc/{pid}/status"))
        .ok()?
        .lines()
        .find_map(|line| line.strip_prefix("Threads:"))
        .and_then(|count| count.trim().parse().ok())
}

/// Process and host gauges exposed next to the request metrics.
#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    pub resident_memory_bytes: Gauge,
    pub virtual_memory_bytes: Gauge,
    pub available_memory_kilobytes: Gauge,
    pub threads: Gauge,
    pub cpu_usage_percent: Gauge,
    pub start_time_seconds: Gauge,
}

impl SystemMetrics {
    pub fn new() -> Self {
        let metrics = Self::default();

        let started = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        metrics.start_time_seconds.set(started);

        metrics
    }

    pub fn register(&self, registry: &mut Registry) {
        let gauges = [
            (
                "process_resident_memory_bytes",
                "Resident memory of the process in bytes",
                &self.resident_memory_bytes,
            ),
            (
                "process_virtual_memory_bytes",
                "Virtual memory of the process in bytes",
                &self.virtual_memory_bytes,
            ),
            (
                "system_available_memory_kilobytes",
                "Available system memory in kilobytes",
                &self.available_memory_kilobytes,
            ),
            (
                "process_threads",
                "Number of OS threads of the process",
                &self.threads,
            ),
            (
                "system_cpu_usage_percent",
                "Global CPU usage in percent",
                &self.cpu_usage_percent,
            ),
            (
                "process_start_time_seconds",
                "Start time of the process since unix epoch in seconds",
                &self.start_time_seconds,
            ),
        ];

        for (name, help, gauge) in gauges {
            registry.register(name, help, gauge.clone());
        }
    }

    /// Blocking: sysinfo scans the process table.
    pub fn update_metrics(&self) {
        let mut sys = System::new_all();
        sys.refresh_all();

        let pid = std::process::id();

        self.available_memory_kilobytes
            .set((sys.available_memory() / 1_024) as i64);
        self.cpu_usage_percent.set(sys.global_cpu_usage() as i64);

        if let Some(process) = sys.process(Pid::from_u32(pid)) {
            self.resident_memory_bytes.set(process.memory() as i64);
            self.virtual_memory_bytes.set(process.virtual_memory() as i64);
        }

        if let Some(count) = thread_count(pid) {
            self.threads.set(count);
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(
                    [
                        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                    ]
                    .into_iter(),
                )
            }),
        }
    }

    /// Registers both families under `<prefix>_request_counter` and
    /// `<prefix>_request_duration`.
    pub fn register(&self, registry: &mut Registry, prefix: &str, component: &str) {
        registry.register(
            format!("{prefix}_request_counter"),
            format!("Total number of requests to the {component}"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{prefix}_request_duration"),
            format!("Histogram of request durations for the {component}"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(15));
    loop {
        interval.tick().await;
        let metrics = system_metrics.clone();
        // sysinfo refresh is blocking
        if let Err(e) = tokio::task::spawn_blocking(move || metrics.update_metrics()).await {
            tracing::warn!("System metrics refresh failed: {e}");
        }
    }
}
