use crate::utils::{
    metrics::{Method, Metrics, Status},
    otel::TracingContext,
};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, Status as SpanStatus, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info};

/// Span plus request metrics bookkeeping shared by every service.
#[derive(Clone, Debug)]
pub struct OperationTracer {
    tracer_name: &'static str,
    metrics: Metrics,
}

impl OperationTracer {
    /// `tracer_name` is the kebab-case service name; metrics are registered
    /// under its snake_case form.
    pub fn new(tracer_name: &'static str, component: &str, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, &tracer_name.replace('-', "_"), component);

        Self {
            tracer_name,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer(self.tracer_name)
    }

    pub fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    pub fn complete_tracing_success(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    pub fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        let span = tracing_ctx.cx.span();
        span.add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            span.set_status(SpanStatus::Ok);
            info!("✅ Operation completed successfully: {message}");
        } else {
            span.set_status(SpanStatus::error(message.to_string()));
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        span.end();
    }
}
