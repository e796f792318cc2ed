//! Telemetry setup for OpenTelemetry integration
//!
//! The layer is built before the subscriber is installed and composed into it,
//! so spans reach both the log formatter and the OTLP exporter.

use anyhow::Result;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

const ENDPOINT_VAR: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

pub type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// OpenTelemetry layer if enabled
///
/// # Environment Variables
///
/// - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (e.g., http://localhost:4317)
/// - `OTEL_SERVICE_NAME`: Service name (default: sleepwell-quotes)
///
/// # Example
///
/// ```text
/// OTEL_EXPORTER_OTLP_ENDPOINT=http://localhost:4317 \
/// OTEL_SERVICE_NAME=sleepwell-dev \
///     ./sleepwell-server
/// ```
pub fn otel_layer<S>() -> Result<Option<BoxedLayer<S>>>
where
    S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
{
    let Ok(endpoint) = std::env::var(ENDPOINT_VAR) else {
        return Ok(None);
    };

    #[cfg(feature = "telemetry")]
    {
        build_layer(&endpoint).map(Some)
    }

    #[cfg(not(feature = "telemetry"))]
    {
        anyhow::bail!(
            "{} is set to {} but feature 'telemetry' is not enabled (rebuild with --features telemetry)",
            ENDPOINT_VAR,
            endpoint
        )
    }
}

#[cfg(feature = "telemetry")]
fn build_layer<S>(endpoint: &str) -> Result<BoxedLayer<S>>
where
    S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
{
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::{runtime, trace::TracerProvider, Resource};

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "sleepwell-quotes".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_resource(Resource::new(vec![KeyValue::new(
            "service.name",
            service_name.clone(),
        )]))
        .build();

    let tracer = provider.tracer(service_name);
    opentelemetry::global::set_tracer_provider(provider);

    Ok(Box::new(tracing_opentelemetry::layer().with_tracer(tracer)))
}

/// Flush pending spans
pub fn shutdown() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}
