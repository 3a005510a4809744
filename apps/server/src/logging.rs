//! Logging and OpenTelemetry initialization
//!
//! Console output is always on (JSON or human-readable). File output with
//! rotation and OTLP trace export are opt-in via [`LoggingConfig`]. `RUST_LOG`
//! overrides the configured level when set.

use crate::config::LoggingConfig;
use anyhow::Context;
use opentelemetry::{global, trace::TracerProvider as _, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    runtime,
    trace::{self as sdktrace, Sampler, TracerProvider},
    Resource,
};
use std::time::Duration;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Crate targets that follow `logging.level` when `RUST_LOG` is unset.
const TARGETS: [&str; 3] = ["bazaar", "bazaar_catalog", "bazaar_registry_client"];

/// Holds the non-blocking file writer open; flushes trace export on drop.
pub struct TelemetryGuard {
    _file: Option<WorkerGuard>,
    tracing_exported: bool,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if self.tracing_exported {
            shutdown_telemetry();
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// A failing OTLP exporter is reported and skipped; the service still starts.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<TelemetryGuard> {
    let mut layers = vec![fmt_layer(config.json, true, std::io::stdout)];

    let file = if config.file_enabled {
        let (writer, guard) = file_writer(config)?;
        layers.push(fmt_layer(config.json, false, writer));
        Some(guard)
    } else {
        None
    };

    let provider = if config.opentelemetry_enabled {
        Some(tracer_provider(config))
    } else {
        None
    };
    let mut export_error = None;
    let provider = match provider.transpose() {
        Ok(provider) => provider,
        Err(e) => {
            export_error = Some(e);
            None
        }
    };
    if let Some(provider) = &provider {
        layers.push(
            tracing_opentelemetry::layer()
                .with_tracer(provider.tracer("bazaar"))
                .with_tracked_inactivity(true)
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(layers)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    let tracing_exported = provider.is_some();
    if let Some(provider) = provider {
        global::set_tracer_provider(provider);
    }
    if let Some(e) = export_error {
        tracing::warn!(error = %e, "OpenTelemetry disabled: exporter setup failed");
    }

    tracing::info!(
        json = config.json,
        file = config.file_enabled,
        tracing_exported,
        service = %config.service_name,
        environment = %config.deployment_environment,
        "Logging initialized"
    );

    Ok(TelemetryGuard {
        _file: file,
        tracing_exported,
    })
}

/// Flush and stop trace export. Also runs when the [`TelemetryGuard`] drops.
pub fn shutdown_telemetry() {
    global::shutdown_tracer_provider();
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .chain(std::iter::once("tower_http=info".to_string()))
            .collect();
        EnvFilter::new(directives.join(","))
    })
}

fn fmt_layer<W>(json: bool, ansi: bool, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = fmt::layer().with_ansi(ansi).with_writer(writer);
    if json {
        base.json()
            .with_current_span(true)
            .with_span_list(false)
            .boxed()
    } else {
        base.with_target(true).boxed()
    }
}

fn file_writer(config: &LoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let dir = &config.file_directory;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {dir}"))?;

    let prefix = config.file_prefix.as_str();
    let appender: RollingFileAppender = match config.file_rotation.as_str() {
        "hourly" => rolling::hourly(dir, prefix),
        "minutely" => rolling::minutely(dir, prefix),
        "never" => rolling::never(dir, format!("{prefix}.log")),
        _ => rolling::daily(dir, prefix),
    };
    Ok(tracing_appender::non_blocking(appender))
}

fn tracer_provider(config: &LoggingConfig) -> anyhow::Result<TracerProvider> {
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(&config.otlp_endpoint)
        .with_timeout(Duration::from_secs(config.otlp_timeout_seconds))
        .build_span_exporter()
        .context("Failed to create OTLP exporter")?;

    Ok(TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_config(
            sdktrace::Config::default()
                .with_sampler(sampler(config.trace_sample_ratio))
                .with_resource(resource(config)),
        )
        .build())
}

fn sampler(ratio: f64) -> Sampler {
    match ratio {
        r if r >= 1.0 => Sampler::AlwaysOn,
        r if r <= 0.0 => Sampler::AlwaysOff,
        r => Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(r))),
    }
}

fn resource(config: &LoggingConfig) -> Resource {
    let version = config
        .service_version
        .as_deref()
        .unwrap_or(env!("CARGO_PKG_VERSION"))
        .to_string();

    Resource::new([
        KeyValue::new("service.name", config.service_name.clone()),
        KeyValue::new("service.version", version),
        KeyValue::new(
            "deployment.environment",
            config.deployment_environment.clone(),
        ),
    ])
}
