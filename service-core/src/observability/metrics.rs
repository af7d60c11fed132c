use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Installs the Prometheus recorder with its own HTTP listener on `port`.
///
/// With no port the `metrics` macros stay no-ops.
pub fn init_metrics(port: Option<u16>) -> anyhow::Result<()> {
    let Some(port) = port else {
        tracing::debug!("Metrics exporter disabled");
        return Ok(());
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .with_context(|| format!("failed to install Prometheus exporter on {}", addr))?;

    tracing::info!("Prometheus exporter listening on {}", addr);
    Ok(())
}
