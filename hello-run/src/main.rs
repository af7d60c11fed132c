use hello_run::config::{Config, SERVICE_NAME};
use hello_run::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;
    init_metrics(config.common.metrics_port)?;

    Application::build(config)
        .await?
        .run_until_stopped()
        .await?;

    Ok(())
}
