use clap::Parser;
use northwind::{Config, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = northwind::config::Args::parse();

    let config = Config::load(&args)?;
    config.validate()?;

    // If --validate flag is set, exit successfully after config validation
    if args.validate {
        println!("Configuration is valid.");
        return Ok(());
    }

    telemetry::init_telemetry(config.enable_otel_export)?;

    tracing::debug!("{:?}", args);

    let result = northwind::setup_database(&config.database).await;
    if let Ok(pool) = &result {
        tracing::info!(connections = pool.size(), "Northwind database is ready");
        pool.close().await;
    }

    telemetry::shutdown_telemetry();
    result.map(|_| ())
}
