use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use riodeploy::cli::output::{console_event_handler, style, ROCKET};
use riodeploy::cli::Cli;
use riodeploy::execution::runner::PipelineRunner;
use riodeploy::net::identity::WifiIdentity;
use riodeploy::net::probe::TcpProbe;
use riodeploy::stages::{ConnectivityStage, DeployStage};
use riodeploy::Stage;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();
    let config = cli.to_config();

    // Initialize logging; library logs stay out of the progress view
    // unless the operator asks for them.
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    println!("{} {}", ROCKET, style("riodeploy").bold());

    let connectivity = ConnectivityStage::new(
        Arc::new(WifiIdentity),
        Arc::new(TcpProbe::default()),
        config.net_check_enabled,
    );
    let deploy = DeployStage::new(&config.working_dir);

    let stages: Vec<Box<dyn Stage>> = vec![Box::new(connectivity), Box::new(deploy)];
    let mut runner = PipelineRunner::new(stages);
    runner.add_event_handler(console_event_handler());

    let outcome = runner.run().await;
    if !outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
