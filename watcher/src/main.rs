mod alert;
mod catalog;
mod config;
mod notifier;
mod watch;

use anyhow::Result;
use arsha::HttpClient;
use config::Config;
use notifier::DesktopNotifier;
use watch::Watcher;

#[tokio::main]
async fn main() -> Result<()> {
    common::setup_env();
    start_watcher().await
}

async fn start_watcher() -> Result<()> {
    let config = Config::from_env()?;
    let client = HttpClient::with_base_url(&config.base_url)?;
    let watcher = Watcher::new(config, client, DesktopNotifier);

    watcher.run(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
