mod common;
mod config;
mod network;
mod ui;

use std::error::Error;

use clap::Parser;
use dotenvy::dotenv;
use network::{RecommendationClient, RecommendationWorker};
use tokio::sync::mpsc;
use ui::HwibotApp;

#[derive(Parser)]
#[command(
    name = "hwibot",
    version,
    about = "Chat widget that recommends places for a keyword"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Recommendation endpoint, overrides the config file
    #[arg(long, env = "HWIBOT_ENDPOINT", value_name = "URL")]
    endpoint: Option<String>,
    /// Request timeout in seconds, overrides the config file
    #[arg(long, env = "HWIBOT_TIMEOUT_SECS", value_name = "SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config =
        config::load_config(&cli.config).with_overrides(cli.endpoint, cli.timeout_secs);

    let client = RecommendationClient::new(&app_config.endpoint, app_config.request_timeout())?;
    log::info!("Using recommendation endpoint {}", client.endpoint());

    // UI -> worker
    let (cmd_tx, cmd_rx) = mpsc::channel(32);
    // worker -> UI
    let (event_tx, event_rx) = mpsc::channel(32);

    tokio::spawn(RecommendationWorker::new(client, event_tx, cmd_rx).run());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([480.0, 720.0]),
        ..Default::default()
    };
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "HWIBOT",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("HwibotApp should only be initialized once");

            Ok(Box::new(HwibotApp::new(
                cc,
                app_config.no_results_message.clone(),
                app_config.font_path.as_deref(),
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )?;

    Ok(())
}
