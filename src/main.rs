use anyhow::Context;
use tracing::info;

use chatbot_echo::client::{api::ResponderClient, ui};
use chatbot_echo::config::AppConfig;
use chatbot_echo::server;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    // Log to a file so the terminal UI stays clean.
    if let Ok(file) = std::fs::File::create(&config.log_file) {
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_ansi(false)
            .with_env_filter(config.env_filter())
            .init();
    }

    let (addr, _server) = server::spawn_background(config.bind_addr)
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("chatbot running at http://{}", addr);

    let client = ResponderClient::new(&config.endpoint)?;
    ui::run(&client)
}
