use std::net::TcpListener;

use cricket_scores::config::settings::get_config;
use cricket_scores::telemetry::{get_subscriber, init_subscriber};
use cricket_scores::{run, CricbuzzClient};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "cricket-scores".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let client = CricbuzzClient::new(&config.upstream.base_url, &config.upstream.user_agent)
        .map_err(std::io::Error::other)?;

    let address = config.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!(%address, upstream = client.base_url(), "starting cricket scores server");

    run(listener, client)?.await
}
