use anyhow::Result;
use posts_core::{PostClient, ResourceClient};
use posts_driver::{DriverConfig, UreqTransport};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "posts_driver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DriverConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting request sequence");

    let client = ResourceClient::new(PostClient::new(&config.base_url), UreqTransport::new());
    let stdout = std::io::stdout();
    posts_driver::run(&client, &mut stdout.lock())
}
