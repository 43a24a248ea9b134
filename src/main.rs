mod render;

use std::error::Error;

use drag_puzzle::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so they stay out of the drawn grid.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(seed = ?config.seed, "starting puzzle");

    if std::env::args().skip(1).any(|arg| arg == "--print") {
        render::print(&config)
    } else {
        render::run(&config)
    }
}
