//! Framez Core - Entry Point
//!
//! Boots the in-process mock auth core behind a small interactive console
//! shell standing in for the mobile screens.

use env_logger;
use log::info;

use framez_core::auth::AuthContext;
use framez_core::config::AppConfig;
use framez_core::feed::FeedCatalog;
use framez_core::shell;

// The auth core is Rc-based and not Send; the shell must stay on a
// current-thread runtime.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching Framez console...");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let mut ctx = AuthContext::new(config);
    let feed = FeedCatalog::default();

    if let Err(e) = shell::run(&mut ctx, &feed).await {
        eprintln!("Console I/O error: {}", e);
        std::process::exit(1);
    }
}
