//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   _____ __             __   ___          _
  / ___// /_____  _____/ /__/   |  ____  (_)
  \__ \/ __/ __ \/ ___/ //_/ /| | / __ \/ /
 ___/ / /_/ /_/ / /__/ ,< / ___ |/ /_/ / /
/____/\__/\____/\___/_/|_/_/  |_/ .___/_/
                               /_/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(port: u16, cache_backend: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}/api/stock", port);
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    info!("Cache:     {}", cache_backend);
    info!("{}", separator);
}
