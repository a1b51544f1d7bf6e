pub mod config;
pub mod error;
pub mod responder;
pub mod server;

use log::info;

use config::Config;
use error::Result;

pub use responder::{Reply, Responder, ResponderOptions, respond};

/// Load configuration and serve the chat page and API until shutdown.
pub async fn run() -> Result<()> {
    info!("Initializing chatbot");
    let config = Config::from_env()?;
    server::serve(&config).await
}
