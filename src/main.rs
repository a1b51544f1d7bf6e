#[tokio::main]
async fn main() -> chatbot::error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("chatbot=info"))
        .init();

    if let Err(e) = chatbot::run().await {
        log::error!("Server stopped with an error: {e}");
        return Err(e);
    }

    log::info!("Server stopped");
    Ok(())
}
