use analysis_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, configuration, logging)
    let config = setup_environment();

    tracing::info!("Analysis server starting...");

    // 2. Initialize server state
    let state = ServerState::initialize(&config);

    // 3. Run the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
