use label_server::{Config, Server, init_logger, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();

    print_banner();

    let config = Config::from_env();
    tracing::info!("🖨️  Label server starting on port {}", config.server_port);

    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
