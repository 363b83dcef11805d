use arcboard_server::{init_tracing, serve, ServerConfig};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();
    init_tracing(config.log_json);
    serve(config).await
}
