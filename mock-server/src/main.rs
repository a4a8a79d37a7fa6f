use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_API_KEY: &str = "test-api-key";

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
    let api_key = std::env::var("ASAAS_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("asaas mock listening on http://{addr}");
    asaas_mock::run(listener, &api_key).await
}
