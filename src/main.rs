#[tokio::main]
async fn main() -> std::io::Result<()> {
    worm_server::run_with_config().await
}
