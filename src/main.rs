#[tokio::main]
async fn main() -> anyhow::Result<()> {
    aniscrape::cli::run().await
}
