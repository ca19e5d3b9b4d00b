use anyhow::Result;
use summit::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
