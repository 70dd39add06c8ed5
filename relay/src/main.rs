use clap::Parser;
use relay::{errors::ServerError, server::start, Args};
#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    start(args).await?;
    Ok(())
}
