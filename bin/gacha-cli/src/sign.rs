use clap::Parser;
use gacha_sdk::GachaSDK;
use url::Url;

use crate::errors::CliErrors;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Sign {
    #[arg(long, env)]
    pub relay_url: Url,
    #[arg(long, short)]
    pub message: String,
}

impl Sign {
    pub async fn run(self) -> Result<(), CliErrors> {
        let sdk = GachaSDK::new(self.relay_url)?;
        let result = sdk.sign(&self.message).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }
}
