use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{errors::SdkErrors, sdk::GachaSDK};

#[derive(Debug)]
pub struct GachaSDKBuilder {
    base_url: Url,
    client: Option<Client>,
    timeout: Option<Duration>,
}

impl GachaSDKBuilder {
    pub fn new(base_url: Url) -> Self {
        GachaSDKBuilder {
            base_url,
            client: None,
            timeout: None,
        }
    }

    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Ignored when a client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<GachaSDK, SdkErrors> {
        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };
        let mut base = self.base_url;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(GachaSDK {
            client,
            sign: base.join("sign")?,
            mint: base.join("mint")?,
            mint_proxy: base.join("mint-proxy")?,
            nfts: base.join("nfts")?,
        })
    }
}
