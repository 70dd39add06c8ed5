mod helpers;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::helpers::{spawn_relay, spawn_upstream, StubNft, UpstreamConfig, GENESIS_ADDRESS};
    use axum::http::StatusCode;
    use gacha_sdk::errors::SdkErrors;
    use serde_json::{json, Value};

    fn metadata(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "description": format!("{name} description"),
            "base64image": "data:image/png;base64,Y2FyZA==",
        })
    }

    #[tokio::test]
    async fn test_list_nfts_in_listing_order() {
        let upstream = spawn_upstream(UpstreamConfig {
            nfts: vec![
                StubNft::new("0001", "QmSlow", Some(metadata("Carta 1")))
                    .delayed(Duration::from_millis(100)),
                StubNft::new("0002", "QmMissing", None),
                StubNft::new("0003", "QmFast", Some(metadata("Carta 3"))),
            ],
            ..Default::default()
        })
        .await;
        let relay = spawn_relay(&upstream, &[]).await;

        let nfts = relay.sdk.list_nfts(GENESIS_ADDRESS).await.unwrap();
        let ids: Vec<&str> = nfts.iter().map(|nft| nft.nftoken_id.as_str()).collect();
        assert_eq!(ids, vec!["0001", "0002", "0003"]);
        assert_eq!(nfts[0].name, "Carta 1");
        assert_eq!(nfts[0].base64image, "data:image/png;base64,Y2FyZA==");
        assert!(nfts[1].is_placeholder());
        assert_eq!(nfts[2].description, "Carta 3 description");

        assert_eq!(upstream.hits.listing(), 1);
        assert_eq!(upstream.hits.metadata(), 3);
    }

    #[tokio::test]
    async fn test_partial_metadata_uses_fallbacks() {
        let upstream = spawn_upstream(UpstreamConfig {
            nfts: vec![StubNft::new("0001", "QmBare", Some(json!({ "edition": 1 })))],
            ..Default::default()
        })
        .await;
        let relay = spawn_relay(&upstream, &[]).await;

        let nfts = relay.sdk.list_nfts(GENESIS_ADDRESS).await.unwrap();
        assert_eq!(nfts.len(), 1);
        assert_eq!(nfts[0].name, "Unknown Name");
        assert_eq!(nfts[0].description, "No description available");
        assert!(nfts[0].base64image.is_empty());
    }

    #[tokio::test]
    async fn test_empty_uri_skips_gateway() {
        let upstream = spawn_upstream(UpstreamConfig {
            nfts: vec![
                StubNft::new("0001", "", None),
                StubNft::new("0002", "QmFast", Some(metadata("Carta 2"))),
            ],
            ..Default::default()
        })
        .await;
        let relay = spawn_relay(&upstream, &[]).await;

        let nfts = relay.sdk.list_nfts(GENESIS_ADDRESS).await.unwrap();
        assert!(nfts[0].is_placeholder());
        assert_eq!(nfts[1].name, "Carta 2");
        assert_eq!(upstream.hits.metadata(), 1);
    }

    #[tokio::test]
    async fn test_account_without_nfts() {
        let upstream = spawn_upstream(UpstreamConfig::default()).await;
        let relay = spawn_relay(&upstream, &[]).await;

        let nfts = relay.sdk.list_nfts(GENESIS_ADDRESS).await.unwrap();
        assert!(nfts.is_empty());
        assert_eq!(upstream.hits.listing(), 1);
        assert_eq!(upstream.hits.metadata(), 0);
    }

    #[tokio::test]
    async fn test_empty_address_is_rejected() {
        let upstream = spawn_upstream(UpstreamConfig::default()).await;
        let relay = spawn_relay(&upstream, &[]).await;

        for address in ["", "   "] {
            match relay.sdk.list_nfts(address).await {
                Err(SdkErrors::RelayResponseError { status, .. }) => assert_eq!(status, 400),
                other => panic!("unexpected result: {other:?}"),
            }
        }
        assert_eq!(upstream.hits.listing(), 0);
    }

    #[tokio::test]
    async fn test_metadata_concurrency_of_one() {
        let upstream = spawn_upstream(UpstreamConfig {
            nfts: (0..4)
                .map(|i| {
                    StubNft::new(&format!("000{i}"), &format!("Qm{i}"), Some(metadata("Carta")))
                        .delayed(Duration::from_millis(50))
                })
                .collect(),
            ..Default::default()
        })
        .await;
        let relay = spawn_relay(&upstream, &["--metadata-concurrency", "1"]).await;

        let nfts = relay.sdk.list_nfts(GENESIS_ADDRESS).await.unwrap();
        assert_eq!(nfts.len(), 4);
        assert!(nfts.iter().all(|nft| !nft.is_placeholder()));
        assert_eq!(upstream.hits.metadata(), 4);
        assert_eq!(upstream.hits.metadata_peak(), 1);
    }

    #[tokio::test]
    async fn test_metadata_fetches_overlap_up_to_the_limit() {
        let upstream = spawn_upstream(UpstreamConfig {
            nfts: (0..6)
                .map(|i| {
                    StubNft::new(&format!("000{i}"), &format!("Qm{i}"), Some(metadata("Carta")))
                        .delayed(Duration::from_millis(200))
                })
                .collect(),
            ..Default::default()
        })
        .await;
        let relay = spawn_relay(&upstream, &["--metadata-concurrency", "3"]).await;

        let nfts = relay.sdk.list_nfts(GENESIS_ADDRESS).await.unwrap();
        assert_eq!(nfts.len(), 6);
        let peak = upstream.hits.metadata_peak();
        assert!(peak > 1, "fetches never overlapped");
        assert!(peak <= 3, "{peak} fetches in flight");
    }

    #[tokio::test]
    async fn test_listing_without_nfts_field_fails() {
        let upstream = spawn_upstream(UpstreamConfig {
            listing: Some((StatusCode::OK, json!({ "error": "actNotFound" }))),
            ..Default::default()
        })
        .await;
        let relay = spawn_relay(&upstream, &[]).await;

        let response = relay
            .sdk
            .client
            .get(relay.url.join("nfts/rAbc").unwrap())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 500);
        let body: Value = response.json().await.unwrap();
        assert!(body["message"].as_str().unwrap().contains("unexpected nft listing"));
        assert_eq!(upstream.hits.metadata(), 0);
    }

    #[tokio::test]
    async fn test_listing_failure_keeps_external_status() {
        let upstream = spawn_upstream(UpstreamConfig {
            listing: Some((StatusCode::NOT_FOUND, json!({ "error": "account not found" }))),
            ..Default::default()
        })
        .await;
        let relay = spawn_relay(&upstream, &[]).await;

        match relay.sdk.list_nfts(GENESIS_ADDRESS).await {
            Err(SdkErrors::RelayResponseError { status, message }) => {
                assert_eq!(status, 404);
                assert!(message.contains("404"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(upstream.hits.listing(), 1);
        assert_eq!(upstream.hits.metadata(), 0);
    }

    #[tokio::test]
    async fn test_mistyped_metadata_field_falls_back_alone() {
        let upstream = spawn_upstream(UpstreamConfig {
            nfts: vec![StubNft::new(
                "0001",
                "QmMixed",
                Some(json!({ "name": 5, "description": "Rara" })),
            )],
            ..Default::default()
        })
        .await;
        let relay = spawn_relay(&upstream, &[]).await;

        let nfts = relay.sdk.list_nfts(GENESIS_ADDRESS).await.unwrap();
        assert_eq!(nfts[0].name, "Unknown Name");
        assert_eq!(nfts[0].description, "Rara");
        assert!(!nfts[0].is_placeholder());
    }
}
