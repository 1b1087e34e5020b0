/*
[INPUT]:  Client configuration, API root
[OUTPUT]: Test API keys, marketplaces, provisioned environments
[POS]:    HTTP layer - sandbox bootstrap
[UPDATE]: When changing how test credentials are provisioned
*/

use reqwest::Method;
use tracing::info;

use crate::http::payload::Payload;
use crate::http::{BalancedClient, BalancedError, ClientConfig, DEFAULT_API_ROOT, Environment, Result};
use crate::types::{ApiKey, Marketplace};

impl BalancedClient {
    /// Issue a new API key. Works unauthenticated.
    ///
    /// POST /v1/api_keys
    pub async fn create_api_key(&self) -> Result<ApiKey> {
        self.send_json(Method::POST, "/v1/api_keys", &Payload::new())
            .await
    }

    /// Create the marketplace owned by the current key
    ///
    /// POST /v1/marketplaces
    pub async fn create_marketplace(&self) -> Result<Marketplace> {
        self.send_json(Method::POST, "/v1/marketplaces", &Payload::new())
            .await
    }
}

impl Environment {
    /// Provision a fresh test key and marketplace on the public API root
    pub async fn provision_sandbox(config: ClientConfig) -> Result<Environment> {
        Self::provision(config, DEFAULT_API_ROOT).await
    }

    /// Provision a fresh test key and marketplace against `api_root`
    pub async fn provision(config: ClientConfig, api_root: &str) -> Result<Environment> {
        let anonymous = BalancedClient::with_config(
            config.clone(),
            Environment::new(api_root, None, None),
        )?;
        let api_key = anonymous.create_api_key().await?;
        let secret = api_key
            .secret
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| {
                BalancedError::Config(format!("api key {} was issued without a secret", api_key.id))
            })?;

        let keyed = BalancedClient::with_config(
            config,
            Environment::new(api_root, Some(secret.clone()), None),
        )?;
        let marketplace = keyed.create_marketplace().await?;
        info!(
            api_key_id = %api_key.id,
            marketplace_id = %marketplace.id,
            "provisioned sandbox marketplace"
        );

        Ok(Environment::new(api_root, Some(secret), Some(marketplace.id)))
    }
}
