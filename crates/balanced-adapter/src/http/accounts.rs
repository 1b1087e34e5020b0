/*
[INPUT]:  Account URIs, funding instrument URIs, underwriting details
[OUTPUT]: Account records
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding account endpoints or changing underwriting fields
*/

// ### Account Endpoints

use reqwest::Method;

use crate::http::payload::Payload;
use crate::http::{BalancedClient, Result};
use crate::types::requests::{business_payload, individual_payload};
use crate::types::{Account, Merchant, Person};

impl BalancedClient {
    /// Create an empty account in the marketplace
    ///
    /// POST /v1/marketplaces/{marketplace_id}/accounts
    pub async fn create_account(&self) -> Result<Account> {
        let path = self.marketplace_path("accounts")?;
        self.send_json(Method::POST, &path, &Payload::new()).await
    }

    /// GET {uri}
    pub async fn retrieve_account(&self, uri: &str) -> Result<Account> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// Attach a tokenized card, giving the account the buyer role
    ///
    /// PUT {uri} card_uri={card_uri}
    pub async fn add_card_to_account(&self, uri: &str, card_uri: &str) -> Result<Account> {
        let mut payload = Payload::new();
        payload.insert("card_uri", card_uri);
        self.send_json(Method::PUT, uri, &payload).await
    }

    /// Attach a bank account so the account can be credited
    ///
    /// PUT {uri} bank_account_uri={bank_account_uri}
    pub async fn add_bank_account_to_account(
        &self,
        uri: &str,
        bank_account_uri: &str,
    ) -> Result<Account> {
        let mut payload = Payload::new();
        payload.insert("bank_account_uri", bank_account_uri);
        self.send_json(Method::PUT, uri, &payload).await
    }

    /// Underwrite an individual or sole proprietor as a merchant
    ///
    /// POST /v1/marketplaces/{marketplace_id}/accounts merchant[type]=person
    pub async fn underwrite_individual(&self, merchant: &Merchant) -> Result<Account> {
        let path = self.marketplace_path("accounts")?;
        self.send_json(Method::POST, &path, &individual_payload(merchant))
            .await
    }

    /// Underwrite a business together with its principal owner
    ///
    /// POST /v1/marketplaces/{marketplace_id}/accounts merchant[type]=business
    pub async fn underwrite_business(&self, merchant: &Merchant, person: &Person) -> Result<Account> {
        let path = self.marketplace_path("accounts")?;
        self.send_json(Method::POST, &path, &business_payload(merchant, person))
            .await
    }
}
