/*
[INPUT]:  Bank account details, bank account and verification URIs
[OUTPUT]: Bank account records, verifications, listings
[POS]:    HTTP layer - bank account and micro-deposit verification endpoints
[UPDATE]: When adding bank account endpoints or changing verification flow
*/

use reqwest::Method;

use crate::http::payload::Payload;
use crate::http::{BalancedClient, Result};
use crate::types::{BankAccount, NewBankAccount, Page, Verification};

const BANK_ACCOUNTS_PATH: &str = "/v1/bank_accounts";

impl BalancedClient {
    /// Store a bank account. It must be verified before it can be debited.
    ///
    /// POST /v1/bank_accounts
    pub async fn create_bank_account(&self, bank_account: &NewBankAccount) -> Result<BankAccount> {
        self.send_json(Method::POST, BANK_ACCOUNTS_PATH, &bank_account.to_payload())
            .await
    }

    /// GET {uri}
    pub async fn retrieve_bank_account(&self, uri: &str) -> Result<BankAccount> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// GET /v1/bank_accounts?limit={limit}&offset={offset}
    pub async fn list_bank_accounts(&self, limit: u32, offset: u32) -> Result<Page<BankAccount>> {
        self.send_json(Method::GET, BANK_ACCOUNTS_PATH, &Payload::paging(limit, offset))
            .await
    }

    /// Permanently delete a bank account. Existing credits are unaffected.
    ///
    /// DELETE {uri}
    pub async fn delete_bank_account(&self, uri: &str) -> Result<()> {
        self.send_empty(Method::DELETE, uri, &Payload::new()).await
    }

    /// Start a micro-deposit verification
    ///
    /// POST {uri}/verifications
    pub async fn verify_bank_account(&self, uri: &str) -> Result<Verification> {
        let path = format!("{}/verifications", uri.trim_end_matches('/'));
        self.send_json(Method::POST, &path, &Payload::new()).await
    }

    /// GET {uri}
    pub async fn retrieve_verification(&self, uri: &str) -> Result<Verification> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// GET {uri}, a bank account's `verifications_uri`
    pub async fn list_verifications(&self, uri: &str) -> Result<Page<Verification>> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// Confirm the two trial deposit amounts (1 and 1 on test marketplaces)
    ///
    /// PUT {uri} amount_1={amount_1}&amount_2={amount_2}
    pub async fn confirm_verification(
        &self,
        uri: &str,
        amount_1: i64,
        amount_2: i64,
    ) -> Result<Verification> {
        let mut payload = Payload::new();
        payload
            .insert("amount_1", amount_1.to_string())
            .insert("amount_2", amount_2.to_string());
        self.send_json(Method::PUT, uri, &payload).await
    }
}
