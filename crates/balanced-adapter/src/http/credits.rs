/*
[INPUT]:  Credit amounts, bank account details or URIs, paging parameters
[OUTPUT]: Credit records and credit listings
[POS]:    HTTP layer - credit (payout) endpoints
[UPDATE]: When adding credit endpoints or changing payout fields
*/

use reqwest::Method;

use crate::http::payload::Payload;
use crate::http::{BalancedClient, Result};
use crate::types::{Credit, NewBankAccount, NewCredit, Page};

const CREDITS_PATH: &str = "/v1/credits";

impl BalancedClient {
    /// Credit a bank account supplied inline. The bank account is not stored.
    ///
    /// POST /v1/credits
    pub async fn credit_new_bank_account(
        &self,
        amount: i64,
        description: Option<&str>,
        bank_account: &NewBankAccount,
    ) -> Result<Credit> {
        let mut payload = Payload::new();
        payload
            .insert("amount", amount.to_string())
            .add_optional("description", description);
        bank_account.write_fields(&mut payload, Some("bank_account"));
        self.send_json(Method::POST, CREDITS_PATH, &payload).await
    }

    /// Credit a stored bank account
    ///
    /// POST {uri}, the bank account's `credits_uri`
    pub async fn credit_existing_bank_account(
        &self,
        uri: &str,
        description: Option<&str>,
        amount: i64,
    ) -> Result<Credit> {
        let mut payload = Payload::new();
        payload
            .insert("amount", amount.to_string())
            .add_optional("description", description);
        self.send_json(Method::POST, uri, &payload).await
    }

    /// POST {uri}, an account's `credits_uri`
    pub async fn create_credit_for_account(&self, uri: &str, credit: &NewCredit) -> Result<Credit> {
        self.send_json(Method::POST, uri, &credit.to_payload()).await
    }

    /// GET {uri}
    pub async fn retrieve_credit(&self, uri: &str) -> Result<Credit> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// GET /v1/credits?limit={limit}&offset={offset}
    pub async fn list_credits(&self, limit: u32, offset: u32) -> Result<Page<Credit>> {
        self.list_credits_for_uri(CREDITS_PATH, limit, offset).await
    }

    /// List credits under a bank account's or an account's `credits_uri`
    pub async fn list_credits_for_uri(
        &self,
        uri: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Credit>> {
        self.send_json(Method::GET, uri, &Payload::paging(limit, offset)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BalancedClient, Environment};
    use crate::types::{BankAccountType, Meta, NewBankAccount};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_credit_new_bank_account_nests_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/credits"))
            .and(body_string_contains("amount=10000"))
            .and(body_string_contains("bank_account%5Btype%5D=checking"))
            .and(body_string_contains("bank_account%5Bmeta%5Bpayroll%5D%5D=march"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "CR1",
                "uri": "/v1/credits/CR1",
                "amount": 10000,
                "bank_account": {"id": "BA1", "uri": "/v1/bank_accounts/BA1", "last_four": "0001"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BalancedClient::new(Environment::new(
            server.uri(),
            Some("ak-test".to_string()),
            None,
        ))
        .expect("client init");

        let meta: Meta = [("payroll".to_string(), "march".to_string())].into_iter().collect();
        let credit = client
            .credit_new_bank_account(
                10_000,
                None,
                &NewBankAccount {
                    name: "Johann Bernoulli".to_string(),
                    account_number: "9900000001".to_string(),
                    routing_number: "121000358".to_string(),
                    account_type: BankAccountType::Checking,
                    meta,
                },
            )
            .await
            .expect("credit_new_bank_account failed");

        assert_eq!(credit.amount, 10_000);
        assert_eq!(
            credit.bank_account.and_then(|ba| ba.last_four).as_deref(),
            Some("0001")
        );
    }
}
