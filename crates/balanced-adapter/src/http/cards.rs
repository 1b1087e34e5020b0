/*
[INPUT]:  Card details, card URIs, paging parameters
[OUTPUT]: Card records and card listings
[POS]:    HTTP layer - card endpoints
[UPDATE]: When adding card endpoints or changing card fields
*/

use reqwest::Method;

use crate::http::payload::Payload;
use crate::http::{BalancedClient, Result};
use crate::types::{Card, Meta, NewCard, Page};

impl BalancedClient {
    /// Tokenize a card into the marketplace
    ///
    /// POST /v1/marketplaces/{marketplace_id}/cards
    pub async fn tokenize_card(&self, card: &NewCard) -> Result<Card> {
        let path = self.marketplace_path("cards")?;
        self.send_json(Method::POST, &path, &card.to_payload()).await
    }

    /// GET {uri}
    pub async fn retrieve_card(&self, uri: &str) -> Result<Card> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// GET /v1/marketplaces/{marketplace_id}/cards?limit={limit}&offset={offset}
    pub async fn list_cards(&self, limit: u32, offset: u32) -> Result<Page<Card>> {
        let path = self.marketplace_path("cards")?;
        self.list_cards_for_uri(&path, limit, offset).await
    }

    /// List cards under any `cards_uri`, such as an account's
    pub async fn list_cards_for_uri(&self, uri: &str, limit: u32, offset: u32) -> Result<Page<Card>> {
        self.send_json(Method::GET, uri, &Payload::paging(limit, offset)).await
    }

    /// Replace card metadata
    ///
    /// PUT {uri}
    pub async fn update_card(&self, uri: &str, meta: &Meta) -> Result<Card> {
        let mut payload = Payload::new();
        payload.flatten_meta("meta", meta);
        self.send_json(Method::PUT, uri, &payload).await
    }

    /// Mark a card invalid so it can no longer be charged
    ///
    /// PUT {uri} is_valid=false
    pub async fn invalidate_card(&self, uri: &str) -> Result<Card> {
        let mut payload = Payload::new();
        payload.insert("is_valid", "false");
        self.send_json(Method::PUT, uri, &payload).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BalancedClient, Environment};
    use crate::types::NewCard;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> BalancedClient {
        BalancedClient::new(Environment::new(
            server.uri(),
            Some("ak-test".to_string()),
            Some("TEST-MP1".to_string()),
        ))
        .expect("client init")
    }

    #[tokio::test]
    async fn test_tokenize_card() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/marketplaces/TEST-MP1/cards"))
            .and(body_string_contains("card_number=4111111111111111"))
            .and(body_string_contains("expiration_month=12"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "CC1",
                "uri": "/v1/marketplaces/TEST-MP1/cards/CC1",
                "last_four": "1111",
                "expiration_month": 12,
                "expiration_year": 2030,
                "is_valid": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let card = client(&server)
            .tokenize_card(&NewCard {
                card_number: "4111111111111111".to_string(),
                expiration_year: 2030,
                expiration_month: 12,
                ..NewCard::default()
            })
            .await
            .expect("tokenize_card failed");

        assert_eq!(card.id, "CC1");
        assert_eq!(card.last_four.as_deref(), Some("1111"));
        assert!(card.is_valid);
    }

    #[tokio::test]
    async fn test_list_cards_sends_paging_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/marketplaces/TEST-MP1/cards"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [],
                "limit": 10,
                "offset": 0,
                "total": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client(&server).list_cards(10, 0).await.expect("list_cards failed");
        assert!(page.items.is_empty());
        assert_eq!(page.limit, 10);
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn test_invalidate_card() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v1/marketplaces/TEST-MP1/cards/CC1"))
            .and(body_string_contains("is_valid=false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "CC1",
                "uri": "/v1/marketplaces/TEST-MP1/cards/CC1",
                "is_valid": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let card = client(&server)
            .invalidate_card("/v1/marketplaces/TEST-MP1/cards/CC1")
            .await
            .expect("invalidate_card failed");
        assert!(!card.is_valid);
    }
}
