/*
[INPUT]:  Hold requests, hold URIs, paging parameters
[OUTPUT]: Hold records, captured debits, hold listings
[POS]:    HTTP layer - hold endpoints
[UPDATE]: When adding hold endpoints or changing capture/void flow
*/

use reqwest::Method;

use crate::http::payload::Payload;
use crate::http::{BalancedClient, Result};
use crate::types::{Debit, Hold, HoldCapture, HoldUpdate, NewHold, Page};

impl BalancedClient {
    /// Place a hold against a card
    ///
    /// POST {uri}, usually an account's `holds_uri`
    pub async fn create_hold(&self, uri: &str, hold: &NewHold) -> Result<Hold> {
        self.send_json(Method::POST, uri, &hold.to_payload()).await
    }

    /// GET {uri}
    pub async fn retrieve_hold(&self, uri: &str) -> Result<Hold> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// Holds in the marketplace, most recent first
    ///
    /// GET /v1/marketplaces/{marketplace_id}/holds?limit={limit}&offset={offset}
    pub async fn list_holds(&self, limit: u32, offset: u32) -> Result<Page<Hold>> {
        let path = self.marketplace_path("holds")?;
        self.list_holds_for_account(&path, limit, offset).await
    }

    /// GET {uri}?limit={limit}&offset={offset}
    pub async fn list_holds_for_account(
        &self,
        uri: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Hold>> {
        self.send_json(Method::GET, uri, &Payload::paging(limit, offset)).await
    }

    /// PUT {uri}
    pub async fn update_hold(&self, uri: &str, update: &HoldUpdate) -> Result<Hold> {
        self.send_json(Method::PUT, uri, &update.to_payload()).await
    }

    /// Capture a hold, producing a debit
    ///
    /// POST {uri}, usually an account's `debits_uri`
    pub async fn capture_hold(&self, uri: &str, capture: &HoldCapture) -> Result<Debit> {
        self.send_json(Method::POST, uri, &capture.to_payload()).await
    }

    /// Void a hold. A voided hold can never be captured.
    ///
    /// PUT {uri} is_void=true
    pub async fn void_hold(&self, uri: &str, appears_on_statement_as: Option<&str>) -> Result<Hold> {
        let update = HoldUpdate {
            is_void: Some(true),
            appears_on_statement_as: appears_on_statement_as.map(str::to_string),
            ..HoldUpdate::default()
        };
        self.update_hold(uri, &update).await
    }
}
