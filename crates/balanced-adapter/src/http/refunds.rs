/*
[INPUT]:  Refund requests, refund URIs, paging parameters
[OUTPUT]: Refund records and refund listings
[POS]:    HTTP layer - refund endpoints
[UPDATE]: When adding refund endpoints or changing refund fields
*/

use reqwest::Method;

use crate::http::payload::Payload;
use crate::http::{BalancedClient, Result};
use crate::types::requests::description_update;
use crate::types::{Meta, NewRefund, Page, Refund};

impl BalancedClient {
    /// Refund all or part of a debit
    ///
    /// POST /v1/marketplaces/{marketplace_id}/refunds
    pub async fn issue_refund(&self, refund: &NewRefund) -> Result<Refund> {
        let path = self.marketplace_path("refunds")?;
        self.send_json(Method::POST, &path, &refund.to_payload()).await
    }

    /// GET {uri}
    pub async fn retrieve_refund(&self, uri: &str) -> Result<Refund> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// GET /v1/marketplaces/{marketplace_id}/refunds?limit={limit}&offset={offset}
    pub async fn list_refunds(&self, limit: u32, offset: u32) -> Result<Page<Refund>> {
        let path = self.marketplace_path("refunds")?;
        self.list_refunds_for_account(&path, limit, offset).await
    }

    /// GET {uri}?limit={limit}&offset={offset}
    pub async fn list_refunds_for_account(
        &self,
        uri: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Refund>> {
        self.send_json(Method::GET, uri, &Payload::paging(limit, offset)).await
    }

    /// PUT {uri}
    pub async fn update_refund(
        &self,
        uri: &str,
        description: Option<&str>,
        meta: &Meta,
    ) -> Result<Refund> {
        self.send_json(Method::PUT, uri, &description_update(description, meta))
            .await
    }
}
