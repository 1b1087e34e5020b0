/*
[INPUT]:  Debit requests, debit URIs, paging parameters
[OUTPUT]: Debit records, refunds, debit listings
[POS]:    HTTP layer - debit endpoints
[UPDATE]: When adding debit endpoints or changing debit fields
*/

use reqwest::Method;

use crate::http::payload::Payload;
use crate::http::{BalancedClient, Result};
use crate::types::requests::description_update;
use crate::types::{Debit, Meta, NewDebit, Page, Refund};

impl BalancedClient {
    /// Debit an account. Card debits come back with the hold captured for them.
    ///
    /// POST {uri}, usually an account's `debits_uri`
    pub async fn create_debit(&self, uri: &str, debit: &NewDebit) -> Result<Debit> {
        self.send_json(Method::POST, uri, &debit.to_payload()).await
    }

    /// GET {uri}
    pub async fn retrieve_debit(&self, uri: &str) -> Result<Debit> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// GET /v1/marketplaces/{marketplace_id}/debits?limit={limit}&offset={offset}
    pub async fn list_debits(&self, limit: u32, offset: u32) -> Result<Page<Debit>> {
        let path = self.marketplace_path("debits")?;
        self.list_debits_for_account(&path, limit, offset).await
    }

    /// GET {uri}?limit={limit}&offset={offset}
    pub async fn list_debits_for_account(
        &self,
        uri: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Debit>> {
        self.send_json(Method::GET, uri, &Payload::paging(limit, offset)).await
    }

    /// PUT {uri}
    pub async fn update_debit(
        &self,
        uri: &str,
        description: Option<&str>,
        meta: &Meta,
    ) -> Result<Debit> {
        self.send_json(Method::PUT, uri, &description_update(description, meta))
            .await
    }

    /// Refund the full amount of a debit
    ///
    /// POST {uri}, the debit's `refunds_uri`
    pub async fn refund_debit(&self, uri: &str) -> Result<Refund> {
        self.send_json(Method::POST, uri, &Payload::new()).await
    }
}
