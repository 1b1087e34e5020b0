/*
[INPUT]:  Event URIs, paging parameters
[OUTPUT]: Event records and event listings
[POS]:    HTTP layer - event endpoints
[UPDATE]: When adding event endpoints
*/

use reqwest::Method;

use crate::http::payload::Payload;
use crate::http::{BalancedClient, Result};
use crate::types::{Event, Page};

const EVENTS_PATH: &str = "/v1/events";

impl BalancedClient {
    /// GET {uri}
    pub async fn retrieve_event(&self, uri: &str) -> Result<Event> {
        self.send_json(Method::GET, uri, &Payload::new()).await
    }

    /// GET /v1/events?limit={limit}&offset={offset}
    pub async fn list_events(&self, limit: u32, offset: u32) -> Result<Page<Event>> {
        self.send_json(Method::GET, EVENTS_PATH, &Payload::paging(limit, offset))
            .await
    }
}
