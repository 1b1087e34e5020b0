/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed resource records decoded from success bodies
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new resources are added
*/

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::VerificationState;

/// Free-form metadata attached to most resources
pub type Meta = HashMap<String, String>;

/// Paged listing of any resource.
///
/// Navigation URIs can be passed back verbatim as the path of a later call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u32,
    pub total: u32,
    pub uri: Option<String>,
    pub first_uri: Option<String>,
    pub next_uri: Option<String>,
    pub previous_uri: Option<String>,
    pub last_uri: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            limit: 0,
            offset: 0,
            total: 0,
            uri: None,
            first_uri: None,
            next_uri: None,
            previous_uri: None,
            last_uri: None,
        }
    }
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next_uri.as_deref().is_some_and(|uri| !uri.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKey {
    pub id: String,
    pub uri: String,
    pub secret: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub merchant: Option<Merchant>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Marketplace {
    pub id: String,
    pub uri: String,
    pub name: Option<String>,
    pub domain_url: Option<String>,
    pub support_email_address: Option<String>,
    pub support_phone_number: Option<String>,
    pub in_escrow: i64,
    pub owner_account: Option<Account>,
    pub accounts_uri: Option<String>,
    pub bank_accounts_uri: Option<String>,
    pub callbacks_uri: Option<String>,
    pub cards_uri: Option<String>,
    pub credits_uri: Option<String>,
    pub debits_uri: Option<String>,
    pub events_uri: Option<String>,
    pub holds_uri: Option<String>,
    pub refunds_uri: Option<String>,
    pub transactions_uri: Option<String>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub uri: String,
    pub name: Option<String>,
    pub email_address: Option<String>,
    pub roles: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub bank_accounts_uri: Option<String>,
    pub cards_uri: Option<String>,
    pub credits_uri: Option<String>,
    pub debits_uri: Option<String>,
    pub holds_uri: Option<String>,
    pub refunds_uri: Option<String>,
    pub transactions_uri: Option<String>,
    pub meta: Meta,
}

impl Account {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Underwriting details for an individual or a business
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Merchant {
    pub id: Option<String>,
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub merchant_type: Option<String>,
    pub name: String,
    pub phone_number: String,
    pub email_address: Option<String>,
    pub tax_id: Option<String>,
    pub dob: Option<String>,
    pub street_address: String,
    pub city: Option<String>,
    pub postal_code: String,
    pub country_code: Option<String>,
    pub balance: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub accounts_uri: Option<String>,
    pub api_keys_uri: Option<String>,
    pub meta: Meta,
}

/// Principal owner submitted with a business underwriting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub dob: String,
    pub street_address: String,
    pub postal_code: String,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub id: String,
    pub uri: String,
    pub account: Option<Account>,
    pub brand: Option<String>,
    pub card_type: Option<String>,
    pub last_four: Option<String>,
    pub name: Option<String>,
    pub expiration_month: u32,
    pub expiration_year: u32,
    pub hash: Option<String>,
    pub is_valid: bool,
    pub can_debit: bool,
    pub phone_number: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hold {
    pub id: String,
    pub uri: String,
    pub amount: i64,
    pub account: Option<Account>,
    pub source: Option<Card>,
    pub debit: Option<Box<Debit>>,
    pub description: Option<String>,
    pub fee: Option<i64>,
    pub is_void: bool,
    pub transaction_number: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Debit {
    pub id: String,
    pub uri: String,
    pub amount: i64,
    pub status: Option<String>,
    pub account: Option<Account>,
    pub hold: Option<Hold>,
    pub source: Option<Card>,
    pub appears_on_statement_as: Option<String>,
    pub description: Option<String>,
    pub fee: Option<i64>,
    pub on_behalf_of: Option<Account>,
    pub refunds_uri: Option<String>,
    pub transaction_number: Option<String>,
    pub available_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credit {
    pub id: String,
    pub uri: String,
    pub amount: i64,
    pub status: Option<String>,
    pub account: Option<Account>,
    pub bank_account: Option<BankAccount>,
    pub destination: Option<BankAccount>,
    pub appears_on_statement_as: Option<String>,
    pub description: Option<String>,
    pub fee: Option<i64>,
    pub transaction_number: Option<String>,
    pub available_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Refund {
    pub id: String,
    pub uri: String,
    pub amount: i64,
    pub account: Option<Account>,
    pub debit: Option<Debit>,
    pub appears_on_statement_as: Option<String>,
    pub description: Option<String>,
    pub fee: Option<i64>,
    pub transaction_number: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    pub id: String,
    pub uri: String,
    pub name: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub bank_name: Option<String>,
    pub bank_code: Option<String>,
    pub last_four: Option<String>,
    pub fingerprint: Option<String>,
    pub is_valid: bool,
    pub can_debit: bool,
    pub account_uri: Option<String>,
    pub credits_uri: Option<String>,
    pub verification_uri: Option<String>,
    pub verifications_uri: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub meta: Meta,
}

/// Micro-deposit verification of a bank account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Verification {
    pub id: String,
    pub uri: String,
    pub attempts: u32,
    pub remaining_attempts: u32,
    pub state: Option<VerificationState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// Resource the event is about; its shape depends on `event_type`
    pub entity: serde_json::Value,
    pub callback_uri: Option<String>,
    pub callback_statuses: Option<CallbackStatuses>,
    pub occurred_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbackStatuses {
    pub failed: u32,
    pub pending: u32,
    pub retrying: u32,
    pub succeeded: u32,
}
