/*
[INPUT]:  Caller-supplied resource fields
[OUTPUT]: Form payloads for create/update operations
[POS]:    Data layer - request definitions for API communication
[UPDATE]: When API request fields change or new requests are added
*/

use crate::http::payload::{Payload, nested_key};

use super::enums::{BankAccountType, MerchantType};
use super::models::{Merchant, Meta, Person};

/// Card tokenization request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCard {
    pub card_number: String,
    pub expiration_year: u32,
    pub expiration_month: u32,
    pub security_code: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub meta: Meta,
}

impl NewCard {
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload
            .insert("card_number", self.card_number.as_str())
            .insert("expiration_year", self.expiration_year.to_string())
            .insert("expiration_month", self.expiration_month.to_string())
            .add_optional("security_code", self.security_code.as_deref())
            .add_optional("name", self.name.as_deref())
            .add_optional("phone_number", self.phone_number.as_deref())
            .add_optional("street_address", self.street_address.as_deref())
            .add_optional("city", self.city.as_deref())
            .add_optional("state", self.state.as_deref())
            .add_optional("postal_code", self.postal_code.as_deref())
            .add_optional("country_code", self.country_code.as_deref())
            .flatten_meta("meta", &self.meta);
        payload
    }
}

/// Bank account details, stored or sent inline with a credit
#[derive(Debug, Clone, PartialEq)]
pub struct NewBankAccount {
    pub name: String,
    pub account_number: String,
    pub routing_number: String,
    pub account_type: BankAccountType,
    pub meta: Meta,
}

impl NewBankAccount {
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        self.write_fields(&mut payload, None);
        payload
    }

    /// Write the fields under `parent[...]`, or at the top level
    pub(crate) fn write_fields(&self, payload: &mut Payload, parent: Option<&str>) {
        let key = |field: &str| match parent {
            Some(parent) => nested_key(parent, field),
            None => field.to_string(),
        };
        payload
            .insert(key("name"), self.name.as_str())
            .insert(key("account_number"), self.account_number.as_str())
            .insert(key("routing_number"), self.routing_number.as_str())
            .insert(key("type"), self.account_type.as_str())
            .flatten_meta(&key("meta"), &self.meta);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewHold {
    pub amount: i64,
    pub account_uri: Option<String>,
    pub appears_on_statement_as: Option<String>,
    pub description: Option<String>,
    pub source_uri: Option<String>,
    pub card_uri: Option<String>,
    pub meta: Meta,
}

impl NewHold {
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload
            .insert("amount", self.amount.to_string())
            .add_optional("account_uri", self.account_uri.as_deref())
            .add_optional("appears_on_statement_as", self.appears_on_statement_as.as_deref())
            .add_optional("description", self.description.as_deref())
            .add_optional("source_uri", self.source_uri.as_deref())
            .add_optional("card_uri", self.card_uri.as_deref())
            .flatten_meta("meta", &self.meta);
        payload
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldUpdate {
    pub description: Option<String>,
    pub appears_on_statement_as: Option<String>,
    pub is_void: Option<bool>,
    pub meta: Meta,
}

impl HoldUpdate {
    pub fn to_payload(&self) -> Payload {
        let is_void = self.is_void.map(|v| v.to_string());
        let mut payload = Payload::new();
        payload
            .add_optional("description", self.description.as_deref())
            .add_optional("appears_on_statement_as", self.appears_on_statement_as.as_deref())
            .add_optional("is_void", is_void.as_deref())
            .flatten_meta("meta", &self.meta);
        payload
    }
}

/// Capture of a hold into a debit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldCapture {
    pub hold_uri: String,
    pub description: Option<String>,
    pub appears_on_statement_as: Option<String>,
}

impl HoldCapture {
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload
            .add_optional("hold_uri", Some(self.hold_uri.as_str()))
            .add_optional("description", self.description.as_deref())
            .add_optional("appears_on_statement_as", self.appears_on_statement_as.as_deref());
        payload
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewDebit {
    pub amount: Option<i64>,
    pub description: Option<String>,
    pub appears_on_statement_as: Option<String>,
    pub account_uri: Option<String>,
    pub on_behalf_of_uri: Option<String>,
    pub hold_uri: Option<String>,
    pub source_uri: Option<String>,
    pub meta: Meta,
}

impl NewDebit {
    pub fn to_payload(&self) -> Payload {
        let amount = self.amount.map(|a| a.to_string());
        let mut payload = Payload::new();
        payload
            .add_optional("amount", amount.as_deref())
            .add_optional("description", self.description.as_deref())
            .add_optional("appears_on_statement_as", self.appears_on_statement_as.as_deref())
            .add_optional("account_uri", self.account_uri.as_deref())
            .add_optional("on_behalf_of_uri", self.on_behalf_of_uri.as_deref())
            .add_optional("hold_uri", self.hold_uri.as_deref())
            .add_optional("source_uri", self.source_uri.as_deref())
            .flatten_meta("meta", &self.meta);
        payload
    }
}

/// Credit created through an account's `credits_uri`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCredit {
    pub amount: i64,
    pub description: Option<String>,
    pub appears_on_statement_as: Option<String>,
    pub destination_uri: Option<String>,
    pub bank_account_uri: Option<String>,
    pub meta: Meta,
}

impl NewCredit {
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload
            .insert("amount", self.amount.to_string())
            .add_optional("description", self.description.as_deref())
            .add_optional("appears_on_statement_as", self.appears_on_statement_as.as_deref())
            .add_optional("destination_uri", self.destination_uri.as_deref())
            .add_optional("bank_account_uri", self.bank_account_uri.as_deref())
            .flatten_meta("meta", &self.meta);
        payload
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRefund {
    pub debit_uri: String,
    /// Partial refund amount; the full debit when absent
    pub amount: Option<i64>,
    pub description: Option<String>,
    pub meta: Meta,
}

impl NewRefund {
    pub fn to_payload(&self) -> Payload {
        let amount = self.amount.map(|a| a.to_string());
        let mut payload = Payload::new();
        payload
            .add_optional("debit_uri", Some(self.debit_uri.as_str()))
            .add_optional("amount", amount.as_deref())
            .add_optional("description", self.description.as_deref())
            .flatten_meta("meta", &self.meta);
        payload
    }
}

/// Description and metadata edit shared by debits and refunds
pub(crate) fn description_update(description: Option<&str>, meta: &Meta) -> Payload {
    let mut payload = Payload::new();
    payload
        .add_optional("description", description)
        .flatten_meta("meta", meta);
    payload
}

/// Underwriting payload for an individual
pub(crate) fn individual_payload(merchant: &Merchant) -> Payload {
    let mut payload = Payload::new();
    write_merchant(&mut payload, merchant, MerchantType::Person);
    payload
        .insert("merchant[dob]", merchant.dob.as_deref().unwrap_or_default())
        .add_optional("merchant[tax_id]", merchant.tax_id.as_deref());
    payload
}

/// Underwriting payload for a business and its principal owner
pub(crate) fn business_payload(merchant: &Merchant, person: &Person) -> Payload {
    const PERSON: &str = "merchant[person]";

    let mut payload = Payload::new();
    write_merchant(&mut payload, merchant, MerchantType::Business);
    payload
        .insert("merchant[tax_id]", merchant.tax_id.as_deref().unwrap_or_default())
        .insert(nested_key(PERSON, "name"), person.name.as_str())
        .insert(nested_key(PERSON, "dob"), person.dob.as_str())
        .insert(nested_key(PERSON, "postal_code"), person.postal_code.as_str())
        .insert(nested_key(PERSON, "street_address"), person.street_address.as_str())
        .add_optional(nested_key(PERSON, "city"), person.city.as_deref())
        .add_optional(nested_key(PERSON, "country_code"), person.country_code.as_deref())
        .add_optional(nested_key(PERSON, "tax_id"), person.tax_id.as_deref());
    payload
}

fn write_merchant(payload: &mut Payload, merchant: &Merchant, merchant_type: MerchantType) {
    payload
        .insert("merchant[type]", merchant_type.as_str())
        .insert("merchant[name]", merchant.name.as_str())
        .insert("merchant[phone_number]", merchant.phone_number.as_str())
        .insert("merchant[street_address]", merchant.street_address.as_str())
        .insert("merchant[postal_code]", merchant.postal_code.as_str())
        .add_optional("merchant[email_address]", merchant.email_address.as_deref())
        .add_optional("merchant[city]", merchant.city.as_deref())
        .add_optional("merchant[country_code]", merchant.country_code.as_deref())
        .flatten_meta("merchant[meta]", &merchant.meta);
}
