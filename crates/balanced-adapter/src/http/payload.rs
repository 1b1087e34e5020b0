/*
[INPUT]:  Named request parameters (scalars, nested objects, metadata maps)
[OUTPUT]: Flat form-urlencoded parameter bag
[POS]:    HTTP layer - payload encoding shared by every resource operation
[UPDATE]: When changing nesting conventions or pagination parameters
*/

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::types::Meta;

/// Flat `key -> values` parameter bag sent as query string or form body.
///
/// Keys are kept sorted so the encoded form is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    params: BTreeMap<String, Vec<String>>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bag pre-populated with `limit` and `offset`
    pub fn paging(limit: u32, offset: u32) -> Self {
        let mut payload = Self::new();
        payload
            .insert("limit", limit.to_string())
            .insert("offset", offset.to_string());
        payload
    }

    /// Add a required parameter, even when empty
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Add a parameter only when a non-empty value is present.
    ///
    /// The API treats an empty string as "blank this field", which is never
    /// what an omitted optional means.
    pub fn add_optional(&mut self, key: impl Into<String>, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) if !value.is_empty() => self.insert(key, value),
            _ => self,
        }
    }

    /// Insert `prefix[key] -> value` for every metadata entry
    pub fn flatten_meta(&mut self, prefix: &str, meta: &Meta) -> &mut Self {
        for (key, value) in meta {
            self.insert(nested_key(prefix, key), value.as_str());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of key/value pairs
    pub fn len(&self) -> usize {
        self.params.values().map(Vec::len).sum()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.params.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate key/value pairs in key order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key.as_str(), value.as_str())))
    }

    /// `application/x-www-form-urlencoded` rendering
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

/// Build a bracketed parameter name, nesting inside existing brackets.
///
/// `nested_key("merchant", "name")` is `merchant[name]` and
/// `nested_key("merchant[person]", "dob")` is `merchant[person[dob]]`.
pub fn nested_key(parent: &str, child: &str) -> String {
    let open = parent.trim_end_matches(']');
    let closing = parent.len() - open.len();
    let mut key = String::with_capacity(parent.len() + child.len() + 2);
    key.push_str(open);
    key.push('[');
    key.push_str(child);
    key.push(']');
    key.extend(std::iter::repeat_n(']', closing));
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("meta", "order", "meta[order]")]
    #[case("bank_account", "type", "bank_account[type]")]
    #[case("bank_account[meta]", "ref", "bank_account[meta[ref]]")]
    #[case("merchant[person]", "name", "merchant[person[name]]")]
    #[case("merchant[person[address]]", "city", "merchant[person[address[city]]]")]
    fn test_nested_key(#[case] parent: &str, #[case] child: &str, #[case] expected: &str) {
        assert_eq!(nested_key(parent, child), expected);
    }

    #[rstest]
    #[case(None, 0)]
    #[case(Some(""), 0)]
    #[case(Some("Shirt"), 1)]
    fn test_add_optional(#[case] value: Option<&str>, #[case] expected: usize) {
        let mut payload = Payload::new();
        payload.add_optional("description", value);
        assert_eq!(payload.len(), expected);
        assert_eq!(payload.contains_key("description"), expected == 1);
    }

    #[test]
    fn test_insert_keeps_empty_required_value() {
        let mut payload = Payload::new();
        payload.insert("name", "");
        assert_eq!(payload.get("name"), Some(&[String::new()][..]));
    }

    #[test]
    fn test_flatten_meta_one_param_per_entry() {
        let meta: Meta = [("order", "1001"), ("channel", "web"), ("note", "")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let mut payload = Payload::new();
        payload.flatten_meta("meta", &meta);

        assert_eq!(payload.len(), meta.len());
        for (key, value) in &meta {
            assert_eq!(
                payload.get(&format!("meta[{key}]")),
                Some(&[value.clone()][..])
            );
        }
    }

    #[test]
    fn test_flatten_meta_nested_prefix() {
        let meta: Meta = [("ref".to_string(), "abc".to_string())].into_iter().collect();
        let mut payload = Payload::new();
        payload.flatten_meta("bank_account[meta]", &meta);
        assert!(payload.contains_key("bank_account[meta[ref]]"));
    }

    #[test]
    fn test_flatten_empty_meta_adds_nothing() {
        let mut payload = Payload::new();
        payload.flatten_meta("meta", &Meta::new());
        assert!(payload.is_empty());
    }

    #[test]
    fn test_paging_encodes_decimal() {
        let payload = Payload::paging(10, 0);
        assert_eq!(payload.encode(), "limit=10&offset=0");

        let large = Payload::paging(u32::MAX, 250);
        assert_eq!(large.get("limit"), Some(&[u32::MAX.to_string()][..]));
    }

    #[test]
    fn test_encode_escapes_brackets_and_spaces() {
        let mut payload = Payload::new();
        payload
            .insert("bank_account[name]", "Johann Bernoulli")
            .insert("amount", "500");
        assert_eq!(
            payload.encode(),
            "amount=500&bank_account%5Bname%5D=Johann+Bernoulli"
        );
    }

    #[test]
    fn test_repeated_key_keeps_all_values() {
        let mut payload = Payload::new();
        payload.insert("roles", "buyer").insert("roles", "merchant");
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.encode(), "roles=buyer&roles=merchant");
    }
}
