//! Reservation state: which wish has been claimed, and by whom.

use std::collections::BTreeMap;

/// Wish id -> name of the person who reserved it.
///
/// Only the string-owner form is supported. Payloads that use boolean flags as values
/// fail to decode and are rejected by the HTTP layer.
pub type Reservations = BTreeMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_owner_mapping() {
        let r: Reservations = serde_json::from_str(r#"{"w2":"bob","w1":"ann"}"#).unwrap();
        assert_eq!(r.get("w1").map(String::as_str), Some("ann"));
        assert_eq!(r.keys().collect::<Vec<_>>(), ["w1", "w2"]);
    }

    #[test]
    fn rejects_boolean_flags() {
        assert!(serde_json::from_str::<Reservations>(r#"{"w1":true}"#).is_err());
    }
}
