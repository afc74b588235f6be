use serde::{Deserialize, Serialize};

use viewstate_core::ValueObject;

/// A client identified only by its field values.
///
/// No invariant is enforced: any name (including empty) and any postal code
/// (including negative) is accepted and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    name: String,
    postal_code: i32,
}

impl Client {
    pub fn new(name: impl Into<String>, postal_code: i32) -> Self {
        Self {
            name: name.into(),
            postal_code,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn postal_code(&self) -> i32 {
        self.postal_code
    }
}

impl ValueObject for Client {}

/// Renders `Client(name=<name>, postalCode:<postalCode>)`.
impl core::fmt::Display for Client {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Client(name={}, postalCode:{})",
            self.name, self.postal_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_and_postal_code() {
        let client = Client::new("Ryeojin", 1234);
        assert_eq!(client.to_string(), "Client(name=Ryeojin, postalCode:1234)");
    }

    #[test]
    fn renders_empty_name_and_zero() {
        let client = Client::new("", 0);
        assert_eq!(client.to_string(), "Client(name=, postalCode:0)");
    }

    #[test]
    fn renders_spaces_and_negative_postal_code() {
        let client = Client::new("A B", -5);
        assert_eq!(client.to_string(), "Client(name=A B, postalCode:-5)");
    }

    #[test]
    fn renders_integer_extremes() {
        assert_eq!(
            Client::new("x", i32::MIN).to_string(),
            "Client(name=x, postalCode:-2147483648)"
        );
        assert_eq!(
            Client::new("x", i32::MAX).to_string(),
            "Client(name=x, postalCode:2147483647)"
        );
    }

    #[test]
    fn accessors_return_constructor_arguments() {
        let client = Client::new(String::from("Ryeojin"), 1234);
        assert_eq!(client.name(), "Ryeojin");
        assert_eq!(client.postal_code(), 1234);
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Client::new("Ryeojin", 1234), Client::new("Ryeojin", 1234));
        assert_ne!(Client::new("Ryeojin", 1234), Client::new("Ryeojin", 4321));
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(Client::new("Ryeojin", 1234)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Ryeojin", "postal_code": 1234 })
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the rendering is the fixed template filled verbatim.
            #[test]
            fn display_matches_template(name in ".*", postal_code in any::<i32>()) {
                let client = Client::new(name.clone(), postal_code);
                let expected = format!("Client(name={name}, postalCode:{postal_code})");
                prop_assert_eq!(client.to_string(), expected);
            }

            /// Property: rendering the same instance twice yields the same string.
            #[test]
            fn display_is_idempotent(name in ".*", postal_code in any::<i32>()) {
                let client = Client::new(name, postal_code);
                let first = client.to_string();
                let second = client.to_string();
                prop_assert_eq!(first, second);
            }
        }
    }
}
