use serde::{Deserialize, Serialize};

/// Country preselected on the shipping form
pub const DEFAULT_COUNTRY: &str = "Nigeria";

/// Shipping address collected by the checkout form
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    /// Apartment, suite, etc.
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
}

impl Default for ShippingDetails {
    fn default() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            apartment: None,
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            phone: String::new(),
        }
    }
}

impl ShippingDetails {
    /// Names of required fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("email", &self.email),
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
            ("country", &self.country),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_incomplete() {
        let details = ShippingDetails::default();
        let missing = details.missing_fields();

        assert_eq!(details.country, DEFAULT_COUNTRY);
        assert!(!missing.contains(&"country"));
        assert!(missing.contains(&"email"));
        assert_eq!(missing.len(), 8);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let details = ShippingDetails {
            email: "a@b.c".into(),
            first_name: "Ada".into(),
            last_name: "Obi".into(),
            address: "12 Marina".into(),
            apartment: None,
            city: "Lagos".into(),
            state: "Lagos".into(),
            zip_code: "   ".into(),
            country: DEFAULT_COUNTRY.into(),
            phone: "0800".into(),
        };

        assert_eq!(details.missing_fields(), vec!["zipCode"]);
    }
}
