use crate::schema::BuyOrder;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "buy_orders.json";
pub const TOKEN_PLACEHOLDER: &str = "YOUR_ACCESS_TOKEN_HERE";

/// The `buy_orders.json` document: an access token plus the orders to submit.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub access_token: String,
    pub buy_orders: Vec<BuyOrder>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    /// True unless the token is empty or still the seeded placeholder.
    pub fn has_usable_token(&self) -> bool {
        !self.access_token.is_empty() && self.access_token != TOKEN_PLACEHOLDER
    }

    /// Seeds `path` with [`Config::example_document`], 2-space indented.
    pub fn write_example(path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(&Self::example_document())?)?;
        Ok(())
    }

    /// Sample document written when no config file exists: one metal-only
    /// order, one keys+metal order with a named quality, and one
    /// attribute-bearing killstreak kit order.
    pub fn example_document() -> Value {
        json!({
            "access_token": TOKEN_PLACEHOLDER,
            "buy_orders": [
                {
                    "comment": "Buying Tour of Duty Ticket",
                    "metal": 1.33,
                    "defindex": 725,
                    "quality": "unique"
                },
                {
                    "comment": "Buying Strange Scattergun",
                    "keys": 2,
                    "metal": 5.33,
                    "defindex": 13,
                    "quality": "strange"
                },
                {
                    "comment": "Buying Pro KS Shotgun Kit - Hot Rod + Cerebral Discharge",
                    "keys": 3,
                    "defindex": 6527,
                    "quality": "unique",
                    "attributes": [
                        {"defindex": 2025, "float_value": 3},
                        {"defindex": 2013, "float_value": 2003},
                        {"defindex": 2014, "float_value": 7},
                        {"defindex": 2012, "float_value": 9}
                    ]
                }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::QualitySpec;

    #[test]
    fn example_document_round_trips_through_config() {
        let text = serde_json::to_string_pretty(&Config::example_document()).unwrap();
        let config: Config = serde_json::from_str(&text).unwrap();

        assert_eq!(config.access_token, TOKEN_PLACEHOLDER);
        assert_eq!(config.buy_orders.len(), 3);

        let ticket = &config.buy_orders[0];
        assert_eq!(ticket.comment.as_deref(), Some("Buying Tour of Duty Ticket"));
        assert_eq!(ticket.defindex, Some(725));
        assert!(ticket.keys.is_none());
        assert_eq!(ticket.metal.as_ref().unwrap().as_f64(), Some(1.33));

        let scattergun = &config.buy_orders[1];
        assert_eq!(scattergun.keys.as_ref().unwrap().as_i64(), Some(2));
        assert_eq!(
            scattergun.quality,
            Some(QualitySpec::Name("strange".to_string()))
        );

        let kit = &config.buy_orders[2];
        assert_eq!(kit.attributes.as_ref().unwrap().len(), 4);
        assert_eq!(kit.attributes.as_ref().unwrap()[0].defindex, 2025);
    }

    #[test]
    fn example_document_is_two_space_indented() {
        let text = serde_json::to_string_pretty(&Config::example_document()).unwrap();
        assert!(text.contains("\n  \"access_token\""));
    }

    #[test]
    fn placeholder_or_empty_token_is_unusable() {
        let mut config: Config =
            serde_json::from_value(Config::example_document()).unwrap();
        assert!(!config.has_usable_token());

        config.access_token = String::new();
        assert!(!config.has_usable_token());

        config.access_token = "abc123".to_string();
        assert!(config.has_usable_token());
    }

    #[test]
    fn written_example_loads_back() {
        let path = std::env::temp_dir().join("bptf_buy_orders_test.json");
        Config::write_example(&path).unwrap();
        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.buy_orders.len(), 3);
    }
}
