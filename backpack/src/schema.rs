use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::str::FromStr;
use strum_macros::EnumString;

/// Item qualities recognized by the translator, with their backpack.tf
/// integer codes.
#[derive(EnumString, Copy, Clone, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Quality {
    Normal = 0,
    Genuine = 1,
    Vintage = 3,
    Unusual = 5,
    Unique = 6,
    Community = 7,
    #[strum(serialize = "self-made")]
    SelfMade = 9,
    Strange = 11,
}

impl Quality {
    pub const DEFAULT_CODE: i64 = Quality::Unique as i64;

    /// Resolves a quality name to its code. Unknown names fall back to unique.
    pub fn code_for(name: &str) -> i64 {
        Quality::from_str(name).map_or(Self::DEFAULT_CODE, |quality| quality as i64)
    }
}

/// Quality as it appears in the config file: either a raw integer code,
/// copied verbatim, or a name looked up in the quality table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum QualitySpec {
    Code(i64),
    Name(String),
}

impl QualitySpec {
    pub fn code(&self) -> i64 {
        match self {
            QualitySpec::Code(code) => *code,
            QualitySpec::Name(name) => Quality::code_for(name),
        }
    }
}

/// Item attribute, e.g. a killstreak tier or sheen on a kit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Attribute {
    pub defindex: i64,
    pub float_value: Number,
}

/// One buy order as the user writes it in `buy_orders.json`. Every field is
/// optional; translation tolerates whatever is missing.
///
/// Prices are kept as [`Number`] so that `"keys": 2` stays the integer 2 all
/// the way to the wire instead of becoming 2.0.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BuyOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metal: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defindex: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualitySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub craftable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl BuyOrder {
    /// Price string for the run summary, e.g. "2 keys 5.33 metal".
    pub fn price_summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(keys) = &self.keys {
            parts.push(format!("{keys} keys"));
        }
        if let Some(metal) = &self.metal {
            parts.push(format!("{metal} metal"));
        }
        parts.join(" ")
    }
}

/// One listing in the shape the batch endpoint expects.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Listing {
    pub intent: i64,
    pub details: String,
    pub buyout: i64,
    pub offers: i64,
    pub currencies: Currencies,
    pub item: ListingItem,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Currencies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metal: Option<Number>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ListingItem {
    pub quality: i64,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defindex: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_cannot_craft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_table_maps_all_names() {
        let table = [
            ("normal", 0),
            ("genuine", 1),
            ("vintage", 3),
            ("unusual", 5),
            ("unique", 6),
            ("community", 7),
            ("self-made", 9),
            ("strange", 11),
        ];
        for (name, code) in table {
            assert_eq!(Quality::code_for(name), code, "{name}");
        }
    }

    #[test]
    fn quality_lookup_is_case_insensitive() {
        assert_eq!(Quality::code_for("Strange"), 11);
        assert_eq!(Quality::code_for("SELF-MADE"), 9);
        assert_eq!(Quality::code_for("uNiQuE"), 6);
    }

    #[test]
    fn unknown_quality_names_fall_back_to_unique() {
        assert_eq!(Quality::code_for("haunted"), 6);
        assert_eq!(Quality::code_for(""), 6);
    }

    #[test]
    fn numeric_quality_is_copied_verbatim() {
        let spec: QualitySpec = serde_json::from_str("13").unwrap();
        assert_eq!(spec, QualitySpec::Code(13));
        assert_eq!(spec.code(), 13);
    }

    #[test]
    fn named_quality_deserializes_as_name() {
        let spec: QualitySpec = serde_json::from_str("\"strange\"").unwrap();
        assert_eq!(spec, QualitySpec::Name("strange".to_string()));
        assert_eq!(spec.code(), 11);
    }

    #[test]
    fn price_summary_joins_present_currencies() {
        let order: BuyOrder =
            serde_json::from_str(r#"{"keys": 2, "metal": 5.33}"#).unwrap();
        assert_eq!(order.price_summary(), "2 keys 5.33 metal");

        let metal_only: BuyOrder = serde_json::from_str(r#"{"metal": 1.33}"#).unwrap();
        assert_eq!(metal_only.price_summary(), "1.33 metal");

        assert_eq!(BuyOrder::default().price_summary(), "");
    }
}
