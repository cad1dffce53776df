use crate::schema::{BuyOrder, Currencies, Listing, ListingItem, Quality, QualitySpec};

const INTENT_BUY: i64 = 0;
const ENABLED: i64 = 1;
const SINGLE: i64 = 1;

/// Translation from a simplified order to the wire listing shape. Total:
/// missing fields are omitted or defaulted, never an error.
impl From<&BuyOrder> for Listing {
    fn from(order: &BuyOrder) -> Self {
        Self {
            intent: INTENT_BUY,
            details: order.comment.clone().unwrap_or_default(),
            buyout: ENABLED,
            offers: ENABLED,
            currencies: Currencies {
                keys: order.keys.clone(),
                metal: order.metal.clone(),
            },
            item: ListingItem {
                quality: order
                    .quality
                    .as_ref()
                    .map_or(Quality::DEFAULT_CODE, QualitySpec::code),
                quantity: SINGLE,
                defindex: order.defindex,
                attributes: order.attributes.clone(),
                // User-facing "craftable" negates to the wire flag
                flag_cannot_craft: order.craftable.map(|craftable| !craftable),
                level: order.level,
            },
        }
    }
}
