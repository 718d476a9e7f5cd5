use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};

/// An item the watcher cares about, identified on the market by its id and
/// enhancement level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedItem {
    pub id: u32,
    pub enhancement_level: u8,
    pub name: String,
}

impl TrackedItem {
    pub fn new(id: u32, enhancement_level: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            enhancement_level,
            name: name.into(),
        }
    }

    pub fn key(&self) -> (u32, u8) {
        (self.id, self.enhancement_level)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MarketOrder {
    #[serde(rename = "buyers", default)]
    pub buyer_count: u32,
    #[serde(rename = "sellers", default)]
    pub seller_count: u32,
    pub price: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketListing {
    pub item_id: u32,
    pub enhancement_level: u8,
    pub name: String,
    pub orders: Vec<MarketOrder>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WaitlistEntry {
    #[serde(rename = "id")]
    pub item_id: u32,
    #[serde(rename = "sid", default)]
    pub enhancement_level: u8,
    #[serde(default, deserialize_with = "silver")]
    pub price: u64,
}

impl WaitlistEntry {
    pub fn key(&self) -> (u32, u8) {
        (self.item_id, self.enhancement_level)
    }
}

/// Whole silver. Float prices are truncated.
fn silver<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Silver {
        Whole(u64),
        Fractional(f64),
    }

    match Silver::deserialize(deserializer)? {
        Silver::Whole(price) => Ok(price),
        Silver::Fractional(price) if price.is_finite() && price >= 0.0 => Ok(price as u64),
        Silver::Fractional(price) => Err(de::Error::custom(format!("invalid price {price}"))),
    }
}

/// Bidding info as it arrives; the display name comes from the request side.
#[derive(Debug, Deserialize)]
pub(crate) struct RawListing {
    pub id: u32,
    #[serde(default)]
    pub sid: u8,
    #[serde(default)]
    pub orders: Vec<MarketOrder>,
}

impl MarketListing {
    pub(crate) fn from_raw(raw: RawListing, name: &str) -> Self {
        Self {
            item_id: raw.id,
            enhancement_level: raw.sid,
            name: name.to_string(),
            orders: raw.orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_counts_default_to_zero() {
        let order: MarketOrder = serde_json::from_value(json!({"price": 125000})).unwrap();
        assert_eq!(order.buyer_count, 0);
        assert_eq!(order.seller_count, 0);
        assert_eq!(order.price, Decimal::from(125_000));
    }

    #[test]
    fn order_without_price_is_rejected() {
        let result = serde_json::from_value::<MarketOrder>(json!({"buyers": 1, "sellers": 2}));
        assert!(result.is_err());
    }

    #[test]
    fn large_prices_stay_exact() {
        let order: MarketOrder =
            serde_json::from_value(json!({"price": 79999999999u64, "sellers": 1})).unwrap();
        assert_eq!(order.price.to_string(), "79999999999");
    }

    #[test]
    fn waitlist_entry_defaults() {
        let entry: WaitlistEntry = serde_json::from_value(json!({"id": 735001})).unwrap();
        assert_eq!(entry.key(), (735001, 0));
        assert_eq!(entry.price, 0);
    }

    #[test]
    fn waitlist_price_accepts_floats() {
        let entry: WaitlistEntry =
            serde_json::from_value(json!({"id": 735001, "sid": 20, "price": 50000000000.0})).unwrap();
        assert_eq!(entry.price, 50_000_000_000);

        let entry: WaitlistEntry =
            serde_json::from_value(json!({"id": 735001, "price": 1500.7})).unwrap();
        assert_eq!(entry.price, 1500);
    }

    #[test]
    fn waitlist_price_rejects_negatives() {
        let result = serde_json::from_value::<WaitlistEntry>(json!({"id": 735001, "price": -5}));
        assert!(result.is_err());
    }
}
