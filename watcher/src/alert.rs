use arsha::{TrackedItem, WaitlistEntry};
use std::fmt;

pub const TITLE: &str = "🔔 Black Desert Market Alert";

/// A tracked item that showed up on the waitlist at or under the price cap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub name: String,
    pub enhancement_level: u8,
    pub price: u64,
}

impl Alert {
    pub fn new(item: &TrackedItem, entry: &WaitlistEntry) -> Self {
        Self {
            name: item.name.clone(),
            enhancement_level: item.enhancement_level,
            price: entry.price,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (+{}) listed at {} Silver!",
            self.name,
            self.enhancement_level,
            group_thousands(self.price)
        )
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(50_000_000_000), "50,000,000,000");
    }

    #[test]
    fn message() {
        let item = TrackedItem::new(735001, 20, "Blackstar Shield");
        let entry = WaitlistEntry {
            item_id: 735001,
            enhancement_level: 20,
            price: 50_000_000_000,
        };
        assert_eq!(
            Alert::new(&item, &entry).to_string(),
            "Blackstar Shield (+20) listed at 50,000,000,000 Silver!"
        );
    }
}
