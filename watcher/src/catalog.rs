use arsha::TrackedItem;

/// PEN, the highest enhancement level for weapons.
const PEN: u8 = 20;

const BLACKSTAR_WEAPONS: [(u32, &str); 22] = [
    (735001, "Blackstar Shield"),
    (735002, "Blackstar Dagger"),
    (735003, "Blackstar Talisman"),
    (735004, "Blackstar Ornamental"),
    (735005, "Blackstar Trinket"),
    (735006, "Blackstar Horn Bow"),
    (735007, "Blackstar Kunai"),
    (735008, "Blackstar Shuriken"),
    (735009, "Blackstar Vambrace"),
    (735010, "Blackstar Noble Sword"),
    (735011, "Blackstar Ra'ghon"),
    (735012, "Blackstar Vitclari"),
    (735013, "Blackstar Haladie"),
    (735014, "Blackstar Quotarum"),
    (735015, "Blackstar Mareca"),
    (735016, "Blackstar Shard"),
    (735017, "Blackstar Do Stave"),
    (735018, "Blackstar Binyeo Knife"),
    (735019, "Blackstar Gravity Cores"),
    (735020, "Blackstar Gombangdae"),
    (735021, "Blackstar Shotgun"),
    (735022, "Blackstar Gourd Bottle"),
];

pub fn default_catalog() -> Vec<TrackedItem> {
    BLACKSTAR_WEAPONS
        .iter()
        .map(|&(id, name)| TrackedItem::new(id, PEN, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_keys_are_unique() {
        let catalog = default_catalog();
        let keys: HashSet<_> = catalog.iter().map(TrackedItem::key).collect();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn everything_is_pen() {
        assert!(default_catalog().iter().all(|item| item.enhancement_level == PEN));
    }
}
