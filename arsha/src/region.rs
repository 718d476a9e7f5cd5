use strum_macros::{Display, EnumString};

/// Market regions, displayed as the path segment the API expects.
#[derive(EnumString, Display, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Region {
    Na,
    #[default]
    Eu,
    Sea,
    Mena,
    Kr,
    Ru,
    Jp,
    Th,
    Tw,
    Sa,
    ConsoleEu,
    ConsoleNa,
    ConsoleAsia,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn path_segments() {
        assert_eq!(Region::Eu.to_string(), "eu");
        assert_eq!(Region::ConsoleAsia.to_string(), "console_asia");
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Region::from_str("NA").unwrap(), Region::Na);
        assert_eq!(Region::from_str("console_eu").unwrap(), Region::ConsoleEu);
        assert!(Region::from_str("moon").is_err());
    }
}
