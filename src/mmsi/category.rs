// MMSI category rules
// Source: ITU-R M.585-9, Annex 1 (assignment of MMSI blocks)
//
// The leading digits of an MMSI select a numbering block. The block decides
// where the 3-digit MID sits inside the identifier:
//   MIDXXXXXX  ship station
//   00MIDXXXX  coast station
//   111MIDXXX  SAR aircraft
//   99MIDXXXX  AIS aid to navigation
//   98MIDXXXX  craft associated with a parent ship
//   8..        handheld VHF transceiver
//   970/972/974XXXXXX  AIS-SART, MOB, EPIRB-AIS (no MID)

use serde::{Deserialize, Serialize};

/// The numbering block an MMSI belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MmsiCategory {
    Ship,
    CoastStation,
    SarAircraft,
    AisAidToNavigation,
    CraftAssociatedWithParentShip,
    HandheldVhf,
    EmergencyDevice,
}

impl MmsiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MmsiCategory::Ship => "ship",
            MmsiCategory::CoastStation => "coast_station",
            MmsiCategory::SarAircraft => "sar_aircraft",
            MmsiCategory::AisAidToNavigation => "ais_aid_to_navigation",
            MmsiCategory::CraftAssociatedWithParentShip => "craft_associated_with_parent_ship",
            MmsiCategory::HandheldVhf => "handheld_vhf",
            MmsiCategory::EmergencyDevice => "emergency_device",
        }
    }
}

impl std::fmt::Display for MmsiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rule matches the leading digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// First digit within an inclusive range
    FirstDigit(u8, u8),
    /// Literal prefix
    Prefix(&'static str),
    /// Any one of several literal prefixes
    AnyPrefix(&'static [&'static str]),
}

impl Pattern {
    pub fn matches(&self, digits: &str) -> bool {
        match *self {
            Pattern::FirstDigit(lo, hi) => digits
                .as_bytes()
                .first()
                .is_some_and(|b| (lo..=hi).contains(b)),
            Pattern::Prefix(prefix) => digits.starts_with(prefix),
            Pattern::AnyPrefix(prefixes) => prefixes.iter().any(|p| digits.starts_with(p)),
        }
    }
}

/// A category rule for classifying a 9-digit MMSI
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub pattern: Pattern,
    pub category: MmsiCategory,
    /// Offset of the embedded MID, if the block carries one
    pub mid_offset: Option<usize>,
    /// Whether the MID is resolved against the MID table
    pub resolves_country: bool,
}

/// Category rules, evaluated top to bottom; first match wins
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        pattern: Pattern::FirstDigit(b'2', b'7'),
        category: MmsiCategory::Ship,
        mid_offset: Some(0),
        resolves_country: true,
    },
    CategoryRule {
        pattern: Pattern::Prefix("00"),
        category: MmsiCategory::CoastStation,
        mid_offset: Some(2),
        resolves_country: true,
    },
    CategoryRule {
        pattern: Pattern::Prefix("111"),
        category: MmsiCategory::SarAircraft,
        mid_offset: Some(3),
        resolves_country: true,
    },
    CategoryRule {
        pattern: Pattern::Prefix("99"),
        category: MmsiCategory::AisAidToNavigation,
        mid_offset: Some(2),
        resolves_country: true,
    },
    CategoryRule {
        pattern: Pattern::Prefix("98"),
        category: MmsiCategory::CraftAssociatedWithParentShip,
        mid_offset: Some(2),
        resolves_country: true,
    },
    // Handheld MIDs are not resolved to a country
    CategoryRule {
        pattern: Pattern::Prefix("8"),
        category: MmsiCategory::HandheldVhf,
        mid_offset: Some(2),
        resolves_country: false,
    },
    CategoryRule {
        pattern: Pattern::AnyPrefix(&["970", "972", "974"]),
        category: MmsiCategory::EmergencyDevice,
        mid_offset: None,
        resolves_country: false,
    },
];

/// Find the first rule matching a well-formed 9-digit MMSI
pub fn classify(digits: &str) -> Option<&'static CategoryRule> {
    CATEGORY_RULES.iter().find(|rule| rule.pattern.matches(digits))
}

/// Extract the 3-character MID a rule places inside `raw`
///
/// Alphanumerics are accepted so partially masked identifiers
/// (e.g. `"36612XXXX"`) still yield their MID.
pub fn extract_mid<'a>(raw: &'a str, rule: &CategoryRule) -> Option<&'a str> {
    let offset = rule.mid_offset?;
    let mid = raw.get(offset..offset + 3)?;
    mid.bytes().all(|b| b.is_ascii_alphanumeric()).then_some(mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(digits: &str) -> Option<MmsiCategory> {
        classify(digits).map(|rule| rule.category)
    }

    #[test]
    fn test_ship_block() {
        for digits in ["201000000", "366123456", "538001234", "775999999"] {
            assert_eq!(category_of(digits), Some(MmsiCategory::Ship), "{}", digits);
        }
    }

    #[test]
    fn test_prefixed_blocks() {
        assert_eq!(category_of("003669999"), Some(MmsiCategory::CoastStation));
        assert_eq!(category_of("111232001"), Some(MmsiCategory::SarAircraft));
        assert_eq!(category_of("992351234"), Some(MmsiCategory::AisAidToNavigation));
        assert_eq!(category_of("982191234"), Some(MmsiCategory::CraftAssociatedWithParentShip));
        assert_eq!(category_of("823012345"), Some(MmsiCategory::HandheldVhf));
    }

    #[test]
    fn test_emergency_devices() {
        assert_eq!(category_of("970123456"), Some(MmsiCategory::EmergencyDevice)); // AIS-SART
        assert_eq!(category_of("972123456"), Some(MmsiCategory::EmergencyDevice)); // MOB
        assert_eq!(category_of("974123456"), Some(MmsiCategory::EmergencyDevice)); // EPIRB-AIS
        assert_eq!(category_of("971123456"), None);
        assert_eq!(category_of("979123456"), None);
    }

    #[test]
    fn test_unassigned_blocks() {
        assert_eq!(category_of("012345678"), None); // group ship calls not classified
        assert_eq!(category_of("100000000"), None);
        assert_eq!(category_of("110123456"), None);
        assert_eq!(category_of("900000000"), None);
    }

    #[test]
    fn test_extract_mid_offsets() {
        let mid = |digits: &'static str| classify(digits).and_then(|r| extract_mid(digits, r));
        assert_eq!(mid("366123456"), Some("366"));
        assert_eq!(mid("002320001"), Some("232"));
        assert_eq!(mid("111201234"), Some("201"));
        assert_eq!(mid("992351234"), Some("235"));
        assert_eq!(mid("982191234"), Some("219"));
        assert_eq!(mid("970123456"), None);
    }

    #[test]
    fn test_extract_mid_tolerates_masking() {
        let ship = &CATEGORY_RULES[0];
        assert_eq!(extract_mid("36612XXXX", ship), Some("366"));
        assert_eq!(extract_mid("3-6123456", ship), None);
        assert_eq!(extract_mid("36", ship), None);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(
            MmsiCategory::CraftAssociatedWithParentShip.to_string(),
            "craft_associated_with_parent_ship"
        );
        assert_eq!(
            serde_json::to_string(&MmsiCategory::AisAidToNavigation).ok().as_deref(),
            Some("\"ais_aid_to_navigation\"")
        );
    }
}
