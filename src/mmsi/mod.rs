// MMSI classifier
// Reference: ITU-R M.585-9
//
// Pipeline: raw input -> normalize -> 9-digit check -> category rule
// -> MID extraction -> MID table lookup -> ClassificationResult
//
// Every operation here is total: malformed input yields false/None/valid=false.

pub mod category;
pub mod parse;

pub use category::{classify, extract_mid, CategoryRule, MmsiCategory, Pattern, CATEGORY_RULES};
pub use parse::{normalize, Mmsi, MmsiError, MmsiInput};

use serde::{Deserialize, Serialize};

use crate::reference;

/// Complete MMSI classification result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub mmsi: String,
    pub mid: Option<String>,
    pub alpha2: Option<String>,
    pub alpha3: Option<String>,
    pub country: Option<String>,
    pub valid: bool,
    #[serde(rename = "type")]
    pub category: Option<MmsiCategory>,
}

/// Check that an MMSI is 9 digits and falls in a known numbering block
pub fn is_valid_mmsi(input: impl Into<MmsiInput>) -> bool {
    Mmsi::parse(input).is_ok()
}

/// Extract the MID from an MMSI at the offset its category dictates
///
/// Returns `None` for malformed input, unknown blocks and emergency devices.
pub fn get_mid_from_mmsi(input: impl Into<MmsiInput>) -> Option<String> {
    let mmsi = Mmsi::parse(input).ok()?;
    mmsi.mid().map(str::to_string)
}

/// Classify an MMSI and resolve its MID to a country
pub fn get_country_from_mmsi(input: impl Into<MmsiInput>) -> ClassificationResult {
    let normalized = normalize(&input.into());
    let mut result = ClassificationResult {
        mmsi: normalized.clone(),
        ..Default::default()
    };

    let mmsi = match Mmsi::parse(normalized) {
        Ok(mmsi) => mmsi,
        Err(e) => {
            log::debug!("Rejected MMSI {:?}: {}", result.mmsi, e);
            return result;
        }
    };
    result.category = Some(mmsi.category());

    if mmsi.category() == MmsiCategory::EmergencyDevice {
        result.valid = true;
        return result;
    }

    if !mmsi.rule().resolves_country {
        log::trace!("MMSI {} is {}; MID not resolved", mmsi, mmsi.category());
        return result;
    }

    let Some(mid) = mmsi.mid() else {
        return result;
    };

    match reference::lookup_mid(mid) {
        Some(entry) => {
            result.mid = Some(entry.mid.to_string());
            result.alpha2 = Some(entry.alpha2.to_string());
            result.alpha3 = Some(entry.alpha3.to_string());
            result.country = Some(entry.country.to_string());
            result.valid = true;
        }
        None => {
            log::debug!("MMSI {} ({}): MID {} not allocated", mmsi, mmsi.category(), mid);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resolved(
        mmsi: &str,
        category: MmsiCategory,
        (mid, alpha2, alpha3, country): (&str, &str, &str, &str),
    ) -> ClassificationResult {
        ClassificationResult {
            mmsi: mmsi.to_string(),
            mid: Some(mid.to_string()),
            alpha2: Some(alpha2.to_string()),
            alpha3: Some(alpha3.to_string()),
            country: Some(country.to_string()),
            valid: true,
            category: Some(category),
        }
    }

    fn unresolved(mmsi: &str, valid: bool, category: Option<MmsiCategory>) -> ClassificationResult {
        ClassificationResult {
            mmsi: mmsi.to_string(),
            valid,
            category,
            ..Default::default()
        }
    }

    #[test]
    fn test_is_valid_mmsi() {
        assert!(is_valid_mmsi("366123456")); // ship
        assert!(is_valid_mmsi("000123456")); // coast station, MID unallocated
        assert!(is_valid_mmsi("111201234")); // SAR aircraft
        assert!(is_valid_mmsi("970123456")); // AIS-SART
        assert!(is_valid_mmsi(" 366123456 "));
        assert!(is_valid_mmsi(366123456i32));
    }

    #[test]
    fn test_is_valid_mmsi_rejects_malformed() {
        let malformed = [
            "", "36612345", "3661234567", "36612345X", "abcdefghi", "366-12345", "100000000",
        ];
        for input in malformed {
            assert!(!is_valid_mmsi(input), "{:?}", input);
            assert_eq!(get_mid_from_mmsi(input), None, "{:?}", input);
        }
        assert!(!is_valid_mmsi(0i32));
        assert!(!is_valid_mmsi(None::<&str>));
    }

    #[test]
    fn test_get_mid_from_mmsi() {
        assert_eq!(get_mid_from_mmsi("366123456").as_deref(), Some("366"));
        assert_eq!(get_mid_from_mmsi("002320001").as_deref(), Some("232"));
        assert_eq!(get_mid_from_mmsi("111201234").as_deref(), Some("201"));
        assert_eq!(get_mid_from_mmsi("992351234").as_deref(), Some("235"));
        assert_eq!(get_mid_from_mmsi("982191234").as_deref(), Some("219"));
        assert_eq!(get_mid_from_mmsi("823012345").as_deref(), Some("301"));
        assert_eq!(get_mid_from_mmsi("970123456"), None);
    }

    #[test]
    fn test_country_for_ship() {
        assert_eq!(
            get_country_from_mmsi("366123456"),
            resolved(
                "366123456",
                MmsiCategory::Ship,
                ("366", "US", "USA", "United States of America")
            )
        );
        assert_eq!(
            get_country_from_mmsi(636012345i32),
            resolved("636012345", MmsiCategory::Ship, ("636", "LR", "LBR", "Liberia"))
        );
    }

    #[test]
    fn test_country_for_prefixed_blocks() {
        assert_eq!(
            get_country_from_mmsi("002320001"),
            resolved(
                "002320001",
                MmsiCategory::CoastStation,
                ("232", "GB", "GBR", "United Kingdom")
            )
        );
        assert_eq!(
            get_country_from_mmsi("111201234"),
            resolved("111201234", MmsiCategory::SarAircraft, ("201", "AL", "ALB", "Albania"))
        );
        assert_eq!(
            get_country_from_mmsi("992351234"),
            resolved(
                "992351234",
                MmsiCategory::AisAidToNavigation,
                ("235", "GB", "GBR", "United Kingdom")
            )
        );
        assert_eq!(
            get_country_from_mmsi("982191234"),
            resolved(
                "982191234",
                MmsiCategory::CraftAssociatedWithParentShip,
                ("219", "DK", "DNK", "Denmark")
            )
        );
    }

    #[test]
    fn test_emergency_device_has_no_country() {
        for mmsi in ["970123456", "972123456", "974123456"] {
            assert_eq!(
                get_country_from_mmsi(mmsi),
                unresolved(mmsi, true, Some(MmsiCategory::EmergencyDevice))
            );
        }
    }

    #[test]
    fn test_unallocated_mid_is_invalid() {
        assert_eq!(
            get_country_from_mmsi("999999999"),
            unresolved("999999999", false, Some(MmsiCategory::AisAidToNavigation))
        );
        assert_eq!(
            get_country_from_mmsi("000123456"),
            unresolved("000123456", false, Some(MmsiCategory::CoastStation))
        );
        assert_eq!(
            get_country_from_mmsi("280123456"),
            unresolved("280123456", false, Some(MmsiCategory::Ship))
        );
    }

    #[test]
    fn test_handheld_is_never_resolved() {
        // Digits 2-4 happen to spell an allocated MID
        assert_eq!(
            get_country_from_mmsi("823012345"),
            unresolved("823012345", false, Some(MmsiCategory::HandheldVhf))
        );
        assert!(is_valid_mmsi("823012345"));
    }

    #[test]
    fn test_absent_and_empty_input() {
        let empty = unresolved("", false, None);
        assert_eq!(get_country_from_mmsi(""), empty);
        assert_eq!(get_country_from_mmsi("   "), empty);
        assert_eq!(get_country_from_mmsi(0i32), empty);
        assert_eq!(get_country_from_mmsi(MmsiInput::Absent), empty);
        assert_eq!(get_country_from_mmsi(None::<String>), empty);
    }

    #[test]
    fn test_malformed_input_keeps_normalized_mmsi() {
        assert_eq!(get_country_from_mmsi(" 36612 "), unresolved("36612", false, None));
        assert_eq!(get_country_from_mmsi("100000000"), unresolved("100000000", false, None));
    }

    #[test]
    fn test_idempotent() {
        for input in ["366123456", "970123456", "999999999", "bogus", ""] {
            assert_eq!(get_country_from_mmsi(input), get_country_from_mmsi(input));
            assert_eq!(get_mid_from_mmsi(input), get_mid_from_mmsi(input));
            assert_eq!(is_valid_mmsi(input), is_valid_mmsi(input));
        }
    }

    #[test]
    fn test_result_json_field_names() {
        let value = serde_json::to_value(get_country_from_mmsi("970123456")).unwrap();
        assert_eq!(
            value,
            json!({
                "mmsi": "970123456",
                "mid": null,
                "alpha2": null,
                "alpha3": null,
                "country": null,
                "valid": true,
                "type": "emergency_device",
            })
        );
    }
}
