// MMSI Library
// Re-export modules for use in main.rs

pub mod mmsi;
pub mod reference;

pub use mmsi::{
    get_country_from_mmsi, get_mid_from_mmsi, is_valid_mmsi, ClassificationResult, Mmsi,
    MmsiCategory, MmsiError, MmsiInput,
};
