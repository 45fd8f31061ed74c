// MMSI input normalization and parsing
//
// An MMSI is a fixed-width digit string, never a number: the leading digits
// select the category and may be zeros (coast stations start with "00").

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::category::{self, CategoryRule, MmsiCategory};

/// Raw input accepted at the API boundary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MmsiInput {
    Text(String),
    Number(i64),
    #[default]
    Absent,
}

impl From<&str> for MmsiInput {
    fn from(value: &str) -> Self {
        MmsiInput::Text(value.to_string())
    }
}

impl From<String> for MmsiInput {
    fn from(value: String) -> Self {
        MmsiInput::Text(value)
    }
}

impl From<&String> for MmsiInput {
    fn from(value: &String) -> Self {
        MmsiInput::Text(value.clone())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for MmsiInput {
            fn from(value: $t) -> Self {
                MmsiInput::Number(i64::from(value))
            }
        })*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32, i64);

// Values outside i64 have far more than 9 digits; keep them as text
macro_rules! impl_try_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for MmsiInput {
            fn from(value: $t) -> Self {
                i64::try_from(value)
                    .map_or_else(|_| MmsiInput::Text(value.to_string()), MmsiInput::Number)
            }
        })*
    };
}

impl_try_from_int!(u64, usize, isize);

impl<T: Into<MmsiInput>> From<Option<T>> for MmsiInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(MmsiInput::Absent, Into::into)
    }
}

/// Normalize raw input to a trimmed string
///
/// Absent input, empty text and the number zero all normalize to `""`.
pub fn normalize(input: &MmsiInput) -> String {
    match input {
        MmsiInput::Text(text) => text.trim().to_string(),
        MmsiInput::Number(0) | MmsiInput::Absent => String::new(),
        MmsiInput::Number(n) => n.to_string(),
    }
}

/// Why an input is not a well-formed MMSI
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MmsiError {
    #[error("MMSI is empty")]
    Empty,

    #[error("MMSI must be 9 digits, got {0} characters")]
    WrongLength(usize),

    #[error("MMSI contains non-digit {found:?} at position {index}")]
    NonDigit { index: usize, found: char },

    #[error("MMSI {0} is not in any ITU-R M.585 numbering block")]
    UnknownCategory(String),
}

/// A well-formed 9-digit MMSI with its matched category rule
#[derive(Debug, Clone)]
pub struct Mmsi {
    digits: String,
    rule: &'static CategoryRule,
}

impl Mmsi {
    /// Normalize, check the 9-digit format and classify
    pub fn parse(input: impl Into<MmsiInput>) -> Result<Self, MmsiError> {
        let digits = normalize(&input.into());
        check_format(&digits)?;

        match category::classify(&digits) {
            Some(rule) => Ok(Mmsi { digits, rule }),
            None => Err(MmsiError::UnknownCategory(digits)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn category(&self) -> MmsiCategory {
        self.rule.category
    }

    pub fn rule(&self) -> &'static CategoryRule {
        self.rule
    }

    /// The MID embedded at the category's offset, if the category carries one
    pub fn mid(&self) -> Option<&str> {
        category::extract_mid(&self.digits, self.rule)
    }
}

impl PartialEq for Mmsi {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for Mmsi {}

impl FromStr for Mmsi {
    type Err = MmsiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mmsi::parse(s)
    }
}

impl fmt::Display for Mmsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

fn check_format(digits: &str) -> Result<(), MmsiError> {
    if digits.is_empty() {
        return Err(MmsiError::Empty);
    }
    if let Some((index, found)) = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(MmsiError::NonDigit { index, found });
    }
    if digits.len() != 9 {
        return Err(MmsiError::WrongLength(digits.len()));
    }
    Ok(())
}
