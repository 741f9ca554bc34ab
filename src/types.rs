use std::fmt;

use serde::Serialize;

use crate::error::ErrorKind;

/// bcrypt version tag written at the start of a hash (`$2a$`, `$2b$`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Variant {
    #[default]
    #[serde(rename = "2a")]
    TwoA,
    #[serde(rename = "2b")]
    TwoB,
    #[serde(rename = "2x")]
    TwoX,
    #[serde(rename = "2y")]
    TwoY,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::TwoA => "2a",
            Variant::TwoB => "2b",
            Variant::TwoX => "2x",
            Variant::TwoY => "2y",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Variant> for bcrypt::Version {
    fn from(v: Variant) -> Self {
        match v {
            Variant::TwoA => bcrypt::Version::TwoA,
            Variant::TwoB => bcrypt::Version::TwoB,
            Variant::TwoX => bcrypt::Version::TwoX,
            Variant::TwoY => bcrypt::Version::TwoY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashOutcome {
    pub hash: String,
    /// Cost the hash was actually computed at, after the low-cost fallback.
    pub cost: u32,
    pub variant: Variant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyOutcome {
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostOutcome {
    pub cost: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NothingOutcome {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorOutcome {
    pub error: String,
    pub kind: ErrorKind,
}
