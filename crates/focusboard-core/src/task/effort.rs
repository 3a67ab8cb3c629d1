//! T-shirt effort sizes and their minute equivalents.
//!
//! The mapping is four buckets, not an inverse: any duration falls into a
//! bucket, but only 15/30/60/120 come back out unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Effort bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Effort {
    XS,
    S,
    M,
    L,
}

impl Effort {
    pub const ALL: [Effort; 4] = [Effort::XS, Effort::S, Effort::M, Effort::L];

    pub fn as_str(&self) -> &'static str {
        match self {
            Effort::XS => "XS",
            Effort::S => "S",
            Effort::M => "M",
            Effort::L => "L",
        }
    }

    /// Canonical duration of the bucket in minutes.
    pub fn minutes(&self) -> u32 {
        effort_to_duration(*self)
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effort {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Effort::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "effort",
                value: s.to_string(),
            })
    }
}

/// Bucket a duration: `<=15` XS, `<=30` S, `<=60` M, anything longer L.
///
/// Zero and negative durations land in XS.
pub fn duration_to_effort(minutes: i64) -> Effort {
    if minutes <= 15 {
        Effort::XS
    } else if minutes <= 30 {
        Effort::S
    } else if minutes <= 60 {
        Effort::M
    } else {
        Effort::L
    }
}

/// Canonical minutes for a bucket.
pub fn effort_to_duration(effort: Effort) -> u32 {
    match effort {
        Effort::XS => 15,
        Effort::S => 30,
        Effort::M => 60,
        Effort::L => 120,
    }
}
