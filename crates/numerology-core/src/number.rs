use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CANONICAL_NUMBERS;
use crate::reduce::is_master;

/// A reduction result restricted to {1..9, 11, 22, 33}.
///
/// Serializes as the bare integer so JSON consumers see `33`, not `{"0":33}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CanonicalNumber(u32);

impl CanonicalNumber {
    pub fn new(n: u32) -> Option<Self> {
        CANONICAL_NUMBERS.contains(&n).then_some(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_master(self) -> bool {
        is_master(self.0)
    }

    /// All twelve canonical numbers in ascending order.
    pub fn all() -> impl Iterator<Item = CanonicalNumber> {
        CANONICAL_NUMBERS.iter().map(|&n| Self(n))
    }
}

impl TryFrom<u32> for CanonicalNumber {
    type Error = String;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n).ok_or_else(|| format!("{n} is not a canonical number"))
    }
}

impl From<CanonicalNumber> for u32 {
    fn from(n: CanonicalNumber) -> u32 {
        n.0
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
