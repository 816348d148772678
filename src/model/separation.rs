//! Tagged shortest-path distance.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minimum edge-count distance to a target, or unreachable.
///
/// Keeping reachability as its own variant (instead of a `-1` sentinel
/// inside the numbers) means max/min folds over distance matrices cannot
/// be polluted by unreachable pairs. The `-1` encoding only exists at the
/// serialization boundary, where the display layer expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Separation {
    Hops(u32),
    #[default]
    Unreachable,
}

impl Separation {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Separation::Hops(_))
    }

    /// The hop count, if reachable.
    pub fn hops(&self) -> Option<u32> {
        match self {
            Separation::Hops(h) => Some(*h),
            Separation::Unreachable => None,
        }
    }

    /// The wire encoding: hop count, or `-1` when unreachable.
    pub fn as_i64(&self) -> i64 {
        match self {
            Separation::Hops(h) => *h as i64,
            Separation::Unreachable => -1,
        }
    }
}

impl From<u32> for Separation {
    fn from(hops: u32) -> Self {
        Separation::Hops(hops)
    }
}

impl fmt::Display for Separation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl Serialize for Separation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

/// Accepts a non-negative integer, `-1`, or `null` (documents saved before
/// labeling carry `null`).
impl<'de> Deserialize<'de> for Separation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<i64>::deserialize(deserializer)? {
            None => Ok(Separation::Unreachable),
            Some(n) if n < 0 => Ok(Separation::Unreachable),
            Some(n) => u32::try_from(n)
                .map(Separation::Hops)
                .map_err(|_| D::Error::custom(format!("distance {n} out of range"))),
        }
    }
}
