//! PatientId - sequential patient identifier
//!
//! Issued by the dispatch core, starting at 1 and shared by both channels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient identifier.
///
/// Ids are plain sequence numbers. Uniqueness holds only while no
/// registration has been undone, because undo rewinds the issuing counter.
///
/// # Examples
/// ```
/// use contracts::PatientId;
///
/// let id = PatientId::FIRST;
/// assert_eq!(id.get(), 1);
/// assert_eq!(id.next(), PatientId::new(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(u64);

impl PatientId {
    /// First id handed out by a fresh dispatch core.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw id.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id issued after this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The id issued before this one, saturating at `FIRST`.
    #[inline]
    pub const fn prev(self) -> Self {
        if self.0 > Self::FIRST.0 {
            Self(self.0 - 1)
        } else {
            Self::FIRST
        }
    }
}

impl Default for PatientId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u64> for PatientId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<PatientId> for u64 {
    #[inline]
    fn from(id: PatientId) -> Self {
        id.0
    }
}

impl PartialEq<u64> for PatientId {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatientId({})", self.0)
    }
}
