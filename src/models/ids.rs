//! Entity identifiers
//!
//! Ids are integers derived from the creation time in milliseconds, the way
//! existing RentLog files already store them. `IdGenerator` keeps them
//! strictly increasing so two entities created in the same millisecond never
//! share an id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::Utc;

/// Identifier shared by properties, tenants, bills and payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Hands out time-based ids that never repeat
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Create a generator whose ids are all greater than `floor`
    ///
    /// Seed with the largest id already present in a document.
    pub fn starting_after(floor: EntityId) -> Self {
        Self { last: floor.raw() }
    }

    /// Next id based on the current wall clock
    pub fn next_id(&mut self) -> EntityId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id for the given clock reading in milliseconds
    pub fn next_at(&mut self, now_millis: i64) -> EntityId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        EntityId(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_after(EntityId(0))
    }
}
