//! FILENAME: core/aggregation-wizard/src/identity.rs
//! Identity of editable entries.
//!
//! Identities are minted once when an entry is created and never derived
//! from its content, so editing or reordering keeps them stable. The
//! generator is passed explicitly; independent editors use independent
//! generators.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupingId(String);

impl GroupingId {
    pub fn new(id: impl Into<String>) -> Self {
        GroupingId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh identities.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> GroupingId;
}

/// Random v4 UUIDs; the default for interactive editors.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> GroupingId {
        GroupingId(Uuid::new_v4().to_string())
    }
}

/// Monotonic `<prefix>-<n>` identities, starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    seq: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIdGenerator {
            prefix: prefix.into(),
            seq: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        SequentialIdGenerator::new("grouping")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> GroupingId {
        let n = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        GroupingId(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new("g");
        assert_eq!(ids.next_id().as_str(), "g-1");
        assert_eq!(ids.next_id().as_str(), "g-2");
        assert_eq!(ids.next_id().as_str(), "g-3");
    }

    #[test]
    fn test_independent_generators_do_not_share_state() {
        let a = SequentialIdGenerator::default();
        let b = SequentialIdGenerator::default();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id().as_str(), "grouping-1");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidGenerator;
        let minted: HashSet<GroupingId> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(minted.len(), 100);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = GroupingId::new("abc");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("abc"));
    }
}
