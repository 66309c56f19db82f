//! Per-key records holding the independently cached slots.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::entry::CacheEntry;

/// Identifies which slot of a key record a fetch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `models[child_key]`.
    Model,
    /// Partition list excluding sub-partitions.
    Partitions,
    /// Partition list including sub-partitions.
    PartitionsWithSubpartitions,
}

impl Slot {
    /// Pick the partition slot for the sub-partition flag.
    pub fn for_partitions(include_subpartitions: bool) -> Self {
        if include_subpartitions {
            Slot::PartitionsWithSubpartitions
        } else {
            Slot::Partitions
        }
    }

    /// Short name used in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Model => "model",
            Slot::Partitions => "partitions",
            Slot::PartitionsWithSubpartitions => "partitions_with_subpartitions",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything cached under one top-level key.
///
/// The three slots are independent: refreshing one never touches the
/// others.
#[derive(Debug)]
pub(crate) struct KeyRecord<C, M, P> {
    pub(crate) models: HashMap<C, CacheEntry<M>>,
    pub(crate) partitions: Option<CacheEntry<P>>,
    pub(crate) partitions_with_subpartitions: Option<CacheEntry<P>>,
}

impl<C: Hash + Eq, M, P> KeyRecord<C, M, P> {
    pub(crate) fn new() -> Self {
        Self {
            models: HashMap::new(),
            partitions: None,
            partitions_with_subpartitions: None,
        }
    }

    /// Get the partition slot selected by the sub-partition flag.
    pub(crate) fn partitions_mut(
        &mut self,
        include_subpartitions: bool,
    ) -> &mut Option<CacheEntry<P>> {
        if include_subpartitions {
            &mut self.partitions_with_subpartitions
        } else {
            &mut self.partitions
        }
    }
}
