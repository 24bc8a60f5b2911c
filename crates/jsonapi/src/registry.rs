//! Included Resource Registry - document-scoped dedup of side-loaded resources

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::resource::ResourceIdentifier;

/// One slot in the registry.
///
/// A slot transitions `Placeholder` -> `Promoted` at most once and is never
/// demoted. The placeholder is inserted before recursing into the resource's
/// own serialization, so a cycle re-entering the same identifier observes it
/// as already present and short-circuits.
#[derive(Debug, Clone, PartialEq)]
pub enum IncludedEntry {
    /// Reserved slot; the resource is registered or currently being serialized
    Placeholder,
    /// Full serialized resource content
    Promoted(Value),
}

/// Insertion-ordered, deduplicated set of side-loaded resources, keyed by
/// (type, id).
///
/// Scoped to exactly one document assembly: created fresh per top-level
/// serialize call and discarded with it. Concurrent documents use
/// independent registries, so no locking is involved.
#[derive(Debug, Default)]
pub struct IncludedRegistry {
    entries: IndexMap<ResourceIdentifier, IncludedEntry>,
}

impl IncludedRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Check whether an identifier already has a slot, placeholder or promoted
    pub fn contains(&self, identifier: &ResourceIdentifier) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Reserve a slot for an identifier.
    ///
    /// Returns `false` without touching the registry when the identifier is
    /// already present; this is the cycle guard.
    pub fn insert_placeholder(&mut self, identifier: ResourceIdentifier) -> bool {
        if self.entries.contains_key(&identifier) {
            return false;
        }
        trace!(identifier = %identifier, "registering included resource placeholder");
        self.entries.insert(identifier, IncludedEntry::Placeholder);
        true
    }

    /// Replace a placeholder with its full serialized content.
    ///
    /// Returns `false` when the slot is missing or already promoted; promoted
    /// content is never overwritten.
    pub fn promote(&mut self, identifier: &ResourceIdentifier, content: Value) -> bool {
        match self.entries.get_mut(identifier) {
            Some(slot) if *slot == IncludedEntry::Placeholder => {
                trace!(identifier = %identifier, "promoting included resource");
                *slot = IncludedEntry::Promoted(content);
                true
            }
            _ => false,
        }
    }

    /// Number of registered slots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether any resource has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the registry into the `included` array values, in insertion
    /// order. A slot that was never promoted renders as its bare identifier.
    pub fn into_entries(self) -> Vec<Value> {
        self.entries
            .into_iter()
            .map(|(identifier, entry)| match entry {
                IncludedEntry::Promoted(content) => content,
                IncludedEntry::Placeholder => identifier.to_value(),
            })
            .collect()
    }
}
