//! Per-section record of declared structure types.

use std::collections::HashSet;

/// Tracks which structure type names a section has already declared.
///
/// Create one per section and drop it with the section's output. Two sections
/// may reuse a display name for different shapes, so sharing a registry
/// between them would silently drop declarations.
#[derive(Debug, Default)]
pub struct StructureRegistry {
    declared: HashSet<String>,
    order: Vec<String>,
}

impl StructureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name`. Returns `true` the first time a name is seen.
    pub fn register(&mut self, name: &str) -> bool {
        if self.declared.contains(name) {
            return false;
        }
        self.declared.insert(name.to_string());
        self.order.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Registered names in first-encounter order.
    pub fn names(&self) -> &[String] {
        &self.order
    }
}
