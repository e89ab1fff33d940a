//! Containment resolution - the whole-registry second pass.
//!
//! Runs strictly after every file has been visited and merged: a type may
//! reference another type declared later in traversal order, so containment
//! can only be computed against the complete key set. Resolution is a pure
//! scan with no failure path; a candidate name that refers to a type outside
//! the analyzed tree is simply left unlinked.

use std::collections::HashSet;

use crate::core::decoration::strip_decoration;
use crate::core::registry::Registry;

/// Compute the `contains` list of every registry entry.
///
/// For each field descriptor, decoration stripping yields at most one bare
/// candidate name; candidates that are registry keys are appended in field
/// order, skipping self-references and duplicates.
pub fn resolve_containment(registry: &mut Registry) {
    let known: HashSet<String> = registry.keys().cloned().collect();

    for description in registry.values_mut() {
        let mut contains: Vec<String> = Vec::new();

        for descriptor in description.fields.values() {
            let Some(candidate) = strip_decoration(descriptor) else {
                continue;
            };
            if candidate == description.name {
                continue;
            }
            if !known.contains(&candidate) {
                continue;
            }
            if contains.contains(&candidate) {
                continue;
            }
            contains.push(candidate);
        }

        description.contains = contains;
    }
}
