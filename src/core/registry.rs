use indexmap::IndexMap;
use serde::Serialize;

/// One discovered record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescription {
    /// Declared type name, unique within the registry.
    pub name: String,

    /// Field name to literal declared-type text, in declaration order.
    /// Decoration (array suffixes, wrappers, qualifiers) is preserved
    /// verbatim as written in source.
    pub fields: IndexMap<String, String>,

    /// Names of other registry types referenced by this type's fields.
    /// Computed by [`crate::core::resolve_containment`], never authored.
    pub contains: Vec<String>,
}

/// Name-indexed registry of type descriptions.
///
/// Invariant: every key equals its value's `name`. Created empty per run,
/// populated while visiting, mutated only by containment resolution.
pub type Registry = IndexMap<String, TypeDescription>;

/// Insert a description into the registry under its own name.
///
/// A redeclared name silently replaces the earlier entry: the registry is a
/// best-effort structural summary, so the latest definition wins rather than
/// failing the run.
pub fn merge(registry: &mut Registry, description: TypeDescription) {
    registry.insert(description.name.clone(), description);
}
