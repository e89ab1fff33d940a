//! Type extraction - the AST pass that recognizes record-type declarations.
//!
//! A declaration is interesting iff it names a record shape: an `interface`
//! (its body is a field list) or a `type` alias whose right-hand side is an
//! object type literal, possibly intersected with named base types. Every
//! other declaration kind (functions, classes, enums, aliases to unions or
//! primitives) is skipped without recording.
//!
//! The collector only produces descriptions; merging them into the registry
//! is the caller's responsibility.

use indexmap::IndexMap;
use swc_common::{SourceMap, SourceMapper, Span, Spanned};
use swc_ecma_ast::{
    Expr, Lit, MemberProp, Module, TsEntityName, TsExprWithTypeArgs, TsInterfaceDecl,
    TsIntersectionType, TsType, TsTypeAliasDecl, TsTypeElement, TsUnionOrIntersectionType,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::registry::TypeDescription;

/// Collects record-type descriptions from one parsed module.
///
/// # Usage
///
/// ```ignore
/// let collector = TypeCollector::new(&parsed.source_map, true);
/// for description in collector.collect(&parsed.module) {
///     merge(&mut registry, description);
/// }
/// ```
pub struct TypeCollector<'a> {
    /// Source map of the file being visited, for reading declared-type text
    /// back out of spans.
    source_map: &'a SourceMap,

    /// Record heritage clauses and intersection bases as fields keyed by the
    /// base type's own name.
    embedded_fields: bool,

    /// Collected descriptions, in declaration order.
    types: Vec<TypeDescription>,
}

impl<'a> TypeCollector<'a> {
    pub fn new(source_map: &'a SourceMap, embedded_fields: bool) -> Self {
        Self {
            source_map,
            embedded_fields,
            types: Vec::new(),
        }
    }

    /// Main entry point: visit a module and return the extracted descriptions.
    pub fn collect(mut self, module: &Module) -> Vec<TypeDescription> {
        self.visit_module(module);
        self.types
    }

    /// Literal source text of a span. A span that cannot be read back (an
    /// unexpected shape) yields no field rather than an error.
    fn snippet(&self, span: Span) -> Option<String> {
        self.source_map
            .span_to_snippet(span)
            .ok()
            .map(|text| text.trim().to_string())
    }

    /// Record named members of a field list. Anything that is not a plain
    /// property signature with a name and a type annotation is skipped.
    fn record_members(&self, members: &[TsTypeElement], fields: &mut IndexMap<String, String>) {
        for member in members {
            let TsTypeElement::TsPropertySignature(prop) = member else {
                continue;
            };
            if prop.computed {
                continue;
            }
            let Some(name) = property_name(&prop.key) else {
                continue;
            };
            let Some(type_ann) = &prop.type_ann else {
                continue;
            };
            let Some(descriptor) = self.snippet(type_ann.type_ann.span()) else {
                continue;
            };
            fields.insert(name, descriptor);
        }
    }

    /// Record an `extends` clause as an embedded field keyed by the base
    /// type's own name, with the heritage text as descriptor.
    fn record_heritage(&self, heritage: &TsExprWithTypeArgs, fields: &mut IndexMap<String, String>) {
        let Some(name) = heritage_base_name(&heritage.expr) else {
            return;
        };
        let Some(descriptor) = self.snippet(heritage.span()) else {
            return;
        };
        fields.insert(name, descriptor);
    }

    /// Fields of an intersection alias: literal parts contribute named
    /// members, type references contribute embedded entries. Returns `None`
    /// when no literal part exists (the alias is not a record).
    fn intersection_fields(&self, inter: &TsIntersectionType) -> Option<IndexMap<String, String>> {
        let mut fields = IndexMap::new();
        let mut has_literal = false;

        for part in &inter.types {
            match &**part {
                TsType::TsTypeLit(lit) => {
                    has_literal = true;
                    self.record_members(&lit.members, &mut fields);
                }
                TsType::TsTypeRef(type_ref) if self.embedded_fields => {
                    if let Some(descriptor) = self.snippet(part.span()) {
                        fields.insert(entity_base_name(&type_ref.type_name), descriptor);
                    }
                }
                _ => {}
            }
        }

        has_literal.then_some(fields)
    }

    fn push_type(&mut self, name: String, fields: IndexMap<String, String>) {
        self.types.push(TypeDescription {
            name,
            fields,
            contains: Vec::new(),
        });
    }
}

impl Visit for TypeCollector<'_> {
    fn visit_ts_interface_decl(&mut self, node: &TsInterfaceDecl) {
        let mut fields = IndexMap::new();

        // Heritage clauses come before the body in source order.
        if self.embedded_fields {
            for heritage in &node.extends {
                self.record_heritage(heritage, &mut fields);
            }
        }
        self.record_members(&node.body.body, &mut fields);

        self.push_type(node.id.sym.to_string(), fields);

        node.visit_children_with(self);
    }

    fn visit_ts_type_alias_decl(&mut self, node: &TsTypeAliasDecl) {
        match &*node.type_ann {
            TsType::TsTypeLit(lit) => {
                let mut fields = IndexMap::new();
                self.record_members(&lit.members, &mut fields);
                self.push_type(node.id.sym.to_string(), fields);
            }
            TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsIntersectionType(
                inter,
            )) => {
                if let Some(fields) = self.intersection_fields(inter) {
                    self.push_type(node.id.sym.to_string(), fields);
                }
            }
            // Alias to a non-record shape
            _ => {}
        }

        node.visit_children_with(self);
    }
}

/// Extract the property name from a signature key (identifier or string
/// literal). Other key shapes have no recordable name.
fn property_name(key: &Expr) -> Option<String> {
    match key {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

/// Bare name of a heritage expression: `Base` or the rightmost segment of
/// `ns.Base`.
fn heritage_base_name(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(ident) => Some(ident.sym.to_string()),
            _ => None,
        },
        _ => None,
    }
}

/// Bare name of a type reference: `Base` or the rightmost segment of
/// `ns.Base`.
fn entity_base_name(entity: &TsEntityName) -> String {
    match entity {
        TsEntityName::Ident(ident) => ident.sym.to_string(),
        TsEntityName::TsQualifiedName(qualified) => qualified.right.sym.to_string(),
    }
}
