//! Decoration stripping: field-type descriptor text to a bare candidate name.
//!
//! Descriptors are recorded verbatim (`Address[]`, `Map<string, Address>`,
//! `Address | null`), but containment lookup needs the bare type name. The
//! stripper peels one layer of decoration at a time until the text stops
//! changing, then accepts the result only if it is a single identifier.

/// Wrappers whose sole type argument is the interesting element type.
const ELEMENT_WRAPPERS: &[&str] = &[
    "Array",
    "ReadonlyArray",
    "Set",
    "ReadonlySet",
    "Promise",
    "Partial",
    "Required",
    "Readonly",
    "NonNullable",
];

/// Wrappers keyed by a first type argument; the value argument is the
/// interesting one.
const KEYED_WRAPPERS: &[&str] = &["Map", "ReadonlyMap", "Record"];

/// Union members that express nullability rather than an alternative type.
const NULLABLE_MEMBERS: &[&str] = &["null", "undefined"];

/// Strip decoration from a field-type descriptor to obtain a bare candidate
/// name for registry lookup.
///
/// Returns `None` when no single bare name remains: multi-member unions,
/// function types, inline object literals, literal types, and the like are
/// not containment candidates.
pub fn strip_decoration(descriptor: &str) -> Option<String> {
    let mut current = descriptor.trim().to_string();

    loop {
        let stripped = strip_once(&current)?;
        if stripped == current {
            break;
        }
        current = stripped;
    }

    if is_identifier(&current) {
        Some(current)
    } else {
        None
    }
}

/// Peel at most one layer of decoration. Returns the input unchanged when
/// nothing strippable remains, `None` when the descriptor cannot reduce to a
/// single name.
fn strip_once(descriptor: &str) -> Option<String> {
    let current = descriptor.trim();

    // ( X ) -> X
    if let Some(inner) = unwrap_parens(current) {
        return Some(inner.to_string());
    }

    // X[] -> X
    if let Some(inner) = current.strip_suffix("[]") {
        let inner = inner.trim_end();
        if !inner.is_empty() {
            return Some(inner.to_string());
        }
    }

    // X | null -> X; A | B has no single candidate
    let union_parts = split_top_level(current, &['|', '&']);
    if union_parts.len() > 1 {
        let remaining: Vec<&str> = union_parts
            .iter()
            .map(|part| part.trim())
            .filter(|part| !NULLABLE_MEMBERS.contains(part))
            .collect();
        return match remaining.as_slice() {
            [single] => Some(single.to_string()),
            _ => None,
        };
    }

    // Array<X> -> X, Map<K, V> -> V, Other<T> -> Other
    if let Some((head, args)) = split_generic(current) {
        let base = head.rsplit('.').next().unwrap_or(head).trim();
        if ELEMENT_WRAPPERS.contains(&base) && args.len() == 1 {
            return Some(args[0].trim().to_string());
        }
        if KEYED_WRAPPERS.contains(&base) && args.len() == 2 {
            return Some(args[1].trim().to_string());
        }
        return Some(head.trim().to_string());
    }

    // ns.X -> X
    if split_top_level(current, &['.']).len() > 1 {
        if let Some(last) = current.rsplit('.').next() {
            return Some(last.trim().to_string());
        }
    }

    Some(current.to_string())
}

/// Unwrap `( X )` when the opening paren closes at the very end.
fn unwrap_parens(text: &str) -> Option<&str> {
    if !text.starts_with('(') || !text.ends_with(')') {
        return None;
    }
    let mut depth = 0i32;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return (idx == text.len() - 1).then(|| &text[1..idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on separators occurring outside any bracket pair.
fn split_top_level<'a>(text: &'a str, separators: &[char]) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (idx, c) in text.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth -= 1,
            _ if depth == 0 && separators.contains(&c) => {
                parts.push(&text[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Split `Head<A, B>` into the head text and top-level type arguments.
fn split_generic(text: &str) -> Option<(&str, Vec<&str>)> {
    if !text.ends_with('>') {
        return None;
    }
    let lt = text.find('<')?;
    if lt == 0 {
        return None;
    }
    let inner = &text[lt + 1..text.len() - 1];
    Some((&text[..lt], split_top_level(inner, &[','])))
}

/// Check if text is a single bare identifier.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
