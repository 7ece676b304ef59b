/*
 * ast.rs
 * Copyright (c) 2026 the uritemplate contributors
 */

//! Compiled template node types.

use crate::operator::Operator;

/// A node in a compiled template.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text, emitted unchanged.
    Literal(String),

    /// One `{...}` expression.
    Expression(Expression),
}

/// A compiled `{operator, varspec-list}` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Operator selecting the formatting configuration.
    pub operator: Operator,

    /// Variable specs in declaration order. Order is significant: it is
    /// the output order.
    pub varspecs: Vec<VarSpec>,
}

/// The explode modifier of a varspec.
///
/// Beyond turning explode on, the mark selects how exploded segments are
/// labeled: `*` labels assoc entries with their own key and leaves list
/// elements unlabeled; `+` labels assoc entries `name.key` and list
/// elements with the variable name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExplodeMark {
    /// No explode modifier.
    #[default]
    None,

    /// `*`: key-only labels.
    Star,

    /// `+`: full `name.key` labels.
    Plus,
}

impl ExplodeMark {
    /// Whether this mark turns explode on.
    pub fn explodes(self) -> bool {
        !matches!(self, ExplodeMark::None)
    }

    /// Label for one exploded list element or exploded scalar.
    pub(crate) fn item_label(self, name: &str) -> Option<&str> {
        match self {
            ExplodeMark::Plus => Some(name),
            _ => None,
        }
    }

    /// Label for one exploded assoc entry. Only the exploding marks carry
    /// a label policy; non-exploded assoc values are joined, not labeled.
    pub(crate) fn entry_label(self, name: &str, key: &str) -> Option<String> {
        match self {
            ExplodeMark::None => None,
            ExplodeMark::Star => Some(key.to_string()),
            ExplodeMark::Plus => Some(format!("{}.{}", name, key)),
        }
    }
}

/// One compiled `name[modifier][=default]` token.
#[derive(Debug, Clone, PartialEq)]
pub struct VarSpec {
    /// Variable name (ASCII identifier characters, dots allowed).
    pub name: String,

    /// Explode modifier, mutually exclusive with `max_len` in the grammar.
    pub explode: ExplodeMark,

    /// `:N` prefix-length limit, in decoded characters.
    pub max_len: Option<usize>,

    /// `=default` fallback, used when the variable resolves to nothing.
    pub default: Option<String>,
}

impl VarSpec {
    /// A plain varspec with no modifier and no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explode: ExplodeMark::None,
            max_len: None,
            default: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explode_mark_predicates() {
        assert!(!ExplodeMark::None.explodes());
        assert!(ExplodeMark::Star.explodes());
        assert!(ExplodeMark::Plus.explodes());
    }

    #[test]
    fn test_item_labels() {
        assert_eq!(ExplodeMark::Star.item_label("x"), None);
        assert_eq!(ExplodeMark::Plus.item_label("x"), Some("x"));
    }

    #[test]
    fn test_entry_labels() {
        assert_eq!(ExplodeMark::None.entry_label("x", "k"), None);
        assert_eq!(ExplodeMark::Star.entry_label("x", "k"), Some("k".to_string()));
        assert_eq!(
            ExplodeMark::Plus.entry_label("x", "k"),
            Some("x.k".to_string())
        );
    }

    #[test]
    fn test_varspec_new() {
        let spec = VarSpec::new("query");
        assert_eq!(spec.name, "query");
        assert_eq!(spec.explode, ExplodeMark::None);
        assert!(spec.max_len.is_none());
        assert!(spec.default.is_none());
    }
}
