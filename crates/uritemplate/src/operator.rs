/*
 * operator.rs
 * Copyright (c) 2026 the uritemplate contributors
 */

//! Operators and their formatting configurations.
//!
//! Each operator owns one statically-constructed [`FormattingConfig`]:
//! the string emitted before the first segment, the string joining
//! subsequent segments, the percent-encoding policy, and the function that
//! combines a label and an encoded value into one segment. Configs are
//! shared read-only by every expression using the operator.

use crate::encode::Encoding;
use crate::error::{TemplateError, TemplateResult};

/// The leading operator of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// No operator: comma-joined values, reserved characters escaped.
    Simple,

    /// `+`: comma-joined values, reserved characters preserved.
    Reserved,

    /// `.`: dot-prefixed, dot-joined values.
    Label,

    /// `/`: slash-prefixed, slash-joined values.
    Path,

    /// `;`: semicolon-prefixed `name=value` pairs, bare name when the
    /// value is empty.
    PathParam,

    /// `?`: query-form `name=value` pairs joined with `&`.
    Query,
}

/// Builds one output segment from the variable name, the label chosen by
/// the explode policy, and the already-encoded value. Returns `None` when
/// the combination produces nothing to emit.
pub(crate) type SegmentBuilder = fn(name: &str, label: Option<&str>, value: &str) -> Option<String>;

/// Per-operator formatting constants.
pub(crate) struct FormattingConfig {
    /// Emitted once, before the first segment of the expression.
    pub prefix: &'static str,

    /// Emitted between subsequent segments, including across varspecs.
    pub joiner: &'static str,

    /// Percent-encoding policy for values.
    pub encoding: Encoding,

    /// Segment builder for non-exploded values.
    pub build: SegmentBuilder,

    /// Segment builder for exploded values.
    pub build_exploded: SegmentBuilder,
}

static SIMPLE: FormattingConfig = FormattingConfig {
    prefix: "",
    joiner: ",",
    encoding: Encoding::Unreserved,
    build: build_bare,
    build_exploded: build_labeled,
};

static RESERVED: FormattingConfig = FormattingConfig {
    prefix: "",
    joiner: ",",
    encoding: Encoding::Reserved,
    build: build_bare,
    build_exploded: build_labeled,
};

static LABEL: FormattingConfig = FormattingConfig {
    prefix: ".",
    joiner: ".",
    encoding: Encoding::Unreserved,
    build: build_bare,
    build_exploded: build_labeled_nonempty,
};

static PATH: FormattingConfig = FormattingConfig {
    prefix: "/",
    joiner: "/",
    encoding: Encoding::Unreserved,
    build: build_bare,
    build_exploded: build_labeled_nonempty,
};

static PATH_PARAM: FormattingConfig = FormattingConfig {
    prefix: ";",
    joiner: ";",
    encoding: Encoding::Unreserved,
    build: build_named_or_bare_name,
    build_exploded: build_named_or_bare_name,
};

static QUERY: FormattingConfig = FormattingConfig {
    prefix: "?",
    joiner: "&",
    encoding: Encoding::Unreserved,
    build: build_named,
    build_exploded: build_named,
};

impl Operator {
    /// Map a matched operator symbol to an operator. `None` is the absent
    /// operator. Symbols outside the formatting table are a compile error;
    /// the expression grammar keeps reserved operators (`|`, `!`, `@`)
    /// from ever reaching this point.
    pub(crate) fn from_symbol(symbol: Option<char>) -> TemplateResult<Operator> {
        match symbol {
            None => Ok(Operator::Simple),
            Some('+') => Ok(Operator::Reserved),
            Some('.') => Ok(Operator::Label),
            Some('/') => Ok(Operator::Path),
            Some(';') => Ok(Operator::PathParam),
            Some('?') => Ok(Operator::Query),
            Some(operator) => Err(TemplateError::UnsupportedOperator { operator }),
        }
    }

    /// The shared formatting configuration for this operator.
    pub(crate) fn config(self) -> &'static FormattingConfig {
        match self {
            Operator::Simple => &SIMPLE,
            Operator::Reserved => &RESERVED,
            Operator::Label => &LABEL,
            Operator::Path => &PATH,
            Operator::PathParam => &PATH_PARAM,
            Operator::Query => &QUERY,
        }
    }
}

/// Bare value; an empty value emits nothing.
fn build_bare(_name: &str, _label: Option<&str>, value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// `label=value` when a label exists, bare value otherwise.
fn build_labeled(name: &str, label: Option<&str>, value: &str) -> Option<String> {
    match label {
        Some(label) => Some(format!("{}={}", label, value)),
        None => build_bare(name, None, value),
    }
}

/// `label=value` only when both the label and a non-empty value exist.
fn build_labeled_nonempty(name: &str, label: Option<&str>, value: &str) -> Option<String> {
    match label {
        Some(label) if !value.is_empty() => Some(format!("{}={}", label, value)),
        _ => build_bare(name, None, value),
    }
}

/// Always named; the bare label stands in for an empty value.
fn build_named_or_bare_name(name: &str, label: Option<&str>, value: &str) -> Option<String> {
    let label = label.unwrap_or(name);
    if value.is_empty() {
        Some(label.to_string())
    } else {
        Some(format!("{}={}", label, value))
    }
}

/// Always `label=value`, the variable name standing in for a missing label.
fn build_named(name: &str, label: Option<&str>, value: &str) -> Option<String> {
    Some(format!("{}={}", label.unwrap_or(name), value))
}
