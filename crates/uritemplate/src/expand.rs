/*
 * expand.rs
 * Copyright (c) 2026 the uritemplate contributors
 */

//! Template expansion engine.
//!
//! Expansion is total: undefined or empty variables omit their segments,
//! they never fail. Each `expand` call builds a fresh resolution scope, so
//! a compiled template can serve concurrent calls from independent threads.

use crate::ast::{Expression, Node, VarSpec};
use crate::context::{Context, Scope, Value};
use crate::operator::FormattingConfig;
use crate::parser::Template;
use std::borrow::Cow;

impl Template {
    /// Expand this template against a context, producing the final URI
    /// string.
    pub fn expand(&self, context: &Context) -> String {
        let mut scope = Scope::new(context);
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Literal(text) => out.push_str(text),
                Node::Expression(expr) => expand_expression(expr, &mut scope, &mut out),
            }
        }
        tracing::trace!(len = out.len(), "expanded template");
        out
    }
}

/// Expand one expression, appending to `out`.
///
/// The operator prefix is emitted before the first segment only; the
/// joiner separates every further segment, including segments contributed
/// by different varspecs. An expression with no segments emits nothing.
fn expand_expression(expr: &Expression, scope: &mut Scope<'_>, out: &mut String) {
    let config = expr.operator.config();
    let mut joiner = config.prefix;
    for spec in &expr.varspecs {
        for segment in varspec_segments(spec, config, scope) {
            out.push_str(joiner);
            out.push_str(&segment);
            joiner = config.joiner;
        }
    }
}

/// Produce the output segments for one varspec.
fn varspec_segments(
    spec: &VarSpec,
    config: &FormattingConfig,
    scope: &mut Scope<'_>,
) -> Vec<String> {
    let value = match scope.resolve(&spec.name) {
        value if value.is_defined() => Cow::Borrowed(value),
        _ => match &spec.default {
            Some(default) => Cow::Owned(Value::Scalar(default.clone())),
            None => return Vec::new(),
        },
    };

    if spec.explode.explodes() {
        exploded_segments(spec, config, &value)
    } else {
        joined_segment(spec, config, &value).into_iter().collect()
    }
}

/// Non-exploded expansion: the whole value collapses into one segment.
///
/// The `:N` prefix length truncates before the segment builder runs. For
/// scalars it counts decoded characters and encodes afterward; for
/// composite values it applies to the joined string, where already-encoded
/// element text counts escape by escape. Prefix lengths are only exact for
/// scalar values.
fn joined_segment(
    spec: &VarSpec,
    config: &FormattingConfig,
    value: &Value,
) -> Option<String> {
    let joined = match value {
        Value::Scalar(s) => config.encoding.encode(truncate(s, spec.max_len)),
        Value::List(items) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .map(|s| config.encoding.encode(s))
                .collect::<Vec<_>>()
                .join(",");
            truncate(&joined, spec.max_len).to_string()
        }
        Value::Assoc(entries) => {
            let joined = entries
                .iter()
                .filter_map(|(key, v)| {
                    v.as_str()
                        .map(|s| format!("{},{}", key, config.encoding.encode(s)))
                })
                .collect::<Vec<_>>()
                .join(",");
            truncate(&joined, spec.max_len).to_string()
        }
        Value::Null => return None,
    };
    (config.build)(&spec.name, Some(&spec.name), &joined)
}

/// Exploded expansion: one segment per element or entry, labeled by the
/// explode mark's policy.
fn exploded_segments(spec: &VarSpec, config: &FormattingConfig, value: &Value) -> Vec<String> {
    match value {
        Value::Scalar(s) => {
            let label = spec.explode.item_label(&spec.name);
            (config.build_exploded)(&spec.name, label, &config.encoding.encode(s))
                .into_iter()
                .collect()
        }
        Value::List(items) => {
            let label = spec.explode.item_label(&spec.name);
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|s| {
                    (config.build_exploded)(&spec.name, label, &config.encoding.encode(s))
                })
                .collect()
        }
        Value::Assoc(entries) => entries
            .iter()
            .filter_map(|(key, v)| {
                let label = spec.explode.entry_label(&spec.name, key);
                v.as_str().and_then(|s| {
                    (config.build_exploded)(
                        &spec.name,
                        label.as_deref(),
                        &config.encoding.encode(s),
                    )
                })
            })
            .collect(),
        Value::Null => Vec::new(),
    }
}

/// Truncate to at most `limit` characters, when a limit is set.
fn truncate(s: &str, limit: Option<usize>) -> &str {
    match limit {
        Some(limit) => match s.char_indices().nth(limit) {
            Some((idx, _)) => &s[..idx],
            None => s,
        },
        None => s,
    }
}
