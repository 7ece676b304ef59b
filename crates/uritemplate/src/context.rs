/*
 * context.rs
 * Copyright (c) 2026 the uritemplate contributors
 */

//! Runtime values and the expansion context.
//!
//! This module defines the closed value model used during expansion
//! ([`Value`]), the caller-supplied variable bindings ([`Context`]), and the
//! per-call resolution scope that memoizes lazy values ([`Scope`]).

use std::collections::HashMap;
use std::fmt;

/// A runtime value bound to a template variable.
///
/// Values are a closed tagged variant: shape classification during
/// expansion matches on this enum rather than inspecting arbitrary types.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value. Variables resolving to `Null` emit no segment.
    Null,

    /// A single string-coercible value.
    Scalar(String),

    /// An ordered list of scalars. `Null` elements are skip markers and
    /// produce no output.
    List(Vec<Value>),

    /// String-keyed entries, iterated in insertion order.
    Assoc(Vec<(String, Value)>),
}

impl Value {
    /// Whether this value contributes output at all.
    ///
    /// `Null` is undefined, and so are empty lists and empty assoc values.
    pub fn is_defined(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Scalar(_) => true,
            Value::List(items) => !items.is_empty(),
            Value::Assoc(entries) => !entries.is_empty(),
        }
    }

    /// The scalar text of this value, if it is a scalar.
    ///
    /// List elements and assoc entry values that are not scalars are
    /// skipped during expansion, exactly like `Null` elements.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(n.to_string())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Scalar(n.to_string())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(n.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(b.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Scalar(b.to_string()),
            serde_json::Value::Number(n) => Value::Scalar(n.to_string()),
            serde_json::Value::String(s) => Value::Scalar(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Assoc(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// A lazily-resolved value: invoked with the whole context, at most once
/// per `expand` call.
pub type Resolver = Box<dyn Fn(&Context) -> Value + Send + Sync>;

/// One context binding: either an eager value or a lazy resolver.
pub enum Entry {
    Value(Value),
    Resolver(Resolver),
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Entry::Resolver(_) => f.debug_tuple("Resolver").finish(),
        }
    }
}

/// Variable bindings for one or more expansion calls.
///
/// A `Context` itself is never mutated by `expand`; per-call state (the
/// resolver memo) lives in a [`Scope`] created fresh for each call.
#[derive(Debug, Default)]
pub struct Context {
    entries: HashMap<String, Entry>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable to an eager value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), Entry::Value(value.into()));
    }

    /// Bind a variable to a resolver, invoked at most once per `expand`
    /// call; its result (including `Null`) is reused for every later
    /// reference to the same name within that call.
    pub fn insert_resolver(
        &mut self,
        key: impl Into<String>,
        resolver: impl Fn(&Context) -> Value + Send + Sync + 'static,
    ) {
        self.entries
            .insert(key.into(), Entry::Resolver(Box::new(resolver)));
    }

    /// Build a context from a JSON object, one binding per top-level key.
    ///
    /// Non-object JSON values yield an empty context.
    pub fn from_json(json: serde_json::Value) -> Self {
        let mut context = Context::new();
        if let serde_json::Value::Object(entries) = json {
            for (key, value) in entries {
                context.insert(key, Value::from(value));
            }
        }
        context
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }
}

/// Per-`expand`-call resolution scope.
///
/// Owns the memo for resolver results; discarded when `expand` returns, so
/// nothing leaks across calls or threads.
pub(crate) struct Scope<'a> {
    context: &'a Context,
    resolved: HashMap<String, Value>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(context: &'a Context) -> Self {
        Self {
            context,
            resolved: HashMap::new(),
        }
    }

    /// Resolve a variable name to a value.
    ///
    /// Every name is resolved at most once per scope: resolver bindings
    /// run once and eager bindings are copied into the memo once, so
    /// repeated references borrow the same value instead of cloning it.
    pub(crate) fn resolve(&mut self, name: &str) -> &Value {
        if !self.resolved.contains_key(name) {
            let value = match self.context.entry(name) {
                Some(Entry::Value(value)) => value.clone(),
                Some(Entry::Resolver(resolver)) => resolver(self.context),
                None => Value::Null,
            };
            self.resolved.insert(name.to_string(), value);
        }
        &self.resolved[name]
    }
}
