/*
 * lib.rs
 * Copyright (c) 2026 the uritemplate contributors
 */

//! URI Template compiler and expansion engine.
//!
//! This crate compiles URI Template strings in the
//! draft-gregorio-uritemplate-04 syntax into reusable [`Template`] values
//! and expands them against a runtime [`Context`]. Supported syntax:
//!
//! - Simple expansion: `{var}`, `{x,y}`
//! - Reserved expansion: `{+path}` (URI-reserved characters pass through)
//! - Label, path, path-parameter, and query operators:
//!   `{.ext}`, `{/path}`, `{;params}`, `{?query}`
//! - Explode modifiers: `{var*}` (key labels) and `{var+}` (`name.key`
//!   labels)
//! - Prefix length: `{var:3}`
//! - Defaults: `{var=fallback}`
//!
//! Blocks led by a reserved-but-unassigned operator (`|`, `!`, `@`) are
//! emitted as literal text rather than rejected.
//!
//! # Architecture
//!
//! [`Template::compile`] runs one grammar pass over the input and builds an
//! immutable node tree; all grammar errors surface there. [`Template::expand`]
//! is total: undefined variables simply omit their segments. Context values
//! may be lazy ([`Context::insert_resolver`]); each resolver runs at most
//! once per `expand` call.
//!
//! # Example
//!
//! ```
//! use uritemplate::{Context, Template};
//!
//! let template = Template::compile("http://example.com/{path}{?q}").unwrap();
//!
//! let mut ctx = Context::new();
//! ctx.insert("path", "search");
//! ctx.insert("q", "rust lang");
//!
//! assert_eq!(
//!     template.expand(&ctx),
//!     "http://example.com/search?q=rust%20lang"
//! );
//! ```

pub mod ast;
pub mod context;
pub mod encode;
pub mod error;
pub mod expand;
pub mod operator;
pub mod parser;

// Re-export main types at crate root
pub use ast::{ExplodeMark, Expression, Node, VarSpec};
pub use context::{Context, Entry, Resolver, Value};
pub use encode::Encoding;
pub use error::{TemplateError, TemplateResult};
pub use operator::Operator;
pub use parser::Template;
