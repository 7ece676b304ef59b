/*
 * error.rs
 * Copyright (c) 2026 the uritemplate contributors
 */

//! Error types for template compilation.
//!
//! Expansion has no error path: undefined variables omit their segment
//! rather than failing, so only `Template::compile` returns these.

use thiserror::Error;

/// Errors that can occur while compiling a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable spec inside a `{...}` expression does not match the
    /// varspec grammar.
    #[error("varspec does not match the template grammar: '{token}'")]
    Grammar { token: String },

    /// An expression's leading operator is syntactically valid but has no
    /// entry in the formatting table.
    #[error("unsupported expansion operator: '{operator}'")]
    UnsupportedOperator { operator: char },
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
