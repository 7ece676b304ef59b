/*
 * parser.rs
 * Copyright (c) 2026 the uritemplate contributors
 */

//! Template compiler.
//!
//! One left-to-right grammar pass splits the input into alternating literal
//! spans and `{...}` expressions. A `{...}` block only counts as an
//! expression when it matches the expression shape: an optional operator
//! from the formatting table followed by a comma-separated variable list.
//! Blocks led by a reserved operator (`|`, `!`, `@`) or otherwise outside
//! the shape fall through as literal text. Inside a matched block, each
//! variable token must satisfy the varspec grammar or compilation fails.

use crate::ast::{Expression, ExplodeMark, Node, VarSpec};
use crate::error::{TemplateError, TemplateResult};
use crate::operator::Operator;
use once_cell::sync::Lazy;
use regex::Regex;

/// Expression shape: `{` optional operator, then a loose variable list
/// (tokens start with an identifier character and exclude delimiters).
/// Token contents are validated separately against `VARSPEC_RE`.
static EXPRESSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([+./;?])?([A-Za-z0-9_][^{},]*(?:,[^{},]+)*)\}").unwrap()
});

/// Varspec grammar: `name ( '*' | '+' | ':' digits )? ( '=' default )?`.
static VARSPEC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_.]*)(?:([*+])|:([0-9]+))?(?:=([^{},]*))?$").unwrap()
});

/// A compiled template, ready for any number of `expand` calls.
///
/// Immutable after compilation; safe to share across threads, each call
/// bringing its own context.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub(crate) nodes: Vec<Node>,
}

impl Template {
    /// Compile a template from source text.
    ///
    /// Fails with [`TemplateError::Grammar`] when a variable token inside a
    /// matched expression does not satisfy the varspec grammar. No partial
    /// template is returned on failure.
    pub fn compile(source: &str) -> TemplateResult<Template> {
        let mut nodes = Vec::new();
        let mut last = 0;

        for caps in EXPRESSION_RE.captures_iter(source) {
            let whole = caps.get(0).unwrap();
            if last < whole.start() {
                nodes.push(Node::Literal(source[last..whole.start()].to_string()));
            }
            nodes.push(Node::Expression(parse_expression(&caps)?));
            last = whole.end();
        }
        if last < source.len() {
            nodes.push(Node::Literal(source[last..].to_string()));
        }

        tracing::trace!(nodes = nodes.len(), "compiled template");
        Ok(Template { nodes })
    }

    /// The compiled nodes of this template.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

fn parse_expression(caps: &regex::Captures<'_>) -> TemplateResult<Expression> {
    let symbol = caps.get(1).and_then(|m| m.as_str().chars().next());
    let operator = Operator::from_symbol(symbol)?;

    let varlist = &caps[2];
    let mut varspecs = Vec::new();
    for token in varlist.split(',') {
        varspecs.push(parse_varspec(token)?);
    }

    Ok(Expression { operator, varspecs })
}

fn parse_varspec(token: &str) -> TemplateResult<VarSpec> {
    let grammar_error = || TemplateError::Grammar {
        token: token.to_string(),
    };
    let caps = VARSPEC_RE.captures(token).ok_or_else(grammar_error)?;

    let explode = match caps.get(2).map(|m| m.as_str()) {
        Some("*") => ExplodeMark::Star,
        Some("+") => ExplodeMark::Plus,
        _ => ExplodeMark::None,
    };
    let max_len = match caps.get(3) {
        Some(digits) => Some(digits.as_str().parse().map_err(|_| grammar_error())?),
        None => None,
    };

    Ok(VarSpec {
        name: caps[1].to_string(),
        explode,
        max_len,
        default: caps.get(4).map(|m| m.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_template() {
        let template = Template::compile("").unwrap();
        assert!(template.nodes.is_empty());
    }

    #[test]
    fn test_literal_only() {
        let template = Template::compile("http://example.com/index.html").unwrap();
        assert_eq!(
            template.nodes,
            vec![Node::Literal("http://example.com/index.html".to_string())]
        );
    }

    #[test]
    fn test_expression_with_surrounding_literals() {
        let template = Template::compile("head{x}tail").unwrap();
        assert_eq!(template.nodes.len(), 3);
        assert_eq!(template.nodes[0], Node::Literal("head".to_string()));
        match &template.nodes[1] {
            Node::Expression(expr) => {
                assert_eq!(expr.operator, Operator::Simple);
                assert_eq!(expr.varspecs, vec![VarSpec::new("x")]);
            }
            other => panic!("expected expression, got {:?}", other),
        }
        assert_eq!(template.nodes[2], Node::Literal("tail".to_string()));
    }

    #[test]
    fn test_operator_selection() {
        for (source, operator) in [
            ("{x}", Operator::Simple),
            ("{+x}", Operator::Reserved),
            ("{.x}", Operator::Label),
            ("{/x}", Operator::Path),
            ("{;x}", Operator::PathParam),
            ("{?x}", Operator::Query),
        ] {
            let template = Template::compile(source).unwrap();
            match &template.nodes[0] {
                Node::Expression(expr) => assert_eq!(expr.operator, operator, "{}", source),
                other => panic!("expected expression for {}, got {:?}", source, other),
            }
        }
    }

    #[test]
    fn test_varspec_modifiers() {
        let template = Template::compile("{x*,y+,z:4,w=fallback}").unwrap();
        match &template.nodes[0] {
            Node::Expression(expr) => {
                assert_eq!(expr.varspecs[0].explode, ExplodeMark::Star);
                assert_eq!(expr.varspecs[1].explode, ExplodeMark::Plus);
                assert_eq!(expr.varspecs[2].max_len, Some(4));
                assert_eq!(expr.varspecs[3].default, Some("fallback".to_string()));
            }
            other => panic!("expected expression, got {:?}", other),
        }
    }

    #[test]
    fn test_modifier_with_default() {
        let template = Template::compile("{x:3=abc}").unwrap();
        match &template.nodes[0] {
            Node::Expression(expr) => {
                assert_eq!(expr.varspecs[0].max_len, Some(3));
                assert_eq!(expr.varspecs[0].default, Some("abc".to_string()));
            }
            other => panic!("expected expression, got {:?}", other),
        }
    }

    #[test]
    fn test_dotted_variable_names() {
        let template = Template::compile("{user.name}").unwrap();
        match &template.nodes[0] {
            Node::Expression(expr) => assert_eq!(expr.varspecs[0].name, "user.name"),
            other => panic!("expected expression, got {:?}", other),
        }
    }

    #[test]
    fn test_reserved_operator_degrades_to_literal() {
        for source in ["{!x}", "{|x}", "{@x}"] {
            let template = Template::compile(source).unwrap();
            assert_eq!(
                template.nodes,
                vec![Node::Literal(source.to_string())],
                "{}",
                source
            );
        }
    }

    #[test]
    fn test_unmatched_braces_stay_literal() {
        let template = Template::compile("a{{x}b}c").unwrap();
        assert_eq!(template.nodes[0], Node::Literal("a{".to_string()));
        assert!(matches!(template.nodes[1], Node::Expression(_)));
        assert_eq!(template.nodes[2], Node::Literal("b}c".to_string()));
    }

    #[test]
    fn test_empty_braces_stay_literal() {
        let template = Template::compile("{}").unwrap();
        assert_eq!(template.nodes, vec![Node::Literal("{}".to_string())]);
    }

    #[test]
    fn test_bad_varspec_token_is_a_grammar_error() {
        let err = Template::compile("{x,b d}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Grammar {
                token: "b d".to_string()
            }
        );
    }

    #[test]
    fn test_double_modifier_is_a_grammar_error() {
        let err = Template::compile("{x*:3}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Grammar {
                token: "x*:3".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_prefix_is_a_grammar_error() {
        let err = Template::compile("{x:abc}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Grammar {
                token: "x:abc".to_string()
            }
        );
    }
}
