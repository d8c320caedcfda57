//! Utility functions for the lint rules

use oxc_ast::ast::{CallExpression, Expression, JSXElementName, JSXOpeningElement};

/// Tag name of an intrinsic (lowercase, plain identifier) element.
///
/// `<button>` yields `Some("button")`; `<Button>`, `<ui.button>` and
/// `<svg:button>` yield `None`.
pub fn intrinsic_tag_name<'a>(element: &'a JSXOpeningElement) -> Option<&'a str> {
    match &element.name {
        JSXElementName::Identifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// Property name of a member-expression callee, e.g. `apply` for
/// `foo.bar.apply(...)`, `foo["apply"](...)` and `(foo.apply)(...)`.
pub fn callee_member_name<'a>(call: &'a CallExpression) -> Option<&'a str> {
    match call.callee.without_parentheses() {
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        Expression::ComputedMemberExpression(member) => match &member.expression {
            Expression::StringLiteral(lit) => Some(lit.value.as_str()),
            Expression::TemplateLiteral(tpl) if tpl.expressions.is_empty() => {
                tpl.quasis.first().map(|q| q.value.raw.as_str())
            }
            _ => None,
        },
        _ => None,
    }
}

/// Check if an expression is a literal value written in place,
/// as opposed to a reference or a computed value
pub fn is_literal_value(expr: &Expression) -> bool {
    match expr.without_parentheses() {
        Expression::StringLiteral(_)
        | Expression::NumericLiteral(_)
        | Expression::BigIntLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::RegExpLiteral(_)
        | Expression::ObjectExpression(_)
        | Expression::ArrayExpression(_) => true,

        // Only substitution-free templates are constant
        Expression::TemplateLiteral(tpl) => tpl.expressions.is_empty(),

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::Statement;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    /// Parses `x = <source>` and hands the right-hand side to `f`, so a
    /// lone string literal is not taken for a directive
    fn with_expression<R>(source: &str, f: impl FnOnce(&Expression) -> R) -> R {
        let allocator = Allocator::default();
        let code = format!("x = {source}");
        let ret = Parser::new(&allocator, &code, SourceType::jsx()).parse();
        assert!(ret.errors.is_empty(), "parse errors in {code:?}");
        let Some(Statement::ExpressionStatement(stmt)) = ret.program.body.first() else {
            panic!("expected an expression statement in {code:?}");
        };
        let Expression::AssignmentExpression(assign) = &stmt.expression else {
            panic!("expected an assignment in {code:?}");
        };
        f(&assign.right)
    }

    #[test]
    fn test_is_literal_value() {
        // `'a'` alone would parse as a directive, not an expression
        for source in ["'a'", "\"b\"", "1", "10n", "true", "null", "/x/", "`plain`", "({})", "[1]"] {
            assert!(with_expression(source, is_literal_value), "{source} is a literal");
        }
        for source in ["ctx", "this", "getCtx()", "a.b", "`x${y}`", "() => {}"] {
            assert!(!with_expression(source, is_literal_value), "{source} is not a literal");
        }
    }

    #[test]
    fn test_callee_member_name() {
        let names: Vec<Option<String>> = ["a.apply()", "a['apply']()", "(a.b.call)()", "f()"]
            .into_iter()
            .map(|source| {
                with_expression(source, |expr| match expr {
                    Expression::CallExpression(call) => callee_member_name(call).map(String::from),
                    _ => None,
                })
            })
            .collect();
        assert_eq!(
            names,
            vec![
                Some("apply".to_string()),
                Some("apply".to_string()),
                Some("call".to_string()),
                None
            ]
        );
    }

    #[test]
    fn test_intrinsic_tag_name() {
        let cases = [
            ("<button />", Some("button")),
            ("<div><button /></div>", Some("div")),
            ("<Button />", None),
            ("<ui.button />", None),
            ("<svg:button />", None),
        ];
        for (source, intrinsic) in cases {
            with_expression(source, |expr| {
                let Expression::JSXElement(element) = expr else {
                    panic!("expected JSX element for {source}");
                };
                assert_eq!(intrinsic_tag_name(&element.opening_element), intrinsic);
            });
        }
    }
}
