//! custom/no-literal
//!
//! Disallow passing a literal as the explicit `this` context of `apply`.
//!
//! `fn.apply({}, args)` and `fn.apply(null, args)` are reported; a context
//! passed by reference (`fn.apply(ctx, args)`) is a dynamic value and is left
//! alone.

use oxc_ast::ast::CallExpression;
use oxc_span::{GetSpan, Span};

use crate::diagnostic::Diagnostic;
use crate::registry::{RuleDescriptor, Visitor};
use crate::utils::{callee_member_name, is_literal_value};
use crate::{RuleCategory, RuleMeta};

/// Method whose arguments are inspected
const TARGET_METHOD: &str = "apply";

/// Argument position that must not hold a literal
const TARGET_ARGUMENT: usize = 0;

/// no-literal rule
#[derive(Debug, Clone, Default)]
pub struct NoLiteral;

impl RuleMeta for NoLiteral {
    const NAME: &'static str = "no-literal";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const MESSAGE: &'static str = "Don't pass a literal as the context of 'apply'";
}

impl NoLiteral {
    pub const DESCRIPTOR: RuleDescriptor = RuleDescriptor {
        name: Self::NAME,
        category: Self::CATEGORY,
        message: Self::MESSAGE,
        docs: "Disallow literal values as the context argument of `apply`.",
        visitors: &[Visitor::CallExpression(Self::find)],
    };

    pub fn new() -> Self {
        Self
    }

    /// Span of the literal argument, if `call` passes one in the target position
    pub fn find(call: &CallExpression<'_>) -> Option<Span> {
        if callee_member_name(call) != Some(TARGET_METHOD) {
            return None;
        }

        // Spread arguments are not expressions and never count as literals
        let arg = call.arguments.get(TARGET_ARGUMENT)?;
        let expr = arg.as_expression()?;

        is_literal_value(expr).then(|| arg.span())
    }

    /// Check a call expression for a literal `apply` context
    pub fn check<'a>(&self, call: &CallExpression<'a>) -> Option<Diagnostic> {
        Self::find(call).map(|span| Diagnostic::warning(Self::NAME, span, Self::MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tester::RuleTester;

    const MESSAGE: &str = "Don't pass a literal as the context of 'apply'";

    #[test]
    fn test_rule_name() {
        assert_eq!(NoLiteral::NAME, "no-literal");
    }

    #[test]
    fn test_rule() {
        RuleTester::new(NoLiteral::NAME)
            .valid("fn.apply(ctx, args)")
            .valid("fn.apply(this, ['hoge'])")
            .valid("fn.apply(getCtx(), args)")
            .valid("fn.apply(obj.ctx, args)")
            .valid("fn.apply(...rest)")
            .valid("fn.apply()")
            .valid("fn.call({}, 1)")
            .valid("fn.bind(null)")
            .valid("fn.apply(`${name}`, args)")
            .invalid("fn.apply({}, args)", &[MESSAGE])
            .invalid("fn.apply(null, args)", &[MESSAGE])
            .invalid("fn.apply('ctx')", &[MESSAGE])
            .invalid("fn.apply([1, 2], args)", &[MESSAGE])
            .invalid("fn.apply(({ a: 1 }), args)", &[MESSAGE])
            .invalid("foo.bar['apply'](0, [])", &[MESSAGE])
            .run();
    }

    #[test]
    fn test_reports_literal_span() {
        use oxc_allocator::Allocator;
        use oxc_ast::ast::{Expression, Statement};
        use oxc_parser::Parser;
        use oxc_span::SourceType;

        let source = "fn.apply({ a: 1 }, args)";
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();
        let Statement::ExpressionStatement(stmt) = &ret.program.body[0] else {
            panic!("expected expression statement");
        };
        let Expression::CallExpression(call) = &stmt.expression else {
            panic!("expected call expression");
        };

        let diagnostic = NoLiteral::new().check(call).expect("should report");
        assert_eq!(&source[diagnostic.start as usize..diagnostic.end as usize], "{ a: 1 }");
    }
}
