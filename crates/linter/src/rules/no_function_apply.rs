//! custom/no-function-apply
//!
//! Disallow calling `Function.prototype.apply`.
//!
//! Only invocations are reported: `fn.apply(ctx, args)` is flagged, reading
//! the property with `fn.apply` is not.

use oxc_ast::ast::CallExpression;
use oxc_span::Span;

use crate::diagnostic::Diagnostic;
use crate::registry::{RuleDescriptor, Visitor};
use crate::utils::callee_member_name;
use crate::{RuleCategory, RuleMeta};

/// no-function-apply rule
#[derive(Debug, Clone, Default)]
pub struct NoFunctionApply;

impl RuleMeta for NoFunctionApply {
    const NAME: &'static str = "no-function-apply";
    const CATEGORY: RuleCategory = RuleCategory::Restriction;
    const MESSAGE: &'static str = "Don't use 'apply'";
}

impl NoFunctionApply {
    pub const DESCRIPTOR: RuleDescriptor = RuleDescriptor {
        name: Self::NAME,
        category: Self::CATEGORY,
        message: Self::MESSAGE,
        docs: "Disallow `fn.apply(...)`; use spread arguments instead.",
        visitors: &[Visitor::CallExpression(Self::find)],
    };

    pub fn new() -> Self {
        Self
    }

    /// Span of the offending call, if `call` invokes a member named `apply`
    pub fn find(call: &CallExpression<'_>) -> Option<Span> {
        (callee_member_name(call) == Some("apply")).then_some(call.span)
    }

    /// Check a call expression for `.apply(...)`
    pub fn check<'a>(&self, call: &CallExpression<'a>) -> Option<Diagnostic> {
        Self::find(call).map(|span| Diagnostic::warning(Self::NAME, span, Self::MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tester::RuleTester;

    #[test]
    fn test_rule_name() {
        assert_eq!(NoFunctionApply::NAME, "no-function-apply");
    }

    #[test]
    fn test_rule() {
        RuleTester::new(NoFunctionApply::NAME)
            .valid("fn.apply")
            .valid("const f = foo.bar.apply;")
            .valid("fn.call(this, 'hoge')")
            .valid("apply(this, ['hoge'])")
            .valid("fn[apply](this, [])")
            .invalid("foo.bar.apply(this, ['hoge'])", &["Don't use 'apply'"])
            .invalid("fn.apply()", &["Don't use 'apply'"])
            .invalid("fn['apply'](null, args)", &["Don't use 'apply'"])
            .invalid("fn?.apply(null, args)", &["Don't use 'apply'"])
            .invalid("(fn.apply)(null, args)", &["Don't use 'apply'"])
            .invalid(
                "a.apply(null, [b.apply(null, [])])",
                &["Don't use 'apply'", "Don't use 'apply'"],
            )
            .run();
    }
}
