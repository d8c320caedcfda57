//! custom/no-jsx-button
//!
//! Disallow the intrinsic `<button>` element.

use oxc_ast::ast::JSXElement;
use oxc_span::Span;

use crate::diagnostic::Diagnostic;
use crate::registry::{RuleDescriptor, Visitor};
use crate::utils::intrinsic_tag_name;
use crate::{RuleCategory, RuleMeta};

const DISALLOWED_TAG: &str = "button";

/// no-jsx-button rule
#[derive(Debug, Clone, Default)]
pub struct NoJsxButton;

impl RuleMeta for NoJsxButton {
    const NAME: &'static str = "no-jsx-button";
    const CATEGORY: RuleCategory = RuleCategory::Restriction;
    const MESSAGE: &'static str = "Don't use <button>";
}

impl NoJsxButton {
    pub const DESCRIPTOR: RuleDescriptor = RuleDescriptor {
        name: Self::NAME,
        category: Self::CATEGORY,
        message: Self::MESSAGE,
        docs: "Disallow the intrinsic `<button>` element.",
        visitors: &[Visitor::JsxElement(Self::find)],
    };

    pub fn new() -> Self {
        Self
    }

    pub fn find(element: &JSXElement<'_>) -> Option<Span> {
        (intrinsic_tag_name(&element.opening_element) == Some(DISALLOWED_TAG))
            .then_some(element.span)
    }

    /// Check a JSX element for a `<button>` tag
    pub fn check<'a>(&self, element: &JSXElement<'a>) -> Option<Diagnostic> {
        Self::find(element).map(|span| Diagnostic::warning(Self::NAME, span, Self::MESSAGE))
    }
}
