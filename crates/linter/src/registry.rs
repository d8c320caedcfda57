//! Rule descriptors and the rule registry
//!
//! A [`RuleDescriptor`] bundles a rule's metadata with the node kinds it
//! subscribes to. Dispatch is a static table of function pointers keyed by
//! [`NodeKind`]; the runner resolves it once, before traversal starts.

use oxc_ast::ast::{CallExpression, JSXElement};
use oxc_span::Span;
use rustc_hash::FxHashMap;

use crate::rules::{NoFunctionApply, NoJsxButton, NoLiteral};
use crate::RuleCategory;

/// Prefix under which the rules are published, e.g. `custom/no-literal`
pub const PLUGIN_PREFIX: &str = "custom/";

/// Node kinds a rule can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    CallExpression,
    JsxElement,
}

/// Predicate over a call expression; returns the span to report, if any
pub type CallExpressionPredicate = fn(&CallExpression<'_>) -> Option<Span>;

/// Predicate over a JSX element; returns the span to report, if any
pub type JsxElementPredicate = fn(&JSXElement<'_>) -> Option<Span>;

/// A predicate together with the node kind it runs on
#[derive(Debug, Clone, Copy)]
pub enum Visitor {
    CallExpression(CallExpressionPredicate),
    JsxElement(JsxElementPredicate),
}

impl Visitor {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::CallExpression(_) => NodeKind::CallExpression,
            Self::JsxElement(_) => NodeKind::JsxElement,
        }
    }
}

/// Metadata and visitors of one rule
#[derive(Debug, Clone, Copy)]
pub struct RuleDescriptor {
    /// Registry key
    pub name: &'static str,
    pub category: RuleCategory,
    /// Fixed message attached to every finding
    pub message: &'static str,
    /// One-line description of the rule
    pub docs: &'static str,
    pub visitors: &'static [Visitor],
}

impl RuleDescriptor {
    pub fn subscribes_to(&self, kind: NodeKind) -> bool {
        self.visitors.iter().any(|v| v.kind() == kind)
    }
}

/// Rules shipped with this crate, in registration order
pub const BUILTIN_RULES: &[RuleDescriptor] = &[
    NoLiteral::DESCRIPTOR,
    NoFunctionApply::DESCRIPTOR,
    NoJsxButton::DESCRIPTOR,
];

/// Immutable table of rule descriptors keyed by name
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: &'static [RuleDescriptor],
    by_name: FxHashMap<&'static str, usize>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleRegistry {
    pub fn new(rules: &'static [RuleDescriptor]) -> Self {
        let by_name = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| (rule.name, index))
            .collect();
        Self { rules, by_name }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_RULES)
    }

    /// `custom/no-literal` -> `no-literal`
    pub fn strip_plugin_prefix(name: &str) -> &str {
        name.strip_prefix(PLUGIN_PREFIX).unwrap_or(name)
    }

    /// Look up a rule by name, with or without the plugin prefix
    pub fn get(&self, name: &str) -> Option<&'static RuleDescriptor> {
        let rules = self.rules;
        self.by_name
            .get(Self::strip_plugin_prefix(name))
            .map(|&index| &rules[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static RuleDescriptor> {
        self.rules.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.rules.iter().map(|rule| rule.name)
    }

    /// Rules subscribed to `kind`
    pub fn visitors_for(&self, kind: NodeKind) -> impl Iterator<Item = &'static RuleDescriptor> {
        self.rules.iter().filter(move |rule| rule.subscribes_to(kind))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
