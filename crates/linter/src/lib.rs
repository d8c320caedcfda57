//! Custom lint rules
//!
//! This crate provides a handful of project-specific lint rules over the oxc
//! AST, a registry that maps rule names to their descriptors, and a runner
//! that walks a program once and dispatches each node to the rules
//! subscribed to its kind.
//!
//! Rules can be used:
//! 1. Standalone, by calling a rule's `check` on a node
//! 2. Through [`LintRunner`] / [`lint_with_config`] on a whole program
//! 3. In tests, through [`tester::RuleTester`]

pub mod config;
pub mod registry;
pub mod rules;
pub mod tester;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;
mod error;

pub use config::{RuleSeverity, RulesConfig};
pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use error::ConfigError;
pub use registry::{NodeKind, RuleDescriptor, RuleRegistry, Visitor};
pub use rules::*;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner};

/// Rule category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that ban constructs the codebase has chosen not to use
    Restriction,
    /// Rules that encourage best practices
    Style,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// Message attached to every finding of the rule
    const MESSAGE: &'static str;
}
