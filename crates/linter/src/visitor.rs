//! Unified visitor pattern for running all lint rules in a single AST pass
//!
//! This module provides a `LintRunner` that traverses the AST once and runs
//! all enabled rules during the traversal, collecting diagnostics efficiently.

use oxc_ast::ast::{CallExpression, JSXElement, Program};
use oxc_ast_visit::{walk, Visit};
use oxc_span::{SourceType, Span};

use crate::config::RulesConfig;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::registry::{
    CallExpressionPredicate, JsxElementPredicate, RuleDescriptor, RuleRegistry, Visitor,
};

/// A rule that survived configuration, with the severity it reports at
#[derive(Debug, Clone, Copy)]
struct EnabledRule<P> {
    descriptor: &'static RuleDescriptor,
    severity: DiagnosticSeverity,
    predicate: P,
}

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    call_expression_rules: Vec<EnabledRule<CallExpressionPredicate>>,
    jsx_element_rules: Vec<EnabledRule<JsxElementPredicate>>,
}

impl<'a> LintRunner<'a> {
    /// Build the dispatch table for every rule `config` enables
    pub fn new(ctx: LintContext<'a>, registry: &RuleRegistry, config: &RulesConfig) -> Self {
        let mut call_expression_rules = Vec::new();
        let mut jsx_element_rules = Vec::new();
        // Without JSX syntax the parser never produces JSX elements
        let jsx = ctx.is_jsx();

        for descriptor in registry.iter() {
            let Some(severity) =
                DiagnosticSeverity::from_rule_severity(config.severity(descriptor.name))
            else {
                continue;
            };
            tracing::debug!(rule = descriptor.name, severity = severity.as_str(), "rule enabled");

            for visitor in descriptor.visitors {
                match *visitor {
                    Visitor::CallExpression(predicate) => {
                        call_expression_rules.push(EnabledRule {
                            descriptor,
                            severity,
                            predicate,
                        });
                    }
                    Visitor::JsxElement(_) if !jsx => {
                        tracing::debug!(rule = descriptor.name, "skipping JSX visitor");
                    }
                    Visitor::JsxElement(predicate) => {
                        jsx_element_rules.push(EnabledRule {
                            descriptor,
                            severity,
                            predicate,
                        });
                    }
                }
            }
        }

        Self {
            ctx,
            call_expression_rules,
            jsx_element_rules,
        }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        tracing::debug!(
            source_type = ?self.ctx.source_type(),
            call_expression_rules = self.call_expression_rules.len(),
            jsx_element_rules = self.jsx_element_rules.len(),
            "running rules"
        );
        if !self.has_rules() {
            return LintResult {
                diagnostics: Vec::new(),
            };
        }
        self.visit_program(program);
        LintResult {
            diagnostics: self.ctx.into_diagnostics(),
        }
    }

    fn has_rules(&self) -> bool {
        !self.call_expression_rules.is_empty() || !self.jsx_element_rules.is_empty()
    }

    fn report(&mut self, descriptor: &RuleDescriptor, severity: DiagnosticSeverity, span: Span) {
        tracing::trace!(
            rule = descriptor.name,
            start = span.start,
            end = span.end,
            text = self.ctx.span_text(span),
            "finding"
        );
        self.ctx.report(
            Diagnostic::new(descriptor.name, span, descriptor.message)
                .with_help(descriptor.docs)
                .with_severity(severity),
        );
    }

    /// Check a call expression with all applicable rules
    fn check_call_expression(&mut self, call: &CallExpression<'a>) {
        for index in 0..self.call_expression_rules.len() {
            let rule = self.call_expression_rules[index];
            if let Some(span) = (rule.predicate)(call) {
                self.report(rule.descriptor, rule.severity, span);
            }
        }
    }

    /// Check a JSX element with all applicable rules
    fn check_jsx_element(&mut self, element: &JSXElement<'a>) {
        for index in 0..self.jsx_element_rules.len() {
            let rule = self.jsx_element_rules[index];
            if let Some(span) = (rule.predicate)(element) {
                self.report(rule.descriptor, rule.severity, span);
            }
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        self.check_call_expression(call);
        walk::walk_call_expression(self, call);
    }

    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        self.check_jsx_element(element);
        walk::walk_jsx_element(self, element);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Warning))
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::jsx());
    LintRunner::new(ctx, &RuleRegistry::builtin(), &RulesConfig::default()).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: &RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, &RuleRegistry::builtin(), config).run(program)
}
