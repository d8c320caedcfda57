//! Table-driven rule tests in the style of ESLint's `RuleTester`
//!
//! ```rust
//! use custom_linter::tester::RuleTester;
//!
//! RuleTester::new("no-function-apply")
//!     .valid("fn.apply")
//!     .invalid("foo.bar.apply(this, ['hoge'])", &["Don't use 'apply'"])
//!     .run();
//! ```
//!
//! Each case is parsed on its own, with the source type taken from its file
//! name (`input.jsx` unless given), and linted with only the rule under test
//! enabled.

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::config::{RuleSeverity, RulesConfig};
use crate::context::LintContext;
use crate::registry::RuleRegistry;
use crate::visitor::LintRunner;

const DEFAULT_FILENAME: &str = "input.jsx";

#[derive(Debug, Clone)]
struct TestCase {
    filename: String,
    code: String,
    /// Expected messages, in report order; empty for valid cases
    errors: Vec<String>,
}

/// Runs valid and invalid code samples through a single rule
#[derive(Debug, Clone)]
pub struct RuleTester {
    rule: String,
    registry: RuleRegistry,
    cases: Vec<TestCase>,
}

impl RuleTester {
    /// Create a tester for a builtin rule.
    ///
    /// Panics if the rule is not registered.
    pub fn new(rule: &str) -> Self {
        Self::with_registry(rule, RuleRegistry::builtin())
    }

    pub fn with_registry(rule: &str, registry: RuleRegistry) -> Self {
        let Some(descriptor) = registry.get(rule) else {
            panic!("rule `{rule}` is not registered");
        };
        Self {
            rule: descriptor.name.to_string(),
            registry,
            cases: Vec::new(),
        }
    }

    /// Code that must produce no findings
    pub fn valid(self, code: &str) -> Self {
        self.valid_in(DEFAULT_FILENAME, code)
    }

    pub fn valid_in(mut self, filename: &str, code: &str) -> Self {
        self.cases.push(TestCase {
            filename: filename.to_string(),
            code: code.to_string(),
            errors: Vec::new(),
        });
        self
    }

    /// Code that must produce exactly `errors`, in order
    pub fn invalid(self, code: &str, errors: &[&str]) -> Self {
        self.invalid_in(DEFAULT_FILENAME, code, errors)
    }

    pub fn invalid_in(mut self, filename: &str, code: &str, errors: &[&str]) -> Self {
        assert!(
            !errors.is_empty(),
            "invalid case {code:?} must expect at least one error"
        );
        self.cases.push(TestCase {
            filename: filename.to_string(),
            code: code.to_string(),
            errors: errors.iter().map(|e| e.to_string()).collect(),
        });
        self
    }

    /// Run every case and describe each one that failed
    pub fn failures(&self) -> Vec<String> {
        let config = RulesConfig::none().with_rule(&self.rule, RuleSeverity::Error);
        self.cases
            .iter()
            .filter_map(|case| self.run_case(case, &config).err())
            .collect()
    }

    /// Run every case, panicking with a report of all failures
    pub fn run(&self) {
        let failures = self.failures();
        if !failures.is_empty() {
            panic!(
                "{} of {} cases failed for `{}`:\n{}",
                failures.len(),
                self.cases.len(),
                self.rule,
                failures.join("\n")
            );
        }
    }

    fn run_case(&self, case: &TestCase, config: &RulesConfig) -> Result<(), String> {
        let source_type = SourceType::from_path(&case.filename).unwrap_or(SourceType::tsx());
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, &case.code, source_type).parse();
        if !ret.errors.is_empty() {
            let errors: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
            return Err(format!(
                "  {} {:?}: does not parse: {}",
                case.filename,
                case.code,
                errors.join("; ")
            ));
        }

        let ctx = LintContext::new(&case.code, source_type);
        let result = LintRunner::new(ctx, &self.registry, config).run(&ret.program);
        let actual: Vec<&str> = result.diagnostics.iter().map(|d| d.message.as_str()).collect();

        if actual == case.errors {
            Ok(())
        } else {
            Err(format!(
                "  {} {:?}: expected {:?}, got {:?}",
                case.filename, case.code, case.errors, actual
            ))
        }
    }
}
