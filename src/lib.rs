//! Custom lint rules on OXC
//!
//! File-level entry point for the `custom-linter` rules: parses a source
//! with OXC, runs the enabled rules in a single traversal and resolves each
//! finding to a line and column.
//!
//! ## Usage
//!
//! ```rust
//! use custom_rules_oxc::{lint_source, RulesConfig};
//!
//! let source = "foo.bar.apply(this, ['hoge'])";
//! let diagnostics = lint_source(source, "input.js", &RulesConfig::default()).unwrap();
//! assert_eq!(diagnostics[0].message, "Don't use 'apply'");
//! ```

pub use custom_linter::{
    ConfigError, DiagnosticSeverity, RuleRegistry, RuleSeverity, RulesConfig,
};

#[cfg(feature = "napi")]
use napi_derive::napi;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde::Serialize;

use custom_linter::{Diagnostic, LintContext, LintRunner};

/// Errors surfaced by [`lint_source`]
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The source could not be parsed; it is not linted
    #[error("Parse error in {filename}: {}", .messages.join("; "))]
    Parse {
        filename: String,
        messages: Vec<String>,
    },
}

/// A diagnostic resolved against its file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiagnostic {
    pub filename: String,
    pub rule: String,
    pub message: String,
    /// What the rule disallows and what to use instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    pub severity: DiagnosticSeverity,
    /// 1-based line
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
    pub start: u32,
    pub end: u32,
}

impl FileDiagnostic {
    fn resolve(filename: &str, source: &str, diagnostic: Diagnostic) -> Self {
        let (line, column) = line_column(source, diagnostic.start);
        Self {
            filename: filename.to_string(),
            rule: diagnostic.rule,
            message: diagnostic.message,
            help: diagnostic.help,
            severity: diagnostic.severity,
            line,
            column,
            start: diagnostic.start,
            end: diagnostic.end,
        }
    }
}

/// 1-based line and column of a byte offset
pub fn line_column(source: &str, offset: u32) -> (usize, usize) {
    let mut end = (offset as usize).min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Lint one file with the builtin rules.
///
/// The source type comes from the file extension, falling back to TSX.
pub fn lint_source(
    source: &str,
    filename: &str,
    config: &RulesConfig,
) -> Result<Vec<FileDiagnostic>, LintError> {
    lint_source_with_registry(source, filename, &RuleRegistry::builtin(), config)
}

pub fn lint_source_with_registry(
    source: &str,
    filename: &str,
    registry: &RuleRegistry,
    config: &RulesConfig,
) -> Result<Vec<FileDiagnostic>, LintError> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(filename).unwrap_or(SourceType::tsx());

    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
        tracing::debug!(filename, errors = messages.len(), "skipping file that does not parse");
        return Err(LintError::Parse {
            filename: filename.to_string(),
            messages,
        });
    }

    let ctx = LintContext::new(source, source_type);
    let result = LintRunner::new(ctx, registry, config).run(&ret.program);
    tracing::debug!(filename, findings = result.diagnostics.len(), "linted file");

    Ok(result
        .diagnostics
        .into_iter()
        .map(|d| FileDiagnostic::resolve(filename, source, d))
        .collect())
}

/// Lint one file with a JSON rules config (`{"rules": {...}}`)
pub fn lint_source_with_json_config(
    source: &str,
    filename: &str,
    config_json: &str,
) -> Result<Vec<FileDiagnostic>, LintError> {
    let config = RulesConfig::from_json(config_json)?;
    lint_source(source, filename, &config)
}

/// Lint options exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
#[derive(Default)]
pub struct JsLintOptions {
    /// Source filename, used to pick the parser dialect
    /// @default "input.tsx"
    pub filename: Option<String>,

    /// Rules config as JSON, e.g. `{"rules": {"no-jsx-button": "error"}}`
    /// @default every rule at "warn"
    pub config: Option<String>,
}

/// A finding exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsDiagnostic {
    pub rule: String,
    pub message: String,
    pub help: Option<String>,
    /// "error" or "warning"
    pub severity: String,
    pub line: u32,
    pub column: u32,
    pub start: u32,
    pub end: u32,
}

/// Lint source code from JavaScript
#[cfg(feature = "napi")]
#[napi]
pub fn lint_js(source: String, options: Option<JsLintOptions>) -> napi::Result<Vec<JsDiagnostic>> {
    let js_options = options.unwrap_or_default();
    let filename = js_options.filename.as_deref().unwrap_or("input.tsx");

    let result = match js_options.config.as_deref() {
        Some(json) => lint_source_with_json_config(&source, filename, json),
        None => lint_source(&source, filename, &RulesConfig::default()),
    };

    let diagnostics = result.map_err(|e| napi::Error::from_reason(e.to_string()))?;
    Ok(diagnostics
        .into_iter()
        .map(|d| JsDiagnostic {
            rule: d.rule,
            message: d.message,
            help: d.help,
            severity: d.severity.as_str().to_string(),
            line: d.line as u32,
            column: d.column as u32,
            start: d.start,
            end: d.end,
        })
        .collect())
}
