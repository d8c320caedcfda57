//! Rule configuration
//!
//! Mirrors the `rules` section of an ESLint / oxlint config file:
//!
//! ```json
//! { "rules": { "no-literal": "error", "custom/no-jsx-button": "off", "no-function-apply": 1 } }
//! ```

use rustc_hash::FxHashMap;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::registry::RuleRegistry;

/// How a rule is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    #[default]
    Off,
    Warn,
    Error,
}

impl RuleSeverity {
    /// Parse an ESLint severity: `"off" | "warn" | "error"`, `0 | 1 | 2`,
    /// or the array form `["error", { ...options }]`.
    pub fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => match s.as_str() {
                "off" => Some(Self::Off),
                "warn" => Some(Self::Warn),
                "error" => Some(Self::Error),
                _ => None,
            },
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(Self::Off),
                Some(1) => Some(Self::Warn),
                Some(2) => Some(Self::Error),
                _ => None,
            },
            Value::Array(items) => items.first().and_then(Self::from_json_value),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl<'de> Deserialize<'de> for RuleSeverity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(&value).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid severity {value}, expected \"off\", \"warn\", \"error\", 0, 1 or 2"
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    rules: FxHashMap<String, RuleSeverity>,
}

/// Configuration for which rules are enabled, keyed by rule name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    rules: FxHashMap<String, RuleSeverity>,
}

impl Default for RulesConfig {
    /// Every builtin rule at `warn`
    fn default() -> Self {
        let registry = RuleRegistry::builtin();
        Self {
            rules: registry
                .names()
                .map(|name| (name.to_string(), RuleSeverity::Warn))
                .collect(),
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            rules: FxHashMap::default(),
        }
    }

    /// Parse a JSON config, validating rule names against the builtin registry
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_json_with_registry(json, &RuleRegistry::builtin())
    }

    /// Parse a JSON config, validating rule names against `registry`.
    /// Rules not mentioned stay off.
    pub fn from_json_with_registry(
        json: &str,
        registry: &RuleRegistry,
    ) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let mut config = Self::none();

        for (key, severity) in raw.rules {
            let descriptor = registry
                .get(&key)
                .ok_or_else(|| ConfigError::UnknownRule(key.clone()))?;
            // `no-literal` and `custom/no-literal` name the same rule
            if config.rules.contains_key(descriptor.name) {
                return Err(ConfigError::DuplicateRule(descriptor.name.to_string()));
            }
            tracing::debug!(rule = descriptor.name, ?severity, "configured rule");
            config.rules.insert(descriptor.name.to_string(), severity);
        }

        Ok(config)
    }

    /// Set the severity of a rule. Accepts the plugin-prefixed form as well.
    pub fn with_rule(mut self, name: &str, severity: RuleSeverity) -> Self {
        let name = RuleRegistry::strip_plugin_prefix(name);
        self.rules.insert(name.to_string(), severity);
        self
    }

    /// Configured severity, `Off` when the rule is not mentioned
    pub fn severity(&self, name: &str) -> RuleSeverity {
        let name = RuleRegistry::strip_plugin_prefix(name);
        self.rules.get(name).copied().unwrap_or_default()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.severity(name).is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_enables_all_builtin_rules() {
        let config = RulesConfig::default();
        for name in ["no-literal", "no-function-apply", "no-jsx-button"] {
            assert_eq!(config.severity(name), RuleSeverity::Warn);
        }
    }

    #[test]
    fn test_none_disables_everything() {
        let config = RulesConfig::none();
        assert!(!config.is_enabled("no-function-apply"));
    }

    #[test]
    fn test_with_rule_strips_prefix() {
        let config = RulesConfig::none().with_rule("custom/no-jsx-button", RuleSeverity::Error);
        assert_eq!(config.severity("no-jsx-button"), RuleSeverity::Error);
        assert_eq!(config.severity("custom/no-jsx-button"), RuleSeverity::Error);
    }

    #[test]
    fn test_severity_values() {
        assert_eq!(RuleSeverity::from_json_value(&json!("warn")), Some(RuleSeverity::Warn));
        assert_eq!(RuleSeverity::from_json_value(&json!(2)), Some(RuleSeverity::Error));
        assert_eq!(RuleSeverity::from_json_value(&json!(0)), Some(RuleSeverity::Off));
        assert_eq!(
            RuleSeverity::from_json_value(&json!(["error", { "ignored": true }])),
            Some(RuleSeverity::Error)
        );
        assert_eq!(RuleSeverity::from_json_value(&json!("fatal")), None);
        assert_eq!(RuleSeverity::from_json_value(&json!(3)), None);
        assert_eq!(RuleSeverity::from_json_value(&json!(true)), None);
    }

    #[test]
    fn test_from_json() {
        let config = RulesConfig::from_json(
            r#"{"rules": {"no-literal": "error", "custom/no-jsx-button": "off", "no-function-apply": 1}}"#,
        )
        .unwrap();
        assert_eq!(config.severity("no-literal"), RuleSeverity::Error);
        assert_eq!(config.severity("no-jsx-button"), RuleSeverity::Off);
        assert_eq!(config.severity("no-function-apply"), RuleSeverity::Warn);
    }

    #[test]
    fn test_from_json_empty() {
        let config = RulesConfig::from_json("{}").unwrap();
        assert_eq!(config, RulesConfig::none());
    }

    #[test]
    fn test_from_json_unknown_rule() {
        let err = RulesConfig::from_json(r#"{"rules": {"no-eval": "error"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRule(ref name) if name == "no-eval"));
    }

    #[test]
    fn test_from_json_invalid_severity() {
        let err = RulesConfig::from_json(r#"{"rules": {"no-literal": "loud"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
        assert!(err.to_string().contains(r#"invalid severity "loud""#));
    }

    #[test]
    fn test_from_json_duplicate_rule() {
        let err = RulesConfig::from_json(
            r#"{"rules": {"no-literal": "error", "custom/no-literal": "off"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRule(ref name) if name == "no-literal"));
        assert_eq!(err.to_string(), "Rule configured more than once: no-literal");
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = RulesConfig::from_json("{rules").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }

    #[test]
    fn test_severity_deserialize() {
        let severity: RuleSeverity = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(severity, RuleSeverity::Error);
    }

    #[test]
    fn test_severity_deserialize_numeric() {
        let severities: Vec<RuleSeverity> = serde_json::from_str("[0, 1, 2]").unwrap();
        assert_eq!(
            severities,
            vec![RuleSeverity::Off, RuleSeverity::Warn, RuleSeverity::Error]
        );
        let severity: RuleSeverity = serde_json::from_str(r#"["warn", {"max": 3}]"#).unwrap();
        assert_eq!(severity, RuleSeverity::Warn);
    }

    #[test]
    fn test_severity_deserialize_rejects_unknown() {
        for json in ["3", "-1", r#""fatal""#, "true", "null"] {
            let err = serde_json::from_str::<RuleSeverity>(json).unwrap_err();
            assert!(err.to_string().contains("invalid severity"), "{json}: {err}");
        }
    }
}
