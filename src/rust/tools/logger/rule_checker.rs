//! Maps transform-file diagnostics onto the levels configured under `[rules]`.
//!
//! - Warning: shown as a warning
//! - Info: shown as an informational line
//! - Off: dropped
//!
//! Generation carries on in every case.

use crate::engine::transform::Diagnostic;
use crate::platform::config::{RuleLevel, RulesSection};

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleChecker {
    rules: RulesSection,
}

impl RuleChecker {
    pub fn new(rules: RulesSection) -> Self {
        Self { rules }
    }

    pub fn level_for(&self, diagnostic: &Diagnostic) -> RuleLevel {
        match diagnostic {
            Diagnostic::UnusedEntry(_) => self.rules.unused_transform,
            Diagnostic::MissingInfo(_) => self.rules.missing_transform,
        }
    }

    /// `None` when the matching rule is switched off.
    pub fn check(&self, diagnostic: &Diagnostic) -> Option<RuleMessage> {
        let level = self.level_for(diagnostic);
        if !level.should_report() {
            return None;
        }

        Some(RuleMessage {
            level,
            rule_name: match diagnostic {
                Diagnostic::UnusedEntry(_) => "unused_transform",
                Diagnostic::MissingInfo(_) => "missing_transform",
            },
            message: diagnostic.to_string(),
        })
    }
}

/// A diagnostic ready for the logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMessage {
    pub level: RuleLevel,
    pub rule_name: &'static str,
    pub message: String,
}

impl RuleMessage {
    pub fn formatted(&self) -> String {
        format!("[{}] {}", self.rule_name, self.message)
    }
}
