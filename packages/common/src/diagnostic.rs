use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Warning,
    Info,
}

/// Where in the input tree a diagnostic was raised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: PathBuf,

    /// 1-based line number, absent for whole-file diagnostics
    pub line: Option<usize>,
}

impl Location {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            line: None,
        }
    }

    pub fn line(path: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            path: path.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path.display(), line),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

/// A non-fatal finding produced while extracting or resolving models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// Short identifier of the check that fired, e.g. `malformed-field`
    pub rule: String,

    /// Human-readable message
    pub message: String,

    pub location: Location,

    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn warning(
        rule: impl Into<String>,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(DiagnosticLevel::Warning, rule, message, location)
    }

    pub fn info(rule: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self::new(DiagnosticLevel::Info, rule, message, location)
    }

    fn new(
        level: DiagnosticLevel,
        rule: impl Into<String>,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            level,
            rule: rule.into(),
            message: message.into(),
            location,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.level, DiagnosticLevel::Warning)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Info => "info",
        };
        write!(f, "{} [{}] {}: {}", level, self.rule, self.location, self.message)
    }
}
