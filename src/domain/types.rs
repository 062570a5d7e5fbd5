use super::errors::{Result, SpecError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_$]*$").expect("identifier regex must compile"));

// ── ObjectName ────────────────────────────────────────────────────────────────

/// An unquoted Snowflake identifier (database, schema, or agent name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(String);

impl ObjectName {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SpecError::InvalidIdentifier(
                "identifier cannot be empty".into(),
            ));
        }
        if s.len() > 255 {
            return Err(SpecError::InvalidIdentifier(format!(
                "identifier too long: {} chars (max 255)",
                s.len()
            )));
        }
        if !IDENTIFIER_RE.is_match(s) {
            return Err(SpecError::InvalidIdentifier(format!(
                "'{}' must match ^[A-Za-z_][A-Za-z0-9_$]*$",
                s
            )));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ObjectName {
    type Err = SpecError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── AgentTarget ───────────────────────────────────────────────────────────────

/// Fully-qualified name of the agent the statement creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTarget {
    pub database: ObjectName,
    pub schema: ObjectName,
    pub name: ObjectName,
}

impl AgentTarget {
    pub fn new(database: &str, schema: &str, name: &str) -> Result<Self> {
        Ok(Self {
            database: ObjectName::parse(database)?,
            schema: ObjectName::parse(schema)?,
            name: ObjectName::parse(name)?,
        })
    }
}

impl fmt::Display for AgentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.database, self.schema, self.name)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
