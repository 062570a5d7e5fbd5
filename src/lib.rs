//! Render Snowflake Cortex Agent JSON specifications as
//! `CREATE OR REPLACE AGENT ... FROM SPECIFICATION` DDL statements.
//!
//! The core is a pure, synchronous transformation with no I/O: parse the
//! specification text, classify its tool resources, and emit the body
//! sections in a fixed, deterministic order. All drift-prone formatting
//! decisions (truncation, quote escaping, the profile section, the
//! semantic-view key spelling) live in [`RenderOptions`].
//!
//! ```
//! use cortex_agent_ddl::{AgentTarget, StatementRenderer};
//!
//! let target = AgentTarget::new("SALES", "DATA", "SALES_AGENT").unwrap();
//! let sql = StatementRenderer::new().render(
//!     &target,
//!     r#"{"models": {"orchestration": "claude-4"}}"#,
//!     "",
//! );
//! assert!(sql.starts_with("CREATE OR REPLACE AGENT SALES.DATA.SALES_AGENT"));
//! ```

pub mod domain;
pub mod render;

pub use domain::{
    AgentSpecification, AgentTarget, Budget, ExecutionEnvironment, ObjectName, ResourceKind,
    Result, SpecError, ToolDefinition, ToolResource,
};
pub use render::{truncate, AnalystViewField, RenderOptions, StatementRenderer};

/// Render one statement with default options.
pub fn render_create_agent(target: &AgentTarget, specification_text: &str, comment: &str) -> String {
    StatementRenderer::new().render(target, specification_text, comment)
}
