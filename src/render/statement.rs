use crate::domain::spec::AgentSpecification;
use crate::domain::types::AgentTarget;

use super::options::RenderOptions;
use super::sections;

/// Renders one agent specification into a `CREATE OR REPLACE AGENT`
/// statement.
///
/// Rendering never fails: a specification that is not valid JSON degrades to
/// a single SQL-comment line carrying the diagnostic, so callers always
/// receive complete statement text. Identical inputs produce byte-identical
/// output.
#[derive(Debug, Clone, Default)]
pub struct StatementRenderer {
    options: RenderOptions,
}

impl StatementRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render from raw specification text. An empty `comment` omits the
    /// COMMENT clause.
    pub fn render(&self, target: &AgentTarget, specification_text: &str, comment: &str) -> String {
        match AgentSpecification::parse(specification_text) {
            Ok(spec) => self.render_spec(target, &spec, comment),
            Err(err) => format!("-- Error: {}", err),
        }
    }

    /// Render an already-parsed specification.
    pub fn render_spec(
        &self,
        target: &AgentTarget,
        spec: &AgentSpecification,
        comment: &str,
    ) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(6);
        parts.push(format!("CREATE OR REPLACE AGENT {}", target));
        if !comment.is_empty() {
            parts.push(format!("COMMENT = '{}'", comment.replace('\'', "''")));
        }
        parts.push("FROM SPECIFICATION".to_string());
        parts.push("$$".to_string());
        parts.push(self.body(spec).join("\n"));
        parts.push("$$;".to_string());
        parts.join("\n")
    }

    /// Section output in fixed order. Absent sections contribute nothing,
    /// heading included.
    fn body(&self, spec: &AgentSpecification) -> Vec<String> {
        let opts = &self.options;
        let mut lines = Vec::new();
        if let Some(models) = &spec.models {
            sections::emit_models(&mut lines, models, opts);
        }
        if let Some(instructions) = &spec.instructions {
            sections::emit_instructions(&mut lines, instructions, opts);
        }
        if let Some(tools) = &spec.tools {
            sections::emit_tools(&mut lines, tools, opts);
        }
        if let Some(resources) = &spec.tool_resources {
            sections::emit_tool_resources(&mut lines, resources, opts);
        }
        if let Some(budget) = &spec.budget {
            sections::emit_orchestration(&mut lines, budget);
        }
        if opts.include_profile_section {
            if let Some(profile) = &spec.profile {
                sections::emit_profile(&mut lines, profile, opts);
            }
        }
        lines
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> AgentTarget {
        AgentTarget::new("D", "S", "A").unwrap()
    }

    #[test]
    fn test_empty_specification_keeps_delimited_body() {
        let sql = StatementRenderer::new().render(&target(), "{}", "");
        assert_eq!(
            sql,
            "CREATE OR REPLACE AGENT D.S.A\nFROM SPECIFICATION\n$$\n\n$$;"
        );
    }

    #[test]
    fn test_comment_quotes_are_doubled() {
        let sql = StatementRenderer::new().render(&target(), "{}", "agent's comment");
        assert!(sql.contains("COMMENT = 'agent''s comment'"));
        let lines: Vec<&str> = sql.lines().collect();
        assert_eq!(lines[1], "COMMENT = 'agent''s comment'");
    }

    #[test]
    fn test_empty_comment_omits_clause() {
        let sql = StatementRenderer::new().render(&target(), "{}", "");
        assert!(!sql.contains("COMMENT"));
    }

    #[test]
    fn test_parse_failure_degrades_to_comment_statement() {
        let sql = StatementRenderer::new().render(&target(), "{bad", "ignored");
        assert_eq!(sql.lines().count(), 1);
        assert!(sql.starts_with("-- Error: Invalid JSON specification - "));
        assert!(!sql.contains("CREATE"));
        assert!(!sql.contains("$$"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let text = r#"{"models": {"orchestration": "claude-4"}, "profile": {"display_name": "A"}}"#;
        let renderer = StatementRenderer::new();
        let first = renderer.render(&target(), text, "c");
        let second = renderer.render(&target(), text, "c");
        assert_eq!(first, second);
    }

    #[test]
    fn test_profile_section_can_be_suppressed() {
        let text = r#"{"profile": {"display_name": "A"}}"#;
        let renderer = StatementRenderer::with_options(RenderOptions {
            include_profile_section: false,
            ..RenderOptions::default()
        });
        let sql = renderer.render(&target(), text, "");
        assert!(!sql.contains("profile:"));
        assert_eq!(
            sql,
            "CREATE OR REPLACE AGENT D.S.A\nFROM SPECIFICATION\n$$\n\n$$;"
        );
    }
}
