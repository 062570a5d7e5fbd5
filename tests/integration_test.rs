//! Integration tests over the public rendering API: whole documents in,
//! whole statements out.

use cortex_agent_ddl::{
    render_create_agent, AgentTarget, AnalystViewField, RenderOptions, StatementRenderer,
};

fn target() -> AgentTarget {
    AgentTarget::new("SALES", "DATA", "SALES_AGENT").unwrap()
}

#[test]
fn test_full_specification_renders_byte_exact() {
    let spec = r#"{
        "models": {"orchestration": "claude-4-sonnet"},
        "instructions": {
            "response": "Answer in plain language.",
            "orchestration": "Prefer the analyst tool for numeric questions.",
            "system": "You analyze sales data.",
            "sample_questions": [
                "What were total sales last month?",
                {"question": "Which region grew fastest?"}
            ]
        },
        "tools": [
            {"tool_spec": {
                "type": "cortex_analyst_text_to_sql",
                "name": "sales_analyst",
                "description": "Converts natural-language questions about sales into SQL.",
                "input_schema": {
                    "type": "object",
                    "properties": {
                        "query": {"description": "The question to answer", "type": "string"},
                        "limit": {"type": "integer"}
                    },
                    "required": ["query"]
                }
            }},
            {"tool_spec": {"type": "generic", "name": "X", "description": "short"}}
        ],
        "tool_resources": {
            "sales_analyst": {
                "semantic_model_file": "@DB.SC.STAGE/sales.yaml",
                "execution_environment": {"type": "warehouse", "warehouse": "ANALYST_WH", "query_timeout": 60}
            },
            "doc_search": {"id_column": "DOC_ID", "max_results": 5, "name": "DB.SC.DOC_SVC", "title_column": "TITLE"}
        },
        "orchestration": {"budget": {"seconds": 120, "tokens": 16000}},
        "profile": {"display_name": "Sales Agent"}
    }"#;

    let expected = r#"CREATE OR REPLACE AGENT SALES.DATA.SALES_AGENT
COMMENT = 'Sales agent''s DDL'
FROM SPECIFICATION
$$
models:
  orchestration: "claude-4-sonnet"

instructions:
  response: "Answer in plain language."
  orchestration: "Prefer the analyst tool for numeric questions."
  system: "You analyze sales data."
  sample_questions:
    - question: "What were total sales last month?"
    - question: "Which region grew fastest?"

tools:
  - tool_spec:
      type: "cortex_analyst_text_to_sql"
      name: "sales_analyst"
      description: "Converts natural-language questions about sales into SQL."
      input_schema:
        type: object
        properties:
          query:
            description: "The question to answer"
            type: string
          limit:
            type: integer
        required:
          - query

  - tool_spec:
      type: "generic"
      name: "X"
      description: "short"

tool_resources:
  sales_analyst:
    execution_environment:
      query_timeout: 60
      type: "warehouse"
      warehouse: "ANALYST_WH"
    semantic_model_file: "@DB.SC.STAGE/sales.yaml"

  doc_search:
    id_column: "DOC_ID"
    max_results: 5
    name: "DB.SC.DOC_SVC"
    title_column: "TITLE"

orchestration:
  budget:
    seconds: 120
    tokens: 16000
profile:
  display_name: "Sales Agent"
$$;"#;

    let sql = render_create_agent(&target(), spec, "Sales agent's DDL");
    assert_eq!(sql, expected);
}

#[test]
fn test_generic_tool_lines_appear_in_order() {
    let spec = r#"{"tools":[{"tool_spec":{"type":"generic","name":"X","description":"short"}}]}"#;
    let target = AgentTarget::new("D", "S", "A").unwrap();
    let sql = render_create_agent(&target, spec, "");
    let lines: Vec<&str> = sql.lines().collect();
    let start = lines.iter().position(|l| *l == "tools:").unwrap();
    assert_eq!(
        &lines[start..start + 5],
        &[
            "tools:",
            "  - tool_spec:",
            "      type: \"generic\"",
            "      name: \"X\"",
            "      description: \"short\"",
        ]
    );
}

#[test]
fn test_cortex_search_order_is_independent_of_input_order() {
    let spec =
        r#"{"tool_resources":{"T":{"title_column":"TITLE","max_results":5,"name":"svc","id_column":"ID"}}}"#;
    let sql = render_create_agent(&target(), spec, "");
    let body: Vec<&str> = sql.lines().collect();
    let start = body.iter().position(|l| *l == "  T:").unwrap();
    assert_eq!(
        &body[start + 1..start + 5],
        &[
            "    id_column: \"ID\"",
            "    max_results: 5",
            "    name: \"svc\"",
            "    title_column: \"TITLE\"",
        ]
    );
}

#[test]
fn test_malformed_input_yields_single_comment_line() {
    let sql = render_create_agent(&target(), "{bad", "");
    assert_eq!(sql.lines().count(), 1);
    assert!(sql.starts_with("--"));
    assert!(sql.contains("Error:"));
}

#[test]
fn test_all_fields_absent_yields_bare_statement() {
    let sql = render_create_agent(&target(), "{}", "");
    assert_eq!(
        sql,
        "CREATE OR REPLACE AGENT SALES.DATA.SALES_AGENT\nFROM SPECIFICATION\n$$\n\n$$;"
    );
}

#[test]
fn test_long_multiline_description_becomes_block_literal() {
    let desc = format!("{}\nSecond line.", "First sentence. ".repeat(20).trim_end());
    let spec = serde_json::json!({
        "tools": [{"tool_spec": {"type": "generic", "name": "X", "description": desc}}]
    })
    .to_string();
    let sql = render_create_agent(&target(), &spec, "");
    assert!(sql.contains("      description: |\n"));
    assert!(!sql.contains("description: \""));
    for line in sql
        .lines()
        .skip_while(|l| *l != "      description: |")
        .skip(1)
        .take_while(|l| l.starts_with("        "))
    {
        assert!(line.starts_with("        "));
    }
}

#[test]
fn test_render_is_deterministic_across_renderers() {
    let spec = r#"{"models":{"a":"m1","b":"m2"},"profile":{"x":"y"}}"#;
    let first = StatementRenderer::new().render(&target(), spec, "c");
    let second = StatementRenderer::new().render(&target(), spec, "c");
    assert_eq!(first, second);
}

#[test]
fn test_analyst_view_field_spelling_is_configurable() {
    let spec = r#"{"tool_resources":{"analyst":{"semantic_view":"DB.SC.V"}}}"#;

    let default_sql = render_create_agent(&target(), spec, "");
    assert!(default_sql.contains("    semantic_view: \"DB.SC.V\""));

    let renderer = StatementRenderer::with_options(RenderOptions {
        analyst_view_field: AnalystViewField::Identifier,
        ..RenderOptions::default()
    });
    let sql = renderer.render(&target(), spec, "");
    assert!(sql.contains("    identifier: \"DB.SC.V\""));
    assert!(!sql.contains("semantic_view:"));
}

#[test]
fn test_statement_ends_with_terminator_and_no_trailing_newline() {
    let sql = render_create_agent(&target(), r#"{"models":{"a":"m"}}"#, "");
    assert!(sql.ends_with("$$;"));
}
