use serde_json::Value;

use crate::domain::resources::{ResourceKind, ToolResource};
use crate::domain::spec::{
    scalar_text, Budget, InputSchema, Instructions, ToolDefinition,
};

use super::options::RenderOptions;
use super::truncate::truncate;

// Length budgets: truncate to the first number, switch to a block literal
// when the result still exceeds the second (or holds a newline).
const TOOL_DESC_MAX: usize = 300;
const TOOL_DESC_BLOCK: usize = 200;
const PROP_DESC_MAX: usize = 150;
const PROP_DESC_BLOCK: usize = 80;

// ── models ────────────────────────────────────────────────────────────────────

pub(crate) fn emit_models(lines: &mut Vec<String>, models: &[(String, String)], opts: &RenderOptions) {
    lines.push("models:".to_string());
    for (key, value) in models {
        lines.push(format!("  {}: {}", key, quoted(value, opts)));
    }
    lines.push(String::new());
}

// ── instructions ──────────────────────────────────────────────────────────────

pub(crate) fn emit_instructions(lines: &mut Vec<String>, ins: &Instructions, opts: &RenderOptions) {
    lines.push("instructions:".to_string());
    if let Some(response) = &ins.response {
        lines.push(format!("  response: {}", quoted(response, opts)));
    }
    if let Some(orchestration) = &ins.orchestration {
        lines.push(format!("  orchestration: {}", quoted(orchestration, opts)));
    }
    if let Some(system) = &ins.system {
        lines.push(format!("  system: {}", quoted(system, opts)));
    }
    if let Some(questions) = &ins.sample_questions {
        lines.push("  sample_questions:".to_string());
        for question in questions {
            lines.push(format!("    - question: {}", quoted(question, opts)));
        }
    }
    lines.push(String::new());
}

// ── tools ─────────────────────────────────────────────────────────────────────

pub(crate) fn emit_tools(lines: &mut Vec<String>, tools: &[ToolDefinition], opts: &RenderOptions) {
    lines.push("tools:".to_string());
    for tool in tools {
        lines.push("  - tool_spec:".to_string());
        lines.push(format!("      type: {}", quoted(&tool.tool_type, opts)));
        lines.push(format!("      name: {}", quoted(&tool.name, opts)));
        if let Some(desc) = &tool.description {
            push_text_field(lines, 6, "description", desc, TOOL_DESC_MAX, TOOL_DESC_BLOCK, opts);
        }
        if let Some(schema) = &tool.input_schema {
            emit_input_schema(lines, schema, opts);
        }
        lines.push(String::new());
    }
}

fn emit_input_schema(lines: &mut Vec<String>, schema: &InputSchema, opts: &RenderOptions) {
    lines.push("      input_schema:".to_string());
    lines.push("        type: object".to_string());
    if let Some(properties) = &schema.properties {
        lines.push("        properties:".to_string());
        for (name, prop) in properties {
            lines.push(format!("          {}:", name));
            // Description first: a block literal here must not be followed
            // by anything that could read as part of the literal, and the
            // bare type line closes it unambiguously.
            if let Some(desc) = &prop.description {
                push_text_field(
                    lines,
                    12,
                    "description",
                    desc,
                    PROP_DESC_MAX,
                    PROP_DESC_BLOCK,
                    opts,
                );
            }
            lines.push(format!("            type: {}", prop.prop_type));
        }
    }
    if !schema.required.is_empty() {
        lines.push("        required:".to_string());
        for field in &schema.required {
            lines.push(format!("          - {}", field));
        }
    }
}

// ── tool_resources ────────────────────────────────────────────────────────────

pub(crate) fn emit_tool_resources(
    lines: &mut Vec<String>,
    resources: &[(String, ToolResource)],
    opts: &RenderOptions,
) {
    lines.push("tool_resources:".to_string());
    for (name, resource) in resources {
        lines.push(format!("  {}:", name));
        if let Some(env) = &resource.execution_environment {
            lines.push("    execution_environment:".to_string());
            if let Some(timeout) = env.query_timeout {
                lines.push(format!("      query_timeout: {}", timeout));
            }
            if let Some(env_type) = &env.env_type {
                lines.push(format!("      type: {}", quoted(env_type, opts)));
            }
            if let Some(warehouse) = &env.warehouse {
                lines.push(format!("      warehouse: {}", quoted(warehouse, opts)));
            }
        }
        for field in resource.kind.field_order() {
            let Some(value) = resource.field(field) else {
                continue;
            };
            emit_resource_field(lines, emitted_key(resource.kind, field, opts), value, opts);
        }
        lines.push(String::new());
    }
}

fn emitted_key(kind: ResourceKind, field: &'static str, opts: &RenderOptions) -> &'static str {
    if kind == ResourceKind::SemanticView && field == "semantic_view" {
        opts.analyst_view_field.key()
    } else {
        field
    }
}

/// Uniform scalar rules: strings quoted, integers bare, objects recursed one
/// level with bare keys and quoted leaf scalars. Anything else is skipped.
fn emit_resource_field(lines: &mut Vec<String>, key: &str, value: &Value, opts: &RenderOptions) {
    match value {
        Value::String(s) => lines.push(format!("    {}: {}", key, quoted(s, opts))),
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            lines.push(format!("    {}: {}", key, n));
        }
        Value::Object(map) => {
            lines.push(format!("    {}:", key));
            for (k, v) in map {
                if let Value::Object(nested) = v {
                    lines.push(format!("      {}:", k));
                    for (sub_key, sub_value) in nested {
                        if let Some(text) = scalar_text(sub_value) {
                            lines.push(format!("        {}: {}", sub_key, quoted(&text, opts)));
                        }
                    }
                } else if let Some(text) = scalar_text(v) {
                    lines.push(format!("      {}: {}", k, quoted(&text, opts)));
                }
            }
        }
        _ => {}
    }
}

// ── orchestration ─────────────────────────────────────────────────────────────

pub(crate) fn emit_orchestration(lines: &mut Vec<String>, budget: &Budget) {
    lines.push("orchestration:".to_string());
    lines.push("  budget:".to_string());
    if let Some(seconds) = budget.seconds {
        lines.push(format!("    seconds: {}", seconds));
    }
    if let Some(tokens) = budget.tokens {
        lines.push(format!("    tokens: {}", tokens));
    }
}

// ── profile ───────────────────────────────────────────────────────────────────

pub(crate) fn emit_profile(lines: &mut Vec<String>, profile: &[(String, String)], opts: &RenderOptions) {
    lines.push("profile:".to_string());
    for (key, value) in profile {
        lines.push(format!("  {}: {}", key, quoted(value, opts)));
    }
}

// ── text formatting helpers ───────────────────────────────────────────────────

/// Emit one free-text field: truncate (when enabled), then pick quoted
/// single-line or block-literal form from the truncated result.
fn push_text_field(
    lines: &mut Vec<String>,
    indent: usize,
    key: &str,
    text: &str,
    max_len: usize,
    block_threshold: usize,
    opts: &RenderOptions,
) {
    let text = if opts.truncate_descriptions {
        truncate(text, max_len)
    } else {
        text.to_string()
    };
    let pad = " ".repeat(indent);
    if text.chars().count() > block_threshold || text.contains('\n') {
        lines.push(format!("{}{}: |", pad, key));
        let inner = " ".repeat(indent + 2);
        for line in text.split('\n') {
            lines.push(format!("{}{}", inner, line));
        }
    } else {
        lines.push(format!("{}{}: {}", pad, key, quoted(&text, opts)));
    }
}

fn quoted(text: &str, opts: &RenderOptions) -> String {
    if opts.escape_embedded_quotes {
        format!("\"{}\"", text.replace('"', "\\\""))
    } else {
        format!("\"{}\"", text)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
