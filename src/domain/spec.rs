use serde::Deserialize;
use serde_json::{Map, Value};

use super::errors::Result;
use super::resources::ToolResource;

// ── AgentSpecification (root) ─────────────────────────────────────────────────

/// In-memory form of one agent specification document.
///
/// Built transiently from the JSON text a caller hands in (typically the
/// platform's own description of an existing agent); lives only for the
/// duration of one render call. Every field is optional. Parsing is strict
/// about JSON syntax and deliberately loose about shape: a field whose value
/// does not match the expected structure is dropped rather than rejected,
/// so the renderer emits whatever is recognizable and nothing else.
///
/// `Option` on a section distinguishes "absent or empty in the input" (no
/// heading emitted) from "present but contributing no lines" (heading still
/// emitted, with nothing under it).
#[derive(Debug, Clone, Default)]
pub struct AgentSpecification {
    pub models: Option<Vec<(String, String)>>,
    pub instructions: Option<Instructions>,
    pub tools: Option<Vec<ToolDefinition>>,
    pub tool_resources: Option<Vec<(String, ToolResource)>>,
    pub budget: Option<Budget>,
    pub profile: Option<Vec<(String, String)>>,
}

impl AgentSpecification {
    /// Parse specification text. JSON syntax errors are the only failure.
    pub fn parse(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&root))
    }

    pub fn from_value(root: &Value) -> Self {
        let Some(root) = root.as_object() else {
            return Self::default();
        };
        Self {
            models: parse_scalar_map(root.get("models")),
            instructions: root
                .get("instructions")
                .and_then(Value::as_object)
                .filter(|m| !m.is_empty())
                .map(Instructions::from_map),
            tools: parse_tools(root.get("tools")),
            tool_resources: parse_tool_resources(root.get("tool_resources")),
            budget: parse_budget(root.get("orchestration")),
            profile: parse_profile(root.get("profile")),
        }
    }
}

// ── Instructions ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Instructions {
    pub response: Option<String>,
    pub orchestration: Option<String>,
    pub system: Option<String>,
    /// `Some` whenever the input list is non-empty, even if no entry had a
    /// usable shape — the heading is still emitted in that case.
    pub sample_questions: Option<Vec<String>>,
}

impl Instructions {
    fn from_map(map: &Map<String, Value>) -> Self {
        let sample_questions = map
            .get("sample_questions")
            .and_then(Value::as_array)
            .filter(|items| !items.is_empty())
            .map(|items| items.iter().filter_map(question_text).collect());
        Self {
            response: nonempty_str(map.get("response")),
            orchestration: nonempty_str(map.get("orchestration")),
            system: nonempty_str(map.get("system")),
            sample_questions,
        }
    }
}

/// Sample questions arrive either as bare strings or as objects carrying a
/// `question` key; both forms are accepted, anything else is skipped.
fn question_text(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("question")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

// ── Tools ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ToolDefinition {
    pub tool_type: String,
    pub name: String,
    pub description: Option<String>,
    pub input_schema: Option<InputSchema>,
}

#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    /// `Some` whenever the `properties` key is present with an object value;
    /// an empty object still emits the `properties:` heading.
    pub properties: Option<Vec<(String, PropertySpec)>>,
    pub required: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PropertySpec {
    /// Present whenever the key is there with a string value — an empty
    /// string is kept and rendered as `""`.
    pub description: Option<String>,
    pub prop_type: String,
}

fn parse_tools(value: Option<&Value>) -> Option<Vec<ToolDefinition>> {
    let entries = value.and_then(Value::as_array).filter(|a| !a.is_empty())?;
    let tools = entries
        .iter()
        .filter_map(|entry| entry.get("tool_spec"))
        .filter_map(Value::as_object)
        .map(parse_tool_spec)
        .collect();
    Some(tools)
}

fn parse_tool_spec(spec: &Map<String, Value>) -> ToolDefinition {
    ToolDefinition {
        tool_type: str_or_empty(spec.get("type")),
        name: str_or_empty(spec.get("name")),
        description: nonempty_str(spec.get("description")),
        input_schema: spec.get("input_schema").map(parse_input_schema),
    }
}

fn parse_input_schema(value: &Value) -> InputSchema {
    let Some(map) = value.as_object() else {
        return InputSchema::default();
    };
    let properties = map.get("properties").and_then(Value::as_object).map(|props| {
        props
            .iter()
            .map(|(name, def)| (name.clone(), parse_property(def)))
            .collect()
    });
    let required = map
        .get("required")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(scalar_text).collect())
        .unwrap_or_default();
    InputSchema {
        properties,
        required,
    }
}

fn parse_property(def: &Value) -> PropertySpec {
    let Some(map) = def.as_object() else {
        return PropertySpec {
            description: None,
            prop_type: "string".to_string(),
        };
    };
    PropertySpec {
        description: map
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        prop_type: map
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("string")
            .to_string(),
    }
}

// ── Tool resources ────────────────────────────────────────────────────────────

fn parse_tool_resources(value: Option<&Value>) -> Option<Vec<(String, ToolResource)>> {
    let map = value.and_then(Value::as_object).filter(|m| !m.is_empty())?;
    Some(
        map.iter()
            .map(|(name, v)| (name.clone(), ToolResource::classify(v)))
            .collect(),
    )
}

// ── Budget ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Budget {
    pub seconds: Option<i64>,
    pub tokens: Option<i64>,
}

/// The `orchestration:`/`budget:` headings are emitted whenever `budget` is a
/// non-empty object, so presence is decided here and field extraction stays
/// shape-tolerant.
fn parse_budget(value: Option<&Value>) -> Option<Budget> {
    let budget = value
        .and_then(Value::as_object)
        .and_then(|orch| orch.get("budget"))
        .and_then(Value::as_object)
        .filter(|m| !m.is_empty())?;
    Some(serde_json::from_value(Value::Object(budget.clone())).unwrap_or_default())
}

// ── Profile ───────────────────────────────────────────────────────────────────

fn parse_profile(value: Option<&Value>) -> Option<Vec<(String, String)>> {
    let map = value.and_then(Value::as_object).filter(|m| !m.is_empty())?;
    Some(
        map.iter()
            .filter(|(_, v)| !is_falsy(v))
            .filter_map(|(k, v)| scalar_text(v).map(|text| (k.clone(), text)))
            .collect(),
    )
}

fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_i64() == Some(0) || n.as_f64() == Some(0.0),
        Value::Array(a) => a.is_empty(),
        Value::Object(m) => m.is_empty(),
    }
}

// ── shared value accessors ────────────────────────────────────────────────────

fn parse_scalar_map(value: Option<&Value>) -> Option<Vec<(String, String)>> {
    let map = value.and_then(Value::as_object).filter(|m| !m.is_empty())?;
    Some(
        map.iter()
            .filter_map(|(k, v)| scalar_text(v).map(|text| (k.clone(), text)))
            .collect(),
    )
}

fn nonempty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn str_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Textual form of a scalar, for interpolation into a quoted value. Nulls
/// and containers have no scalar text.
pub(crate) fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
