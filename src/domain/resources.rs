use serde::Deserialize;
use serde_json::Value;

// ── ExecutionEnvironment ──────────────────────────────────────────────────────

/// Compute context a tool resource runs under. Emitted ahead of the resource
/// fields whenever the input carries the key, whatever the variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExecutionEnvironment {
    pub query_timeout: Option<i64>,
    #[serde(rename = "type")]
    pub env_type: Option<String>,
    pub warehouse: Option<String>,
}

// ── ResourceKind ──────────────────────────────────────────────────────────────

/// Tagged classification of a tool-resource object.
///
/// The input carries no explicit tag; the shape is decided once here, by the
/// first matching rule, and everything downstream dispatches on the tag. Each
/// variant owns a fixed emission order so the field-order table is exhaustive
/// and testable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// `type` is `function` or `procedure`.
    FunctionOrProcedure,
    /// Carries a `semantic_model_file` (Cortex Analyst over a YAML model).
    SemanticModelFile,
    /// Carries a `semantic_view` (Cortex Analyst over a view).
    SemanticView,
    /// Carries an `id_column` (Cortex Search service binding).
    CortexSearch,
    /// None of the above; emits every known field it happens to carry.
    Generic,
}

impl ResourceKind {
    pub fn classify(fields: &serde_json::Map<String, Value>) -> Self {
        if matches!(
            fields.get("type").and_then(Value::as_str),
            Some("function") | Some("procedure")
        ) {
            return Self::FunctionOrProcedure;
        }
        if fields.contains_key("semantic_model_file") {
            return Self::SemanticModelFile;
        }
        if fields.contains_key("semantic_view") {
            return Self::SemanticView;
        }
        if fields.contains_key("id_column") {
            return Self::CortexSearch;
        }
        Self::Generic
    }

    /// The exact order fields of this shape are emitted in; absent fields
    /// are skipped, fields outside the list never appear.
    pub fn field_order(&self) -> &'static [&'static str] {
        match self {
            Self::FunctionOrProcedure => &["identifier", "name", "type"],
            Self::SemanticModelFile => &["semantic_model_file"],
            Self::SemanticView => &["semantic_view"],
            Self::CortexSearch => &["id_column", "max_results", "name", "title_column"],
            Self::Generic => &[
                "identifier",
                "name",
                "type",
                "semantic_model_file",
                "id_column",
                "max_results",
                "title_column",
                "search_service",
                "filter",
            ],
        }
    }
}

// ── ToolResource ──────────────────────────────────────────────────────────────

/// One entry of `tool_resources`, classified and ready to emit.
#[derive(Debug, Clone)]
pub struct ToolResource {
    pub kind: ResourceKind,
    pub execution_environment: Option<ExecutionEnvironment>,
    /// Remaining fields in input order, `execution_environment` excluded.
    pub fields: Vec<(String, Value)>,
}

impl ToolResource {
    /// Classify a raw resource value. A non-object value yields an empty
    /// Generic entry, so the tool name still gets its block.
    pub fn classify(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self {
                kind: ResourceKind::Generic,
                execution_environment: None,
                fields: Vec::new(),
            };
        };
        let execution_environment = map.get("execution_environment").map(|env| {
            serde_json::from_value::<ExecutionEnvironment>(env.clone()).unwrap_or_default()
        });
        let fields = map
            .iter()
            .filter(|(k, _)| k.as_str() != "execution_environment")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self {
            kind: ResourceKind::classify(map),
            execution_environment,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
