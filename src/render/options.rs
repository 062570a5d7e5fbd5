use clap::ValueEnum;

/// Key name emitted for a semantic-view analyst resource.
///
/// Deployed generators disagree on which spelling the platform accepts, so
/// neither is hard-coded; `SemanticView` is the default until the accepted
/// syntax is confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AnalystViewField {
    #[default]
    SemanticView,
    Identifier,
}

impl AnalystViewField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::SemanticView => "semantic_view",
            Self::Identifier => "identifier",
        }
    }
}

/// Rendering switches.
///
/// Each switch captures a formatting decision that independent generators
/// for the same statement have made differently; pinning them here keeps the
/// divergence explicit and testable instead of silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Bound description fields (300 chars for tool descriptions, 150 for
    /// schema property descriptions) before formatting. When off, the
    /// block-literal threshold still applies, to the unbounded text.
    pub truncate_descriptions: bool,
    /// Emit embedded `"` inside quoted scalars as `\"`.
    pub escape_embedded_quotes: bool,
    /// Emit the `profile` section. Some deployments reject it.
    pub include_profile_section: bool,
    /// Spelling of the semantic-view resource key.
    pub analyst_view_field: AnalystViewField,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            truncate_descriptions: true,
            escape_embedded_quotes: false,
            include_profile_section: true,
            analyst_view_field: AnalystViewField::SemanticView,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert!(opts.truncate_descriptions);
        assert!(!opts.escape_embedded_quotes);
        assert!(opts.include_profile_section);
        assert_eq!(opts.analyst_view_field, AnalystViewField::SemanticView);
    }

    #[test]
    fn test_analyst_view_field_keys() {
        assert_eq!(AnalystViewField::SemanticView.key(), "semantic_view");
        assert_eq!(AnalystViewField::Identifier.key(), "identifier");
    }
}
