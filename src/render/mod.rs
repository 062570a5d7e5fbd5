pub mod options;
mod sections;
pub mod statement;
pub mod truncate;

pub use options::{AnalystViewField, RenderOptions};
pub use statement::StatementRenderer;
pub use truncate::truncate;
