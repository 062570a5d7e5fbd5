pub mod errors;
pub mod resources;
pub mod spec;
pub mod types;

pub use errors::{Result, SpecError};
pub use resources::{ExecutionEnvironment, ResourceKind, ToolResource};
pub use spec::{AgentSpecification, Budget, InputSchema, Instructions, PropertySpec, ToolDefinition};
pub use types::{AgentTarget, ObjectName};
