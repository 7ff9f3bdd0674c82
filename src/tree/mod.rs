//! Command Tree
//!
//! The single command tree of the process: nodes, the registry that owns them,
//! and the builder that runs module registrars and freezes the result.

pub mod builder;
pub mod node;
pub mod path;
pub mod registry;

pub use builder::{BuildState, TreeBuilder};
pub use node::CommandNode;
pub use path::CommandPath;
pub use registry::{CommandRegistry, CommandSink};
