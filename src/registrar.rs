//! Module registrar contract: one per generated client module.

use crate::error::RegistryError;
use crate::tree::CommandSink;

/// A unit that contributes a command subtree.
///
/// `register` is called exactly once, by the tree builder, before the tree is
/// frozen. It builds its subtree and attaches it through `sink` one or more
/// times. Any ordering dependency on another module must be expressed by that
/// module appearing earlier in the builder's list.
pub trait ModuleRegistrar {
    /// Stable identifier used in logs and startup errors.
    fn id(&self) -> &str;

    fn register(&self, sink: &mut dyn CommandSink) -> Result<(), RegistryError>;
}
