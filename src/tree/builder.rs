//! Tree builder: runs module registrars in declared order and freezes the result

use crate::error::BuildError;
use crate::registrar::ModuleRegistrar;
use crate::tree::registry::CommandRegistry;
use std::collections::HashSet;
use tracing::{error, info, instrument};

/// Builder lifecycle.
///
/// `Empty → Registering → Frozen`; any registrar failure moves to `Aborted`,
/// which is terminal and distinct from `Frozen`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildState {
    Empty,
    /// `completed` registrars have returned successfully so far
    Registering { completed: usize },
    Frozen,
    Aborted { registrar: String },
}

/// Orchestrates registration across all command modules.
///
/// The registrar list is explicit and ordered. If one module attaches beneath
/// another module's node, the dependency must appear as list order.
pub struct TreeBuilder {
    registrars: Vec<Box<dyn ModuleRegistrar>>,
    state: BuildState,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_registrars(Vec::new())
    }

    pub fn with_registrars(registrars: Vec<Box<dyn ModuleRegistrar>>) -> Self {
        Self {
            registrars,
            state: BuildState::Empty,
        }
    }

    /// Append a registrar to the end of the list.
    pub fn registrar(mut self, registrar: impl ModuleRegistrar + 'static) -> Self {
        self.registrars.push(Box::new(registrar));
        self
    }

    pub fn registrar_ids(&self) -> Vec<&str> {
        self.registrars.iter().map(|r| r.id()).collect()
    }

    pub fn state(&self) -> &BuildState {
        &self.state
    }

    /// Run every registrar against `registry`, then freeze it.
    ///
    /// Stops at the first failure and leaves the registry unfrozen. Each
    /// registrar is invoked at most once; the builder cannot be run again.
    #[instrument(skip_all, fields(registrars = self.registrars.len()))]
    pub fn build_into(&mut self, registry: &mut CommandRegistry) -> Result<(), BuildError> {
        if self.state != BuildState::Empty {
            return Err(BuildError::AlreadyRun);
        }

        let mut seen = HashSet::new();
        for registrar in &self.registrars {
            if !seen.insert(registrar.id()) {
                return Err(BuildError::DuplicateRegistrar(registrar.id().to_string()));
            }
        }

        let registrars = std::mem::take(&mut self.registrars);
        for (completed, registrar) in registrars.iter().enumerate() {
            self.state = BuildState::Registering { completed };
            if let Err(source) = registrar.register(registry) {
                error!(registrar = registrar.id(), error = %source, "Registration failed");
                self.state = BuildState::Aborted {
                    registrar: registrar.id().to_string(),
                };
                return Err(BuildError::Registration {
                    registrar: registrar.id().to_string(),
                    source,
                });
            }
            info!(registrar = registrar.id(), "Registered command module");
            self.state = BuildState::Registering {
                completed: completed + 1,
            };
        }

        registry.freeze();
        self.state = BuildState::Frozen;
        Ok(())
    }

    /// Convenience form of `build_into` that hands back the frozen registry.
    pub fn build(mut self, mut registry: CommandRegistry) -> Result<CommandRegistry, BuildError> {
        self.build_into(&mut registry)?;
        Ok(registry)
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
