//! Shared test utilities for integration tests
//!
//! Provides a fixture registrar that attaches groups of no-op leaf commands, so
//! tests can describe a module's contribution declaratively.

#![allow(dead_code)]

use vppcli::handler::handler;
use vppcli::{CommandNode, CommandPath, CommandSink, ModuleRegistrar, RegistryError};

/// Registrar that attaches each configured group (with its leaves) beneath `parent`.
#[derive(Clone, Debug)]
pub struct FixtureRegistrar {
    id: String,
    parent: CommandPath,
    groups: Vec<(String, Vec<String>)>,
}

impl FixtureRegistrar {
    pub fn new(id: &str) -> Self {
        Self::under(id, CommandPath::root())
    }

    pub fn under(id: &str, parent: CommandPath) -> Self {
        Self {
            id: id.to_string(),
            parent,
            groups: Vec::new(),
        }
    }

    pub fn group(mut self, name: &str, leaves: &[&str]) -> Self {
        self.groups.push((
            name.to_string(),
            leaves.iter().map(|l| l.to_string()).collect(),
        ));
        self
    }
}

impl ModuleRegistrar for FixtureRegistrar {
    fn id(&self) -> &str {
        &self.id
    }

    fn register(&self, sink: &mut dyn CommandSink) -> Result<(), RegistryError> {
        for (name, leaves) in &self.groups {
            let mut group = CommandNode::group(name.as_str(), format!("{} commands", name));
            for leaf in leaves {
                let label = leaf.clone();
                group.attach_child(
                    CommandNode::new(leaf.as_str(), format!("{} command", leaf))
                        .handler(handler(move |_| Ok(label.clone()))),
                )?;
            }
            sink.attach(&self.parent, group)?;
        }
        Ok(())
    }
}
