//! Command registry: owns the root command and, transitively, the whole tree.

use crate::error::RegistryError;
use crate::tree::node::CommandNode;
use crate::tree::path::CommandPath;
use tracing::{debug, info};

/// Attach capability handed to module registrars.
///
/// `CommandRegistry` is the production implementation; tests can substitute a
/// recording fake.
pub trait CommandSink {
    fn attach(&mut self, parent: &CommandPath, node: CommandNode) -> Result<(), RegistryError>;
}

/// The single command tree of the process.
///
/// Mutable through `attach` until `freeze`; read-only afterwards. A frozen
/// registry is `Send + Sync` and can be shared behind an `Arc` by any number of
/// concurrent readers.
#[derive(Debug)]
pub struct CommandRegistry {
    root: CommandNode,
    frozen: bool,
}

impl CommandRegistry {
    /// Create an empty registry whose root command is `program`.
    pub fn new(program: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            root: CommandNode::root(program, summary),
            frozen: false,
        }
    }

    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Program name (the root command's name).
    pub fn program(&self) -> &str {
        self.root.name()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Resolve a path from the root, descending by child name or alias.
    ///
    /// The empty path resolves to the root. On failure the error carries the
    /// shortest prefix that did not resolve.
    pub fn resolve_path<S: AsRef<str>>(&self, path: &[S]) -> Result<&CommandNode, RegistryError> {
        let mut node = &self.root;
        for (depth, segment) in path.iter().enumerate() {
            node = node
                .child(segment.as_ref())
                .ok_or_else(|| RegistryError::NotFound(CommandPath::from(&path[..=depth])))?;
        }
        Ok(node)
    }

    /// Longest-prefix resolution for dispatch.
    ///
    /// Descends while the next argument names a child and returns the deepest
    /// node reached together with the number of arguments consumed.
    pub fn resolve_longest<S: AsRef<str>>(&self, args: &[S]) -> (&CommandNode, usize) {
        let mut node = &self.root;
        let mut consumed = 0;
        for arg in args {
            match node.child(arg.as_ref()) {
                Some(child) => {
                    node = child;
                    consumed += 1;
                }
                None => break,
            }
        }
        (node, consumed)
    }

    fn resolve_path_mut(&mut self, path: &CommandPath) -> Result<&mut CommandNode, RegistryError> {
        let mut node = &mut self.root;
        for (depth, segment) in path.segments().iter().enumerate() {
            node = node.child_mut(segment).ok_or_else(|| {
                RegistryError::NotFound(CommandPath::from(&path.segments()[..=depth]))
            })?;
        }
        Ok(node)
    }

    /// Attach `node` beneath the node at `parent`.
    ///
    /// Errors from resolution and from `CommandNode::attach_child` are returned
    /// unchanged. A frozen registry rejects every attach and stays unchanged.
    pub fn attach(&mut self, parent: &CommandPath, node: CommandNode) -> Result<(), RegistryError> {
        if self.frozen {
            return Err(RegistryError::FrozenTree {
                parent: parent.clone(),
                name: node.name().to_string(),
            });
        }

        let name = node.name().to_string();
        let added = 1 + node.descendant_count();
        self.resolve_path_mut(parent)?.attach_child(node)?;
        debug!(parent = %parent, command = %name, nodes = added, "Attached command");
        Ok(())
    }

    /// Freeze the tree. Idempotent.
    pub fn freeze(&mut self) {
        if self.frozen {
            return;
        }
        self.root.freeze();
        self.frozen = true;
        info!(commands = self.len(), "Command tree frozen");
    }

    /// Number of commands, excluding the root.
    pub fn len(&self) -> usize {
        self.root.descendant_count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }

    /// Every resolvable path, depth-first in insertion order.
    pub fn paths(&self) -> Vec<CommandPath> {
        let mut paths = Vec::with_capacity(self.len());
        self.root.walk(&mut |node| paths.push(node.path().clone()));
        paths
    }
}

impl CommandSink for CommandRegistry {
    fn attach(&mut self, parent: &CommandPath, node: CommandNode) -> Result<(), RegistryError> {
        CommandRegistry::attach(self, parent, node)
    }
}
