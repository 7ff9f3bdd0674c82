//! Command nodes: a named entry in the command tree, optionally runnable,
//! optionally the parent of further nodes.

use crate::error::RegistryError;
use crate::handler::Handler;
use crate::tree::path::CommandPath;
use std::fmt;

/// A single addressable command.
///
/// A node owns its children. Nodes are moved into their parent on attach, so a
/// subtree can never be shared or loop back onto an ancestor. The parent is
/// reachable for lookup only, through `parent_path`.
pub struct CommandNode {
    name: String,
    aliases: Vec<String>,
    summary: String,
    detail: Option<String>,
    handler: Option<Handler>,
    children: Vec<CommandNode>,
    path: CommandPath,
    frozen: bool,
}

impl CommandNode {
    /// Create a detached node. Attach it to make it addressable.
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: CommandPath::root().join(&name),
            name,
            aliases: Vec::new(),
            summary: summary.into(),
            detail: None,
            handler: None,
            children: Vec::new(),
            frozen: false,
        }
    }

    /// Create a pure grouping node (no handler).
    pub fn group(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self::new(name, summary)
    }

    pub(crate) fn root(name: impl Into<String>, summary: impl Into<String>) -> Self {
        let mut node = Self::new(name, summary);
        node.path = CommandPath::root();
        node
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn handler(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Builder-style `attach_child` for assembling a detached subtree.
    pub fn with_child(mut self, child: CommandNode) -> Result<Self, RegistryError> {
        self.attach_child(child)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn handler_ref(&self) -> Option<&Handler> {
        self.handler.as_ref()
    }

    pub fn is_runnable(&self) -> bool {
        self.handler.is_some()
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// Absolute path of this node, relative to wherever it is currently attached.
    pub fn path(&self) -> &CommandPath {
        &self.path
    }

    /// Path of the parent node; `None` for the root.
    pub fn parent_path(&self) -> Option<CommandPath> {
        self.path.parent()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Whether this node answers to `token` by name or alias.
    pub fn answers_to(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|a| a == token)
    }

    /// Look up a direct child by name or alias.
    pub fn child(&self, token: &str) -> Option<&CommandNode> {
        self.children.iter().find(|c| c.answers_to(token))
    }

    pub(crate) fn child_mut(&mut self, token: &str) -> Option<&mut CommandNode> {
        self.children.iter_mut().find(|c| c.answers_to(token))
    }

    /// Attach `node` as the last child of this node.
    ///
    /// Fails with `FrozenTree` once the owning registry is frozen, with
    /// `DuplicateName` if the node's name or any alias is already taken by a
    /// sibling, and with `InvalidName` for malformed names. On failure the
    /// children are left untouched.
    pub fn attach_child(&mut self, mut node: CommandNode) -> Result<(), RegistryError> {
        if self.frozen {
            return Err(RegistryError::FrozenTree {
                parent: self.path.clone(),
                name: node.name,
            });
        }

        node.validate_names()?;

        for token in node.tokens() {
            if self.children.iter().any(|c| c.answers_to(token)) {
                return Err(RegistryError::DuplicateName {
                    parent: self.path.clone(),
                    name: token.to_string(),
                });
            }
        }

        let child_path = self.path.join(&node.name);
        node.reroot(child_path);
        self.children.push(node);
        Ok(())
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Depth-first walk in insertion order, excluding `self`.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a CommandNode)) {
        for child in &self.children {
            visit(child);
            child.walk(visit);
        }
    }

    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
        for child in &mut self.children {
            child.freeze();
        }
    }

    fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    fn validate_names(&self) -> Result<(), RegistryError> {
        let mut seen: Vec<&str> = Vec::with_capacity(1 + self.aliases.len());
        for token in self.tokens() {
            validate_name(token)?;
            if seen.contains(&token) {
                return Err(RegistryError::InvalidName {
                    name: token.to_string(),
                    reason: "alias repeats the command name or another alias",
                });
            }
            seen.push(token);
        }
        Ok(())
    }

    fn reroot(&mut self, path: CommandPath) {
        for child in &mut self.children {
            let child_path = path.join(&child.name);
            child.reroot(child_path);
        }
        self.path = path;
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.starts_with('-') {
        "name starts with '-'"
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        "name may only contain ASCII letters, digits, '-' and '_'"
    } else {
        return Ok(());
    };
    Err(RegistryError::InvalidName {
        name: name.to_string(),
        reason,
    })
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("path", &self.path)
            .field("runnable", &self.is_runnable())
            .field("frozen", &self.frozen)
            .field("children", &self.children)
            .finish()
    }
}
