//! Command paths: name sequences addressed from the root command.

use std::fmt;

/// Absolute path of a command node. The root command has the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandPath(Vec<String>);

impl CommandPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse a whitespace-separated path such as `"fdio interface list"`.
    pub fn parse(s: &str) -> Self {
        Self::new(s.split_whitespace())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Path of the parent command; `None` for the root.
    pub fn parent(&self) -> Option<CommandPath> {
        if self.is_root() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    pub fn join(&self, name: &str) -> CommandPath {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "<root>")
        } else {
            write!(f, "{}", self.0.join(" "))
        }
    }
}

impl<S: AsRef<str>> From<&[S]> for CommandPath {
    fn from(segments: &[S]) -> Self {
        Self::new(segments.iter().map(|s| s.as_ref().to_string()))
    }
}

impl<const N: usize> From<[&str; N]> for CommandPath {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}
