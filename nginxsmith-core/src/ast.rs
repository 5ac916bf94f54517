//! Node types for configuration trees
//!
//! This module defines the tree a document is built from: [`Directive`]
//! leaves, [`Clause`] blocks, the restricted [`Location`] variant, and
//! the [`Document`] root, together with the fluent builder operations.

use serde::Serialize;

/// A directive value, stored verbatim.
///
/// Values are opaque to the builder: no escaping, coercion, or
/// validation is performed, they are echoed back out during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// String value
    String(String),

    /// Integer value
    Integer(i64),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value.into())
    }
}

/// A single `name value;` leaf entry.
///
/// Immutable once constructed; created only through
/// [`Clause::directive`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directive {
    name: String,
    value: Value,
}

impl Directive {
    pub(crate) fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Name of the directive.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the directive.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A child node owned by a [`Clause`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    /// Leaf `name value;` line
    Directive(Directive),

    /// Nested named block
    Clause(Clause),

    /// Nested path-scoped block
    Location(Location),
}

/// An ordered, named container of directives and nested blocks.
///
/// Children are appended through the builder operations and rendered
/// in insertion order. Each child created through a builder call sits
/// one depth level below its parent; depth is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause {
    name: String,
    depth: usize,
    entries: Vec<Entry>,
}

impl Clause {
    pub(crate) fn new(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            depth,
            entries: Vec::new(),
        }
    }

    /// Name of the clause.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nesting depth of the clause. 0 is the document root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Child entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Appends a `name value;` directive. Chainable.
    pub fn directive(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.push(Entry::Directive(Directive::new(name, value)));
        self
    }

    /// Appends a nested clause, populated by `configure` before it
    /// becomes visible to rendering. Chainable.
    ///
    /// `configure` runs synchronously and may itself nest further
    /// clauses, directives, and locations to arbitrary depth.
    pub fn clause(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut Clause),
    ) -> &mut Self {
        let mut child = Clause::new(name, self.depth + 1);
        configure(&mut child);
        self.entries.push(Entry::Clause(child));
        self
    }

    /// Appends a nested `location <path>` block, populated by
    /// `configure` before it becomes visible to rendering. Chainable.
    pub fn location(
        &mut self,
        path: impl Into<String>,
        configure: impl FnOnce(&mut Location),
    ) -> &mut Self {
        let mut child = Location::new(path, self.depth + 1);
        configure(&mut child);
        self.entries.push(Entry::Location(child));
        self
    }
}

/// A path-scoped block: `location <path> { ... }`.
///
/// Behaves like a [`Clause`] except that it offers no way to nest
/// another location directly inside it; nginx rejects such configs.
/// Ordinary clauses created inside a location are unrestricted.
///
/// ```compile_fail
/// use nginxsmith_core::document;
///
/// let mut conf = document();
/// conf.location("/", |loc| {
///     loc.location("/nested", |_| {}); // no such method
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    path: String,
    #[serde(flatten)]
    inner: Clause,
}

impl Location {
    pub(crate) fn new(path: impl Into<String>, depth: usize) -> Self {
        let path = path.into();
        let inner = Clause::new(format!("location {path}"), depth);
        Self { path, inner }
    }

    /// Pathname of the location.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Rendered block name, `location <path>`.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Nesting depth of the location.
    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    /// Child entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        self.inner.entries()
    }

    pub(crate) fn body(&self) -> &Clause {
        &self.inner
    }

    /// Appends a `name value;` directive. Chainable.
    pub fn directive(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.inner.directive(name, value);
        self
    }

    /// Appends a nested clause. Chainable.
    pub fn clause(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut Clause),
    ) -> &mut Self {
        self.inner.clause(name, configure);
        self
    }
}

/// The root of a configuration document.
///
/// A depth-0 [`Clause`] with an optional output filename attached as
/// metadata. The filename is never consulted while rendering and the
/// core performs no file I/O with it; persisting the rendered text is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    filename: Option<String>,
    #[serde(flatten)]
    root: Clause,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            filename: None,
            // nginx calls the top-level context "main"
            root: Clause::new("main", 0),
        }
    }

    /// Create an empty document carrying an output filename hint.
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            root: Clause::new("main", 0),
        }
    }

    /// Output filename hint, if any.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Top-level entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        self.root.entries()
    }

    pub(crate) fn root(&self) -> &Clause {
        &self.root
    }

    /// Appends a top-level `name value;` directive. Chainable.
    pub fn directive(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.root.directive(name, value);
        self
    }

    /// Appends a top-level clause. Chainable.
    pub fn clause(
        &mut self,
        name: impl Into<String>,
        configure: impl FnOnce(&mut Clause),
    ) -> &mut Self {
        self.root.clause(name, configure);
        self
    }

    /// Appends a top-level `location <path>` block. Chainable.
    pub fn location(
        &mut self,
        path: impl Into<String>,
        configure: impl FnOnce(&mut Location),
    ) -> &mut Self {
        self.root.location(path, configure);
        self
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
