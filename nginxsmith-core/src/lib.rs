//! Nginxsmith configuration builder
//!
//! This crate builds `nginx.conf`-style documents in memory through a
//! fluent API and renders them to text deterministically. It is a
//! one-way builder: there is no parser and no validation of directive
//! names or values against the nginx grammar.
//!
//! # Example
//!
//! ```rust
//! use nginxsmith_core::document;
//!
//! let mut conf = document();
//! conf.directive("worker_processes", 4)
//!     .clause("events", |events| {
//!         events.directive("worker_connections", 768);
//!     })
//!     .clause("http", |http| {
//!         http.clause("server", |server| {
//!             server
//!                 .directive("listen", 80)
//!                 .location("/", |loc| {
//!                     loc.directive("index", "index.html");
//!                 });
//!         });
//!     });
//!
//! let text = conf.to_text();
//! assert!(text.contains("  worker_connections 768;"));
//! ```

pub mod adapter;
pub mod ast;
pub mod error;
mod render;

pub use ast::{Clause, Directive, Document, Entry, Location, Value};
pub use error::{Error, Result};

/// Create a new, empty configuration document.
pub fn document() -> Document {
    Document::new()
}
