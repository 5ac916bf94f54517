//! Text rendering for configuration trees
//!
//! Rendering walks a tree recursively: directives become single lines
//! indented at the owning clause's depth, block children are wrapped in
//! `name { ... }` with the braces indented at the parent's depth and
//! the body at the child's. A single blank line precedes a nested block
//! at the two outermost depths only, for readability.

use crate::ast::{Clause, Directive, Document, Entry, Location, Value};
use std::fmt;

/// One level of indentation.
const INDENT_UNIT: &str = "  ";

/// Leading whitespace for lines at nesting `depth`.
pub(crate) fn indentation(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for Directive {
    /// `<name> <value>;`, with no indentation of its own.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.name(), self.value())
    }
}

impl Clause {
    /// Renders the body of this clause: every entry in insertion
    /// order, joined with newlines.
    ///
    /// The output is the block *body* only. When this clause is itself
    /// a child, the enclosing clause wraps it in `name { ... }`.
    pub fn render(&self) -> String {
        let ws = indentation(self.depth());
        // Spacer separating the two outermost nesting levels.
        let spacer = if self.depth() <= 1 { "\n" } else { "" };
        let mut chunks = Vec::with_capacity(self.entries().len());
        for entry in self.entries() {
            match entry {
                Entry::Directive(directive) => chunks.push(format!("{ws}{directive}")),
                Entry::Clause(child) => chunks.push(format!(
                    "{spacer}{ws}{} {{\n{}\n{ws}}}",
                    child.name(),
                    child.render()
                )),
                Entry::Location(child) => chunks.push(format!(
                    "{spacer}{ws}{} {{\n{}\n{ws}}}",
                    child.name(),
                    child.render()
                )),
            }
        }
        chunks.join("\n")
    }
}

impl Location {
    /// Renders the body of this location, identically to a clause.
    pub fn render(&self) -> String {
        self.body().render()
    }
}

impl Document {
    /// Renders the whole document to configuration text.
    ///
    /// Re-rendering an unmodified document is idempotent.
    pub fn to_text(&self) -> String {
        tracing::debug!(entries = self.entries().len(), "rendering configuration document");
        self.root().render()
    }
}

#[cfg(test)]
mod tests {
    use crate::Document;
    use crate::ast::Directive;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_directive_display_has_no_indentation() {
        let directive = Directive::new("worker_connections", 768);
        assert_eq!(directive.to_string(), "worker_connections 768;");
    }

    #[test]
    fn test_directive_renders_to_one_line() {
        let mut conf = Document::new();
        conf.directive("worker_processes", "4");
        assert_eq!(conf.to_text(), "worker_processes 4;");
    }

    #[test]
    fn test_integer_value_renders_verbatim() {
        let mut conf = Document::new();
        conf.directive("keepalive_timeout", 65);
        assert_eq!(conf.to_text(), "keepalive_timeout 65;");
    }

    #[test]
    fn test_block_at_outer_depth_gets_spacer() {
        let mut conf = Document::new();
        conf.clause("events", |events| {
            events.directive("worker_connections", 768);
        });
        assert_eq!(conf.to_text(), "\nevents {\n  worker_connections 768;\n}");
    }

    #[test]
    fn test_no_spacer_below_depth_one() {
        let mut conf = Document::new();
        conf.clause("http", |http| {
            http.clause("server", |server| {
                server.clause("if", |nested| {
                    nested.directive("return", 404);
                });
            });
        });

        // The depth-1 `http` body still spaces its `server` child, but
        // the depth-2 `server` body must not space the `if` block.
        let expected =
            "\nhttp {\n\n  server {\n    if {\n      return 404;\n    }\n  }\n}";
        assert_eq!(conf.to_text(), expected);
    }

    #[test]
    fn test_directive_lines_indent_two_spaces_per_depth() {
        let mut conf = Document::new();
        conf.clause("http", |http| {
            http.clause("server", |server| {
                server.directive("listen", 80);
            });
        });

        let listen_line = conf
            .to_text()
            .lines()
            .find(|line| line.contains("listen"))
            .unwrap()
            .to_string();
        assert_eq!(listen_line, "    listen 80;");
    }

    #[test]
    fn test_insertion_order_is_render_order() {
        let mut conf = Document::new();
        conf.directive("user", "www-data")
            .directive("worker_processes", "auto")
            .directive("pid", "/run/nginx.pid");

        let expected = "user www-data;\nworker_processes auto;\npid /run/nginx.pid;";
        assert_eq!(conf.to_text(), expected);
    }

    #[test]
    fn test_empty_clause_renders_empty_body() {
        let mut conf = Document::new();
        conf.clause("events", |_| {});
        assert_eq!(conf.to_text(), "\nevents {\n\n}");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut conf = Document::new();
        conf.directive("user", "www-data").clause("events", |events| {
            events.directive("worker_connections", 768);
        });

        assert_eq!(conf.to_text(), conf.to_text());
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut conf = Document::new();
        conf.directive("proxy_set_header", "Connection 'upgrade'");
        assert_eq!(conf.to_text(), "proxy_set_header Connection 'upgrade';");
    }

    #[test]
    fn test_two_host_document_renders_exactly() {
        let mut conf = Document::new();
        conf.directive("user", "www-data")
            .directive("worker_processes", "4")
            .clause("events", |events| {
                events.directive("worker_connections", 768);
            })
            .clause("http", |http| {
                http.directive("sendfile", "on")
                    .clause("server", |server| {
                        server
                            .directive("listen", 80)
                            .directive("server_name", "example.com")
                            .location("/", |loc| {
                                loc.directive("index", "index.html");
                            });
                    })
                    .clause("server", |server| {
                        server
                            .directive("listen", 80)
                            .directive("server_name", "api.example.com")
                            .location("/", |loc| {
                                loc.directive("proxy_pass", "http://127.0.0.1:3000");
                            });
                    });
            });

        let expected = "\
user www-data;
worker_processes 4;

events {
  worker_connections 768;
}

http {
  sendfile on;

  server {
    listen 80;
    server_name example.com;
    location / {
      index index.html;
    }
  }

  server {
    listen 80;
    server_name api.example.com;
    location / {
      proxy_pass http://127.0.0.1:3000;
    }
  }
}";
        assert_eq!(conf.to_text(), expected);
    }
}
