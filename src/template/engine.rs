//! Minimal template engine driving the registered tags and filters.
//!
//! Supports `{{ var|filter:arg }}`, `{% tag ... %}`, block tags closed
//! by their `end` tag, and `{# comments #}`. Output is not escaped: the
//! tags emit markup on purpose.

use super::args::{to_text, Arg};
use super::context::Context;
use super::filters::FilterHandler;
use super::lexer::{split_contents, split_unquoted, tokenize, Token};
use super::registry::Registry;
use super::tags::{TagCall, TagHandler};
use crate::core::config::Config;
use crate::core::error::{KewlError, Result};
use serde_json::Value;
use std::sync::Arc;
use std::vec::IntoIter;

enum Node {
    Text(String),
    Variable {
        arg: Arg,
        filters: Vec<FilterCall>,
    },
    Tag {
        handler: Arc<dyn TagHandler>,
        call: TagCall,
        body: Vec<Node>,
    },
}

struct FilterCall {
    handler: Arc<dyn FilterHandler>,
    arg: Option<Arg>,
}

/// A compiled template, reusable across renders
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Compiles and renders templates against a registry and config
#[derive(Clone)]
pub struct Engine {
    registry: Registry,
    config: Config,
}

impl Engine {
    /// Engine with the built-in tags and filters
    pub fn new(config: Config) -> Self {
        Self::with_registry(Registry::builtin(), config)
    }

    pub fn with_registry(registry: Registry, config: Config) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse template source, validating every tag and filter
    pub fn compile(&self, source: &str) -> Result<Template> {
        let mut tokens = tokenize(source).into_iter();
        let nodes = self.parse_nodes(&mut tokens, None)?;
        tracing::debug!(nodes = nodes.len(), "Compiled template");
        Ok(Template { nodes })
    }

    /// Render a compiled template. Tags using `as name` write into `ctx`.
    pub fn render(&self, template: &Template, ctx: &mut Context) -> Result<String> {
        let mut out = String::new();
        self.render_nodes(&template.nodes, ctx, &mut out)?;
        Ok(out)
    }

    /// Compile and render in one step
    pub fn render_str(&self, source: &str, ctx: &mut Context) -> Result<String> {
        let template = self.compile(source)?;
        self.render(&template, ctx)
    }

    fn parse_nodes(&self, tokens: &mut IntoIter<Token>, end: Option<(&str, &str)>) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        while let Some(token) = tokens.next() {
            match token {
                Token::Text(text) => nodes.push(Node::Text(text)),
                Token::Variable(expr) => nodes.push(self.parse_variable(&expr)?),
                Token::Block(contents) => {
                    let bits = split_contents(&contents)?;
                    let Some(name) = bits.first() else {
                        return Err(KewlError::TemplateSyntax("Empty block tag".to_string()));
                    };

                    if let Some((_, end_tag)) = end {
                        if name == end_tag {
                            return Ok(nodes);
                        }
                    }

                    let handler = self.registry.tag(name).cloned().ok_or_else(|| {
                        KewlError::TemplateSyntax(format!("Invalid block tag: '{name}'"))
                    })?;
                    let call = handler.parse(&bits)?;

                    let body = match handler.end_tag() {
                        Some(end_tag) => {
                            self.parse_nodes(tokens, Some((handler.name(), end_tag.as_str())))?
                        }
                        None => Vec::new(),
                    };

                    nodes.push(Node::Tag { handler, call, body });
                }
            }
        }

        match end {
            Some((tag, end_tag)) => Err(KewlError::TemplateSyntax(format!(
                "Unclosed tag '{tag}'. Looking for '{end_tag}'"
            ))),
            None => Ok(nodes),
        }
    }

    fn parse_variable(&self, expr: &str) -> Result<Node> {
        let mut parts = split_unquoted(expr, '|').into_iter();
        let arg = Arg::parse(parts.next().unwrap_or_default())?;

        let mut filters = Vec::new();
        for part in parts {
            let pieces = split_unquoted(part, ':');
            let (name, filter_arg) = match pieces.as_slice() {
                [name] => (name.trim(), None),
                [name, arg] => (name.trim(), Some(Arg::parse(arg)?)),
                _ => {
                    return Err(KewlError::TemplateSyntax(format!(
                        "Could not parse filter: '{part}'"
                    )))
                }
            };

            let handler = self.registry.filter(name).cloned().ok_or_else(|| {
                KewlError::TemplateSyntax(format!("Invalid filter: '{name}'"))
            })?;
            if handler.requires_arg() && filter_arg.is_none() {
                return Err(KewlError::TemplateSyntax(format!(
                    "'{name}' filter requires an argument"
                )));
            }

            filters.push(FilterCall {
                handler,
                arg: filter_arg,
            });
        }

        Ok(Node::Variable { arg, filters })
    }

    fn render_nodes(&self, nodes: &[Node], ctx: &mut Context, out: &mut String) -> Result<()> {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Variable { arg, filters } => {
                    let mut value = arg.resolve(ctx);
                    for filter in filters {
                        let filter_arg = filter.arg.as_ref().map(|a| a.resolve(ctx));
                        value = filter.handler.apply(&value, filter_arg.as_ref(), &self.config)?;
                    }
                    out.push_str(&to_text(&value));
                }
                Node::Tag { handler, call, body } => {
                    let mut inner = String::new();
                    self.render_nodes(body, ctx, &mut inner)?;

                    let args: Vec<Value> = call.args.iter().map(|a| a.resolve(ctx)).collect();
                    let rendered = handler.render(&args, &inner, &self.config)?;

                    match &call.target {
                        Some(target) => ctx.set(target.as_str(), rendered.value),
                        None => out.push_str(&rendered.display),
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
