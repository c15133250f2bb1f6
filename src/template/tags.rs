//! Template tag handlers.
//!
//! Block tags wrap the text they operate on:
//!
//! ```text
//! {% searchexcerpt search_terms [context_words] [ignore_case] [word_boundary] [as name] %}
//! ...text...
//! {% endsearchexcerpt %}
//! ```
//!
//! With `as name` the result value is stored in the context and the
//! tag renders nothing.

use super::args::{to_count, to_flag, to_phrases, to_text, Arg};
use crate::core::config::Config;
use crate::core::error::{KewlError, Result};
use crate::core::meta::{meta_head, OPEN_GRAPH, TWITTER};
use crate::core::search::{highlight, hits, searchexcerpt, ExcerptOptions, HighlightOptions, MatchOptions};
use serde_json::Value;

/// A parsed tag invocation
#[derive(Debug, Clone, PartialEq)]
pub struct TagCall {
    pub name: String,
    pub args: Vec<Arg>,
    /// Context variable to store the result in (`as name`)
    pub target: Option<String>,
}

/// What a tag produced: text to emit and the value stored by `as name`
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub display: String,
    pub value: Value,
}

/// Trait implemented by every template tag
pub trait TagHandler: Send + Sync {
    /// Tag name (e.g., "searchexcerpt")
    fn name(&self) -> &str;

    /// Usage line quoted in syntax errors
    fn usage(&self) -> &str;

    /// Closing tag for block tags; `None` for simple tags
    fn end_tag(&self) -> Option<String> {
        None
    }

    /// Validate the tag's bits (tag name first) at parse time
    fn parse(&self, bits: &[String]) -> Result<TagCall>;

    /// Produce output from resolved arguments and the rendered body
    fn render(&self, args: &[Value], body: &str, config: &Config) -> Result<Rendered>;
}

/// Shared argument-count check for function-like tags.
///
/// `min_args..=max_args` positional arguments, optionally followed by
/// `as name`.
fn parse_function_call(
    handler: &dyn TagHandler,
    bits: &[String],
    min_args: usize,
    max_args: usize,
) -> Result<TagCall> {
    let usage_error = || KewlError::usage(handler.name(), handler.usage());

    let len = bits.len();
    let (args, target) = if len >= min_args + 3 && bits[len - 2] == "as" {
        (&bits[1..len - 2], Some(bits[len - 1].clone()))
    } else {
        (bits.get(1..).unwrap_or_default(), None)
    };

    if args.len() < min_args || args.len() > max_args {
        return Err(usage_error());
    }

    Ok(TagCall {
        name: handler.name().to_string(),
        args: args.iter().map(|bit| Arg::parse(bit)).collect::<Result<_>>()?,
        target,
    })
}

fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&Value::Null)
}

fn match_options(args: &[Value], first: usize, config: &Config) -> Result<MatchOptions> {
    let mut options = MatchOptions::from(&config.search);
    if let Some(flag) = to_flag(arg(args, first), "ignore_case")? {
        options.ignore_case = flag;
    }
    if let Some(flag) = to_flag(arg(args, first + 1), "word_boundary")? {
        options.word_boundary = flag;
    }
    Ok(options)
}

/// `{% searchexcerpt %}`
pub struct SearchExcerptTag;

impl TagHandler for SearchExcerptTag {
    fn name(&self) -> &str {
        "searchexcerpt"
    }

    fn usage(&self) -> &str {
        "{% searchexcerpt search_terms [context_words] [ignore_case] [word_boundary] [as name] %}...{% endsearchexcerpt %}"
    }

    fn end_tag(&self) -> Option<String> {
        Some("endsearchexcerpt".to_string())
    }

    fn parse(&self, bits: &[String]) -> Result<TagCall> {
        parse_function_call(self, bits, 1, 4)
    }

    fn render(&self, args: &[Value], body: &str, config: &Config) -> Result<Rendered> {
        let phrases = to_phrases(arg(args, 0))?;
        let mut options = ExcerptOptions::from(&config.search);
        if let Some(words) = to_count(arg(args, 1), "context_words")? {
            options.context_words = words;
        }
        options.matching = match_options(args, 2, config)?;

        let result = searchexcerpt(body, &phrases, &options)?;
        Ok(Rendered {
            display: result.excerpt.clone(),
            value: serde_json::to_value(&result)?,
        })
    }
}

/// `{% highlight %}`
pub struct HighlightTag;

impl TagHandler for HighlightTag {
    fn name(&self) -> &str {
        "highlight"
    }

    fn usage(&self) -> &str {
        "{% highlight search_terms [ignore_case] [word_boundary] [class_name] [as name] %}...{% endhighlight %}"
    }

    fn end_tag(&self) -> Option<String> {
        Some("endhighlight".to_string())
    }

    fn parse(&self, bits: &[String]) -> Result<TagCall> {
        parse_function_call(self, bits, 1, 4)
    }

    fn render(&self, args: &[Value], body: &str, config: &Config) -> Result<Rendered> {
        let phrases = to_phrases(arg(args, 0))?;
        let mut options = HighlightOptions::from(&config.search);
        options.matching = match_options(args, 1, config)?;
        match arg(args, 3) {
            Value::Null => {}
            class => options.class_name = to_text(class),
        }

        let result = highlight(body, &phrases, &options)?;
        Ok(Rendered {
            display: result.highlighted.clone(),
            value: serde_json::to_value(&result)?,
        })
    }
}

/// `{% hits %}`
pub struct HitsTag;

impl TagHandler for HitsTag {
    fn name(&self) -> &str {
        "hits"
    }

    fn usage(&self) -> &str {
        "{% hits search_terms [ignore_case] [word_boundary] [as name] %}...{% endhits %}"
    }

    fn end_tag(&self) -> Option<String> {
        Some("endhits".to_string())
    }

    fn parse(&self, bits: &[String]) -> Result<TagCall> {
        parse_function_call(self, bits, 1, 3)
    }

    fn render(&self, args: &[Value], body: &str, config: &Config) -> Result<Rendered> {
        let phrases = to_phrases(arg(args, 0))?;
        let options = match_options(args, 1, config)?;

        let count = hits(body, &phrases, &options)?;
        Ok(Rendered {
            display: count.to_string(),
            value: Value::from(count),
        })
    }
}

/// `{% meta_twitter key content %}` / `{% meta_open_graph key content %}`
pub struct MetaTag {
    name: &'static str,
    namespace: &'static str,
    usage: &'static str,
}

impl MetaTag {
    pub fn twitter() -> Self {
        Self {
            name: "meta_twitter",
            namespace: TWITTER,
            usage: "{% meta_twitter key content [as name] %}",
        }
    }

    pub fn open_graph() -> Self {
        Self {
            name: "meta_open_graph",
            namespace: OPEN_GRAPH,
            usage: "{% meta_open_graph key content [as name] %}",
        }
    }
}

impl TagHandler for MetaTag {
    fn name(&self) -> &str {
        self.name
    }

    fn usage(&self) -> &str {
        self.usage
    }

    fn parse(&self, bits: &[String]) -> Result<TagCall> {
        parse_function_call(self, bits, 2, 2)
    }

    fn render(&self, args: &[Value], _body: &str, _config: &Config) -> Result<Rendered> {
        let markup = meta_head(
            self.namespace,
            &to_text(arg(args, 0)),
            &to_text(arg(args, 1)),
        );
        Ok(Rendered {
            display: markup.clone(),
            value: Value::String(markup),
        })
    }
}
