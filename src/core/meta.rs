//! Open Graph and Twitter card meta tags.

/// Namespace of Twitter card properties
pub const TWITTER: &str = "twitter";

/// Namespace of Open Graph properties
pub const OPEN_GRAPH: &str = "og";

/// `<meta property="{namespace}:{key}" content="{content}" />`
///
/// Namespace, key and content are all attribute-escaped (`&`, `"`,
/// `<`, `>`), not just the content, so a key taken from user data
/// cannot break out of `property` either. Plain keys such as `title`
/// or `image:width` come through unchanged.
pub fn meta_head(namespace: &str, key: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}:{}" content="{}" />"#,
        escape_attr(namespace),
        escape_attr(key),
        escape_attr(content)
    )
}

pub fn meta_twitter(key: &str, content: &str) -> String {
    meta_head(TWITTER, key, content)
}

pub fn meta_open_graph(key: &str, content: &str) -> String {
    meta_head(OPEN_GRAPH, key, content)
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
