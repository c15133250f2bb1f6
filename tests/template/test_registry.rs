// Custom handlers registered next to the built-ins

use kewl::core::config::Config;
use kewl::core::error::Result;
use kewl::template::{Context, Engine, FilterHandler, Registry};
use serde_json::{json, Value};
use std::sync::Arc;

struct UpperFilter;

impl FilterHandler for UpperFilter {
    fn name(&self) -> &str {
        "upper"
    }

    fn requires_arg(&self) -> bool {
        false
    }

    fn apply(&self, value: &Value, _arg: Option<&Value>, _config: &Config) -> Result<Value> {
        Ok(Value::String(
            value.as_str().unwrap_or_default().to_uppercase(),
        ))
    }
}

#[test]
fn test_custom_filter() {
    let mut registry = Registry::builtin();
    registry.register_filter(Arc::new(UpperFilter));
    let engine = Engine::with_registry(registry, Config::default());

    let mut ctx = Context::from_value(json!({"body": "a fox"})).unwrap();
    let out = engine
        .render_str(r#"{{ body|upper|highlight:"fox" }}"#, &mut ctx)
        .unwrap();
    assert_eq!(out, r#"A <span class="match">FOX</span>"#);
}

#[test]
fn test_empty_registry_knows_nothing() {
    let engine = Engine::with_registry(Registry::new(), Config::default());
    assert!(engine.compile("{% hits 'a' %}a{% endhits %}").is_err());
    assert!(engine.compile("plain {{ text }}").is_ok());
}
