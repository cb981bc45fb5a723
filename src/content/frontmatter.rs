//! Per-document frontmatter record.
//!
//! Values keep the shape they had in the source (strings, numbers, lists...).
//! Field presence follows one policy, see [`Frontmatter::is_present`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered mapping of frontmatter field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter(Map<String, Value>);

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// String value of `key`, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_owned(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// A field is present unless it is missing, null, `""`, `0` or `false`.
    pub fn is_present(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(is_truthy)
    }

    /// Set `key` to `value` when the field is not present.
    pub fn set_if_absent(&mut self, key: &str, value: impl Into<Value>) {
        if !self.is_present(key) {
            self.set(key, value);
        }
    }
}

#[cfg(test)]
impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Frontmatter {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence_policy() {
        let mut fm = Frontmatter::new();
        assert!(!fm.is_present("pic"));

        for absent in [json!(null), json!(""), json!(0), json!(0.0), json!(false)] {
            fm.set("pic", absent.clone());
            assert!(!fm.is_present("pic"), "{absent} should count as absent");
        }

        for present in [json!("a.png"), json!(1), json!(true), json!([]), json!({})] {
            fm.set("pic", present.clone());
            assert!(fm.is_present("pic"), "{present} should count as present");
        }
    }

    #[test]
    fn test_set_if_absent() {
        let mut fm = Frontmatter::new();
        fm.set("desc", "");
        fm.set_if_absent("desc", "fallback");
        assert_eq!(fm.get_str("desc"), Some("fallback"));

        fm.set_if_absent("desc", "other");
        assert_eq!(fm.get_str("desc"), Some("fallback"));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut fm = Frontmatter::new();
        fm.set("title", "键盘");
        fm.set("layout", "@layouts/post.astro");

        assert_eq!(
            serde_json::to_string(&fm).unwrap(),
            r#"{"title":"键盘","layout":"@layouts/post.astro"}"#
        );
    }
}
