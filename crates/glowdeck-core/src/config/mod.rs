use crate::error::{Error, Result};
use crate::numeric::{DEFAULT_NORMALIZE_MAX, DEFAULT_NORMALIZE_MIN};
use crate::visuals::DEFAULT_GLOW_MAX;
use serde_json::{Map, Value};

pub const GLOW_MAX_KEY: &str = "glow.max";
pub const NORMALIZE_MIN_KEY: &str = "normalize.min";
pub const NORMALIZE_MAX_KEY: &str = "normalize.max";
pub const CLUSTER_PADDING_KEY: &str = "cluster.padding";

/// Site-level defaults for the helpers, as a JSON object addressed by dotted paths.
///
/// Missing keys fall back to the built-in defaults; a config never changes the YouTube host
/// allow-list.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig(Value);

impl Default for DeckConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl DeckConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| Error::InvalidConfigJson {
            message: e.to_string(),
        })?;
        if !value.is_object() {
            return Err(Error::InvalidConfigJson {
                message: "top-level value must be an object".to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        self.get(dotted_path)?.as_f64().filter(|v| v.is_finite())
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        // A config built with `from_value` may hold a non-object; replace it rather than panic.
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }

        let Value::Object(ref mut root) = self.0 else {
            return;
        };
        let mut cur: &mut Map<String, Value> = root;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(seg) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(seg.to_string(), value);
                return;
            }
            let slot = cur.entry(seg).or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Some(next) = slot.as_object_mut() else {
                return;
            };
            cur = next;
        }
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }

    /// Upper bound for glow and pulse tones.
    pub fn glow_max(&self) -> f64 {
        self.get_f64(GLOW_MAX_KEY).unwrap_or(DEFAULT_GLOW_MAX)
    }

    /// `(min, max)` for meter normalization. Not validated here; `normalize` reports bad ranges.
    pub fn normalize_range(&self) -> (f64, f64) {
        (
            self.get_f64(NORMALIZE_MIN_KEY)
                .unwrap_or(DEFAULT_NORMALIZE_MIN),
            self.get_f64(NORMALIZE_MAX_KEY)
                .unwrap_or(DEFAULT_NORMALIZE_MAX),
        )
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_config_uses_built_in_defaults() {
        let cfg = DeckConfig::default();
        assert_eq!(cfg.glow_max(), 100.0);
        assert_eq!(cfg.normalize_range(), (0.0, 100.0));
        assert_eq!(cfg.get_f64(CLUSTER_PADDING_KEY), None);
    }

    #[test]
    fn dotted_paths_read_nested_values() {
        let cfg = DeckConfig::from_value(json!({
            "glow": { "max": 80 },
            "cluster": { "padding": 12.5, "label": "core" }
        }));
        assert_eq!(cfg.glow_max(), 80.0);
        assert_eq!(cfg.get_f64("cluster.padding"), Some(12.5));
        assert_eq!(cfg.get_str("cluster.label"), Some("core"));
        assert_eq!(cfg.get_str("cluster.padding"), None);
        assert_eq!(cfg.get_f64("cluster.missing"), None);
    }

    #[test]
    fn set_value_creates_intermediate_objects() {
        let mut cfg = DeckConfig::from_value(json!({ "normalize": 3 }));
        cfg.set_value("normalize.min", json!(-20));
        cfg.set_value("normalize.max", json!(-10));
        assert_eq!(cfg.normalize_range(), (-20.0, -10.0));

        let mut odd = DeckConfig::from_value(json!([1, 2]));
        odd.set_value("glow.max", json!(50));
        assert_eq!(odd.as_value(), &json!({ "glow": { "max": 50 } }));
    }

    #[test]
    fn deep_merge_overrides_leaves_and_keeps_siblings() {
        let mut cfg = DeckConfig::from_value(json!({ "glow": { "max": 80 }, "cluster": { "padding": 10 } }));
        cfg.deep_merge(&json!({ "glow": { "max": 120 }, "normalize": { "min": 5 } }));
        assert_eq!(
            cfg.as_value(),
            &json!({
                "glow": { "max": 120 },
                "cluster": { "padding": 10 },
                "normalize": { "min": 5 }
            })
        );
    }

    #[test]
    fn parses_json_text() {
        let cfg = DeckConfig::from_json_str(r#"{ "glow": { "max": 64 } }"#).unwrap();
        assert_eq!(cfg.glow_max(), 64.0);

        let err = DeckConfig::from_json_str("{ glow").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigJson { .. }));
        assert!(err.to_string().starts_with("Invalid config JSON: "));

        assert!(DeckConfig::from_json_str("[1]").is_err());
    }
}
