use serde_json::{Map, Value, json};

/// JSON-value-backed configuration with dotted-path accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct KujiConfig(Value);

impl Default for KujiConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl KujiConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.get(dotted_path)?.as_bool()
    }

    pub fn get_i64(&self, dotted_path: &str) -> Option<i64> {
        self.get(dotted_path)?.as_i64()
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        let v = self.get(dotted_path)?;
        v.as_f64()
            .or_else(|| v.as_i64().map(|n| n as f64))
            .or_else(|| v.as_u64().map(|n| n as f64))
    }

    fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    /// Sets a value at a dotted path, creating intermediate objects as needed.
    /// A non-object root (possible via `from_value`) is left untouched.
    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        let Value::Object(root) = &mut self.0 else {
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
}

/// Objects merge key by key, recursively; anything else is replaced wholesale.
fn deep_merge_value(base: &mut Value, incoming: &Value) {
    if let (Value::Object(base_map), Value::Object(in_map)) = (&mut *base, incoming) {
        for (key, in_value) in in_map {
            match base_map.get_mut(key) {
                Some(slot) => deep_merge_value(slot, in_value),
                None => {
                    base_map.insert(key.clone(), in_value.clone());
                }
            }
        }
    } else {
        *base = incoming.clone();
    }
}

/// Site defaults: the built-in chart geometry.
pub fn default_site_config() -> KujiConfig {
    KujiConfig::from_value(json!({
        "seating": {
            "canvasWidth": 1000.0,
            "canvasHeight": 900.0,
            "centerYOffset": 50.0,
            "radius": 270.0,
            "innerRadius": 250.0,
            "outerRadius": 290.0,
            "seatWidth": 28.0,
            "seatHeight": 28.0,
            "nameWidth": 80.0,
            "nameHeight": 26.0,
            "perCharWidth": 11.0,
            "namePadding": 10.0,
            "boardWidth": 200.0,
            "boardHeight": 40.0,
            "boardGap": 100.0,
            "boardLabel": "Board",
            "groupSize": 6,
            "resultColumns": 3
        }
    }))
}
