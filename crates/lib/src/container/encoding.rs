//! JSON and serde encoding for containers.
//!
//! A positional container encodes as a JSON array and anything else as an
//! object whose integer keys are written as strings. Encoding follows insertion
//! order, so the output is deterministic for a given sequence of operations.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
};

use super::{Container, ContainerError, Key, Value};

impl Container {
    /// Converts to a plain `serde_json::Value`
    pub fn to_json_value(&self) -> serde_json::Value {
        if self.is_positional() {
            serde_json::Value::Array(self.values_iter().map(Value::to_json_value).collect())
        } else {
            serde_json::Value::Object(
                self.iter()
                    .map(|(key, value)| (key.to_string(), value.to_json_value()))
                    .collect(),
            )
        }
    }

    /// Converts to a compact JSON string.
    ///
    /// ```
    /// # use dotarray::Container;
    /// let arr = Container::from([("lorem", 1), ("Ipsum", 2)]);
    /// assert_eq!(arr.to_json_string(), r#"{"lorem":1,"Ipsum":2}"#);
    /// ```
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Builds a container from the fields of any serializable value.
    ///
    /// Every field serde serializes is included, whatever its Rust visibility.
    /// Returns `None` unless the value serializes to a JSON object.
    ///
    /// ```
    /// # use dotarray::Container;
    /// #[derive(serde::Serialize)]
    /// struct Note {
    ///     title: String,
    ///     pinned: bool,
    /// }
    ///
    /// let note = Note { title: "todo".into(), pinned: true };
    /// let arr = Container::from_object(&note).unwrap();
    /// assert_eq!(arr.to_json_string(), r#"{"title":"todo","pinned":true}"#);
    ///
    /// assert!(Container::from_object(&vec![1, 2, 3]).is_none());
    /// ```
    pub fn from_object<T: Serialize + ?Sized>(object: &T) -> Option<Container> {
        match serde_json::to_value(object) {
            Ok(serde_json::Value::Object(map)) => Some(map.into_iter().collect()),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = %err, "object could not be reflected into a container");
                None
            }
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_value())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::Array(Container::list(items)),
            serde_json::Value::Object(map) => Value::Array(map.into_iter().collect()),
        }
    }
}

/// Seeds a container from a JSON array or object.
///
/// ```
/// # use dotarray::Container;
/// let arr = Container::try_from(serde_json::json!({"a": [1, 2], "b": {"c": null}}))?;
/// assert_eq!(arr.get("a.1")?.unwrap().as_int(), Some(2));
/// # Ok::<(), dotarray::Error>(())
/// ```
impl TryFrom<serde_json::Value> for Container {
    type Error = ContainerError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match Value::from(value) {
            Value::Array(container) => Ok(container),
            other => Err(ContainerError::invalid_argument(
                "Container::try_from",
                format!("expected a JSON array or object, found {}", other.type_name()),
            )),
        }
    }
}

impl Serialize for Container {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_positional() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values_iter() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Array(container) => container.serialize(serializer),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null, a boolean, a number, a string, an array or a map")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(match i64::try_from(v) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(v as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::Array(Container::list(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut container = Container::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            container.entries.insert(Key::from(key), value);
        }
        Ok(Value::Array(container))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Container {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(container) => Ok(container),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.type_name()),
                &"an array or a map",
            )),
        }
    }
}
