use serde::{ser::SerializeMap as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{Map, Value, MAX_SAFE_INTEGER};

/// An error that occurs while converting a [`Value`] from or to JSON text.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    /// The text is not valid JSON, or the value could not be written.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Value {
    /// Parses JSON text, keeping integer literals exact.
    ///
    /// Integer literals become [`Value::Integer`]; literals that exceed the
    /// `i128` range, or that carry a fraction or exponent, become
    /// [`Value::Number`].
    pub fn from_json_str(text: &str) -> Result<Self, ValueError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from(json))
    }

    /// Writes the value as compact JSON text.
    pub fn to_json_string(&self) -> Result<String, ValueError> {
        serde_json::to_string(self).map_err(ValueError::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Bool(value),
            serde_json::Value::Number(number) => number_from_json(&number),
            serde_json::Value::String(value) => Self::String(value),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect::<Map>(),
            ),
        }
    }
}

// With `arbitrary_precision` the number keeps its literal text, so an integer
// wider than 64 bits survives parsing.
fn number_from_json(number: &serde_json::Number) -> Value {
    let literal = number.to_string();
    if !literal.contains(['.', 'e', 'E']) {
        if let Ok(integer) = literal.parse::<i128>() {
            return Value::Integer(integer);
        }
    }

    number.as_f64().map_or(Value::Null, Value::Number)
}

impl Serialize for Value {
    fn serialize<SerializerT>(&self, serializer: SerializerT) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
    {
        match self {
            Self::Absent | Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Integer(value) => serializer.serialize_i128(*value),
            Self::Number(value) => serialize_number(*value, serializer),
            Self::String(value) => serializer.serialize_str(value),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Object(entries) => {
                let present = entries.iter().filter(|(_, value)| !value.is_absent());

                let mut map = serializer.serialize_map(Some(present.clone().count()))?;
                for (key, value) in present {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn serialize_number<SerializerT: Serializer>(
    value: f64,
    serializer: SerializerT,
) -> Result<SerializerT::Ok, SerializerT::Error> {
    if !value.is_finite() {
        serializer.serialize_unit()
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER as f64 {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<DeserializerT>(deserializer: DeserializerT) -> Result<Self, DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
