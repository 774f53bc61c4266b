use indexmap::IndexMap;

/// The largest integer magnitude that a host number (`f64`) represents
/// exactly, i.e. `2^53 - 1`.
pub const MAX_SAFE_INTEGER: i128 = (1 << 53) - 1;

/// Insertion-ordered map of a [`Value::Object`].
pub type Map = IndexMap<String, Value>;

/// A structural value as carried by JSON-RPC requests and responses.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// A missing value. Omitted from objects and written as `null` inside
    /// arrays when serialized.
    #[default]
    Absent,
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A wide integer that is not subject to host number precision limits.
    Integer(i128),
    /// A host number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// A keyed map.
    Object(Map),
}

impl Value {
    /// Whether the value is [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value is an array or an object.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Returns the boolean, if the value is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integral value of either a wide integer or a host number
    /// without a fractional part.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Number(value) => integral_number(*value),
            _ => None,
        }
    }

    /// Returns the string slice, if the value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the elements, if the value is an array.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries, if the value is an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the entries mutably, if the value is an object.
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up `key` if the value is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }
}

/// Returns `value` as an integer if it has no fractional part and fits.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn integral_number(value: f64) -> Option<i128> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i128::MAX as f64 {
        Some(value as i128)
    } else {
        None
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Object(value)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<IteratorT: IntoIterator<Item = Value>>(iter: IteratorT) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<KeyT: Into<String>> FromIterator<(KeyT, Value)> for Value {
    fn from_iter<IteratorT: IntoIterator<Item = (KeyT, Value)>>(iter: IteratorT) -> Self {
        Self::Object(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}
