// crates/shared-kernel/src/value_objects/key.rs
use std::{
    borrow::{Borrow, Cow},
    fmt,
    ops::Deref,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Key text used for absent values (`None`, missing fields).
pub const UNDEFINED_KEY: &str = "undefined";

/// Canonical text form of a grouping key.
///
/// Keys are compared by text only, so values that render identically land in
/// the same bucket: `1`, `1.0` and `"1"` all become `"1"`. Reducers that need
/// the typed value back use [`GroupKey::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn undefined() -> Self {
        Self(UNDEFINED_KEY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_undefined(&self) -> bool {
        self.0 == UNDEFINED_KEY
    }

    /// Returns the key as an array index when its text is the canonical
    /// decimal form of an integer in `0..u32::MAX`.
    pub fn as_array_index(&self) -> Option<u32> {
        let n: u32 = self.0.parse().ok()?;
        (n != u32::MAX && n.to_string() == self.0).then_some(n)
    }

    /// Parses the key text back into a typed value.
    ///
    /// # Errors
    ///
    /// Returns the target type's parse error when the text does not parse.
    pub fn parse<F: FromStr>(&self) -> Result<F, F::Err> {
        self.0.parse()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for GroupKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for GroupKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GroupKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for GroupKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for GroupKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<GroupKey> for String {
    fn from(key: GroupKey) -> Self {
        key.0
    }
}

impl From<&GroupKey> for GroupKey {
    fn from(key: &GroupKey) -> Self {
        key.clone()
    }
}

impl From<String> for GroupKey {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&String> for GroupKey {
    fn from(text: &String) -> Self {
        Self(text.clone())
    }
}

impl From<&str> for GroupKey {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<Cow<'_, str>> for GroupKey {
    fn from(text: Cow<'_, str>) -> Self {
        Self(text.into_owned())
    }
}

impl From<char> for GroupKey {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl From<bool> for GroupKey {
    fn from(b: bool) -> Self {
        Self(b.to_string())
    }
}

macro_rules! integer_keys {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for GroupKey {
                fn from(n: $ty) -> Self {
                    Self(n.to_string())
                }
            }

            impl From<&$ty> for GroupKey {
                fn from(n: &$ty) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

integer_keys!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for GroupKey {
    fn from(n: f64) -> Self {
        Self(float_text(n))
    }
}

impl From<f32> for GroupKey {
    fn from(n: f32) -> Self {
        // f32 keeps its own shortest form; widening first would print 0.1 as 0.10000000149011612
        let text = if n.is_finite() && n != 0.0 { n.to_string() } else { float_text(f64::from(n)) };
        Self(text)
    }
}

impl<K: Into<GroupKey>> From<Option<K>> for GroupKey {
    fn from(value: Option<K>) -> Self {
        value.map_or_else(Self::undefined, Into::into)
    }
}

impl From<&Value> for GroupKey {
    fn from(value: &Value) -> Self {
        Self(value_text(value))
    }
}

impl From<Value> for GroupKey {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self(s),
            other => Self(value_text(&other)),
        }
    }
}

/// Renders a float the way a dynamic key store would: integral values lose
/// their fraction and negative zero collapses to `0`.
fn float_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(|| n.to_string(), float_text)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        // nulls inside arrays render as empty slots
        Value::Array(items) => items
            .iter()
            .map(|item| if item.is_null() { String::new() } else { value_text(item) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
