//! Cell values stored in records.
//!
//! A [`Cell`] is a closed variant over everything a grid cell may hold. Only
//! [`Cell::Text`] and [`Cell::Number`] take part in filtering and match
//! highlighting; the remaining variants pass through the pipeline untouched
//! and are rendered by whatever consumes the view model.
//!
//! Numbers are converted to text the way a JavaScript runtime prints them
//! (`2` rather than `2.0`, `Infinity`, `NaN`), and numeric-looking strings are
//! recognized with the same grammar as JavaScript's `Number()` conversion, so
//! a column of `"10"`, `2` and `"1"` sorts as `1, 2, 10`.

use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

/// Reference to content the engine cannot inspect.
///
/// The tag is chosen by the caller (an element id, an icon name, a serialized
/// blob) and handed back unchanged through the view model so the rendering
/// layer can resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpaqueHandle(String);

impl OpaqueHandle {
    /// Wraps a caller-defined tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the caller-defined tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }
}

/// A single cell value.
///
/// # Examples
///
/// ```
/// use datagrid::Cell;
///
/// assert_eq!(Cell::from(2).to_string(), "2");
/// assert_eq!(Cell::from(1.5).to_string(), "1.5");
/// assert_eq!(Cell::from("Bob").match_text().as_deref(), Some("Bob"));
/// assert_eq!(Cell::from(true).match_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Cell {
    /// Plain text. Eligible for filtering and highlighting.
    Text(String),
    /// A number. Eligible for filtering and highlighting via its text form.
    Number(f64),
    /// A boolean flag. Never matches a filter; sorts as `"true"`/`"false"`.
    Bool(bool),
    /// No value (null or undefined in the source data).
    Empty,
    /// Content the engine does not interpret.
    Opaque(OpaqueHandle),
}

impl Cell {
    /// Returns the text a filter query is matched against.
    ///
    /// `None` for every variant that does not participate in matching.
    #[must_use]
    pub fn match_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(text) => Some(Cow::Borrowed(text.as_str())),
            Self::Number(value) => Some(Cow::Owned(format_number(*value))),
            Self::Bool(_) | Self::Empty | Self::Opaque(_) => None,
        }
    }

    /// Returns the string form used for textual sorting.
    ///
    /// Empty and opaque cells sort as the empty string.
    #[must_use]
    pub fn sort_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Number(value) => Cow::Owned(format_number(*value)),
            Self::Bool(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
            Self::Empty | Self::Opaque(_) => Cow::Borrowed(""),
        }
    }

    /// Coerces the cell to a number for numeric sorting.
    ///
    /// Text that does not parse as a number, empty cells and opaque cells
    /// coerce to `0`.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => parse_number(text).unwrap_or(0.0),
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Empty | Self::Opaque(_) => 0.0,
        }
    }

    /// Whether the cell holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sort_text())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Cell {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<OpaqueHandle> for Cell {
    fn from(value: OpaqueHandle) -> Self {
        Self::Opaque(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl From<serde_json::Value> for Cell {
    /// Maps JSON scalars onto their cell variants; arrays and objects become
    /// opaque cells tagged with their compact JSON text.
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Empty,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => number.as_f64().map_or(Self::Empty, Self::Number),
            Value::String(text) => Self::Text(text),
            other @ (Value::Array(_) | Value::Object(_)) => {
                Self::Opaque(OpaqueHandle::new(other.to_string()))
            }
        }
    }
}

/// Formats a number the way JavaScript's `String(number)` does.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, use exponent form with an
/// explicit sign on the exponent (`1e+21`, `1.5e-7`).
///
/// # Examples
///
/// ```
/// use datagrid::domain::cell::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if (1e-6..1e21).contains(&value.abs()) {
        format!("{value}")
    } else {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
            _ => text,
        }
    }
}

/// Parses text as a number using JavaScript `Number()` rules.
///
/// The text is trimmed first. Empty text is not a number. Accepted forms are
/// signed decimals with optional fraction and exponent, unsigned `0x`/`0o`/`0b`
/// integer literals, and a signed `Infinity`.
///
/// # Examples
///
/// ```
/// use datagrid::domain::cell::parse_number;
///
/// assert_eq!(parse_number(" 42 "), Some(42.0));
/// assert_eq!(parse_number("1e3"), Some(1000.0));
/// assert_eq!(parse_number("0x1F"), Some(31.0));
/// assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_number("12px"), None);
/// assert_eq!(parse_number("   "), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    let well_formed = unsigned.bytes().any(|b| b.is_ascii_digit())
        && unsigned
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));

    if well_formed {
        trimmed.parse::<f64>().ok()
    } else {
        None
    }
}

/// Parses `0x`, `0o` and `0b` literals.
///
/// Returns `None` when the text has no radix prefix, `Some(None)` when it has
/// one but the digits are invalid.
fn parse_radix_literal(text: &str) -> Option<Option<f64>> {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];

    let (digits, radix) = PREFIXES
        .iter()
        .find_map(|(prefix, radix)| text.strip_prefix(prefix).map(|digits| (digits, *radix)))?;

    if digits.is_empty() {
        return Some(None);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
    });

    Some(value)
}
