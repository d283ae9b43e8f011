// crates/core/src/render.rs
use crate::classify::ClassifiedValue;
use std::fmt;

/// Render a float in plain decimal form.
///
/// Whole numbers keep a `.0` suffix so the output line classifies as a float
/// again. `Display` for `f64` never uses exponent notation.
#[must_use]
pub fn render_float(value: f64) -> String {
    let mut out = value.to_string();
    if value.is_finite() && !out.contains('.') {
        out.push_str(".0");
    }
    out
}

impl fmt::Display for ClassifiedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&render_float(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}
