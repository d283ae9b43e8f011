// crates/core/src/classify.rs
use regex::Regex;
use std::sync::OnceLock;

/// 1 行を分類した結果。
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ClassifiedValue {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Integer(_) => Category::Integers,
            Self::Float(_) => Category::Floats,
            Self::Text(_) => Category::Strings,
        }
    }
}

/// Output bucket a value is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Integers,
    Floats,
    Strings,
}

impl Category {
    /// Flush order of the buckets.
    pub const ALL: [Self; 3] = [Self::Integers, Self::Floats, Self::Strings];

    /// Output file name without the user-supplied prefix.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Integers => "integers.txt",
            Self::Floats => "floats.txt",
            Self::Strings => "strings.txt",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Integers => "Integers",
            Self::Floats => "Floats",
            Self::Strings => "Strings",
        }
    }
}

fn integer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"))
}

// 指数表記は小数点が必須 (`1e10` は文字列扱い)
fn float_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:-?[0-9]*\.[0-9]+|-?[0-9]+\.[0-9]*[eE]-?[0-9]+)$")
            .expect("float pattern is valid")
    })
}

/// Classify a single line (without its terminator).
///
/// Rules are tried in the order integer, float, text. A line that matches a
/// numeric pattern but does not fit the target type (e.g. an integer beyond
/// the `i64` range) is kept as text.
#[must_use]
pub fn classify(line: &str) -> ClassifiedValue {
    if integer_re().is_match(line) {
        if let Ok(value) = line.parse::<i64>() {
            return ClassifiedValue::Integer(value);
        }
    } else if float_re().is_match(line)
        && let Ok(value) = line.parse::<f64>()
    {
        return ClassifiedValue::Float(value);
    }
    ClassifiedValue::Text(line.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ClassifiedValue {
        ClassifiedValue::Text(s.to_string())
    }

    #[test]
    fn test_integers() {
        assert_eq!(classify("42"), ClassifiedValue::Integer(42));
        assert_eq!(classify("-7"), ClassifiedValue::Integer(-7));
        assert_eq!(classify("007"), ClassifiedValue::Integer(7));
        assert_eq!(classify("-0"), ClassifiedValue::Integer(0));
    }

    #[test]
    fn test_floats() {
        assert_eq!(classify("2.75"), ClassifiedValue::Float(2.75));
        assert_eq!(classify("-.5"), ClassifiedValue::Float(-0.5));
        assert_eq!(classify(".5"), ClassifiedValue::Float(0.5));
        assert_eq!(classify("1.5e-3"), ClassifiedValue::Float(0.0015));
        assert_eq!(classify("2.E3"), ClassifiedValue::Float(2000.0));
        assert_eq!(classify("-1.25E2"), ClassifiedValue::Float(-125.0));
    }

    #[test]
    fn test_exponent_without_dot_is_text() {
        assert_eq!(classify("1e10"), text("1e10"));
        assert_eq!(classify("-3E2"), text("-3E2"));
    }

    #[test]
    fn test_trailing_dot_is_text() {
        assert_eq!(classify("123."), text("123."));
        assert_eq!(classify("."), text("."));
        assert_eq!(classify("-"), text("-"));
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(classify("abc"), text("abc"));
        assert_eq!(classify(" 42"), text(" 42"));
        assert_eq!(classify("42 "), text("42 "));
        assert_eq!(classify(""), text(""));
        assert_eq!(classify("+5"), text("+5"));
        assert_eq!(classify("1.5e+3"), text("1.5e+3"));
    }

    #[test]
    fn test_non_ascii_digits_are_text() {
        // Arabic-Indic digits
        assert_eq!(classify("٤٢"), text("٤٢"));
        assert_eq!(classify("１２"), text("１２"));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_text() {
        assert_eq!(
            classify("9223372036854775807"),
            ClassifiedValue::Integer(i64::MAX)
        );
        assert_eq!(
            classify("-9223372036854775808"),
            ClassifiedValue::Integer(i64::MIN)
        );
        assert_eq!(
            classify("9223372036854775808"),
            text("9223372036854775808")
        );
    }

    #[test]
    fn test_exponent_overflow_is_infinite_float() {
        assert_eq!(classify("1.0e999"), ClassifiedValue::Float(f64::INFINITY));
    }

    #[test]
    fn test_category_routing() {
        assert_eq!(classify("1").category(), Category::Integers);
        assert_eq!(classify("1.0").category(), Category::Floats);
        assert_eq!(classify("x").category(), Category::Strings);
    }
}
