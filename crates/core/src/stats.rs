// crates/core/src/stats.rs
use serde::Serialize;

/// Summary of a numeric bucket. Every value is widened to `f64`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct NumericStats {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

impl NumericStats {
    /// Single pass over `values`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for v in values {
            count += 1;
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        if count == 0 {
            return Self::default();
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = sum / count as f64;
        Self {
            count,
            min: Some(min),
            max: Some(max),
            sum: Some(sum),
            mean: Some(mean),
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_integers(values: &[i64]) -> Self {
        Self::from_values(values.iter().map(|&v| v as f64))
    }

    #[must_use]
    pub fn from_floats(values: &[f64]) -> Self {
        Self::from_values(values.iter().copied())
    }
}

/// Summary of the string bucket: lengths only, never the strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
}

impl TextStats {
    #[must_use]
    pub fn from_strings(values: &[String]) -> Self {
        let mut lengths = values.iter().map(|s| utf16_len(s));
        let Some(first) = lengths.next() else {
            return Self::default();
        };
        let (min_len, max_len) = lengths.fold((first, first), |(lo, hi), len| {
            (lo.min(len), hi.max(len))
        });
        Self {
            count: values.len(),
            min_len: Some(min_len),
            max_len: Some(max_len),
        }
    }
}

/// Length in UTF-16 code units.
#[must_use]
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub integers: NumericStats,
    pub floats: NumericStats,
    pub strings: TextStats,
}
