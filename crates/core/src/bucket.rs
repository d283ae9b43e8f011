// crates/core/src/bucket.rs
use crate::classify::{Category, ClassifiedValue, classify};
use crate::render::render_float;
use crate::stats::{NumericStats, Summary, TextStats};

/// The three per-category buckets of one run.
///
/// Values are kept in arrival order. When several inputs are processed one
/// after another, each bucket holds the first input's values followed by the
/// next input's, and so on.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Buckets {
    integers: Vec<i64>,
    floats: Vec<f64>,
    strings: Vec<String>,
}

impl Buckets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, value: ClassifiedValue) {
        match value {
            ClassifiedValue::Integer(v) => self.integers.push(v),
            ClassifiedValue::Float(v) => self.floats.push(v),
            ClassifiedValue::Text(s) => self.strings.push(s),
        }
    }

    /// Classify `line` and append the result.
    pub fn push_line(&mut self, line: &str) -> Category {
        let value = classify(line);
        let category = value.category();
        self.append(value);
        category
    }

    #[must_use]
    pub fn integers(&self) -> &[i64] {
        &self.integers
    }

    #[must_use]
    pub fn floats(&self) -> &[f64] {
        &self.floats
    }

    #[must_use]
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Integers => self.integers.len(),
            Category::Floats => self.floats.len(),
            Category::Strings => self.strings.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self, category: Category) -> bool {
        self.len(category) == 0
    }

    /// Output lines for one bucket, terminators not included.
    #[must_use]
    pub fn rendered(&self, category: Category) -> Vec<String> {
        match category {
            Category::Integers => self.integers.iter().map(ToString::to_string).collect(),
            Category::Floats => self.floats.iter().map(|&v| render_float(v)).collect(),
            Category::Strings => self.strings.clone(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            integers: NumericStats::from_integers(&self.integers),
            floats: NumericStats::from_floats(&self.floats),
            strings: TextStats::from_strings(&self.strings),
        }
    }
}

impl Extend<ClassifiedValue> for Buckets {
    fn extend<T: IntoIterator<Item = ClassifiedValue>>(&mut self, iter: T) {
        for value in iter {
            self.append(value);
        }
    }
}
