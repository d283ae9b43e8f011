use derive_builder::Builder;
use line_sift_core::Category;
use std::path::PathBuf;

/// How much of each bucket summary is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsMode {
    /// Counts only
    #[default]
    Short,
    /// Counts plus min/max/sum/mean (numbers) or shortest/longest (strings)
    Full,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RunConfig {
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default = "PathBuf::from(\".\")")]
    pub output_dir: PathBuf,
    #[builder(default)]
    pub prefix: String,
    #[builder(default)]
    pub append: bool,
    #[builder(default)]
    pub stats: StatsMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            inputs: vec![],
            output_dir: PathBuf::from("."),
            prefix: String::new(),
            append: false,
            stats: StatsMode::default(),
        }
    }
}

impl RunConfig {
    /// `output_dir/{prefix}{category}.txt`
    #[must_use]
    pub fn output_path(&self, category: Category) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", self.prefix, category.file_name()))
    }
}
