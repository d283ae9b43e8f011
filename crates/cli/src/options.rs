use clap::ValueEnum;

/// 統計レポートの出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
