// crates/cli/src/args.rs
use crate::options::ReportFormat;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "line_sift",
    version = crate::VERSION,
    about = "行を整数/浮動小数点数/文字列に振り分けるツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 入力ファイル (指定順に処理)
    #[arg(value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// 出力ディレクトリ
    #[arg(short = 'o', long = "output", default_value = ".", value_hint = ValueHint::DirPath, help_heading = "出力")]
    pub output_dir: PathBuf,

    /// 出力ファイル名のプレフィックス
    #[arg(short = 'p', long, default_value = "", help_heading = "出力")]
    pub prefix: String,

    /// 既存の出力ファイルに追記する
    #[arg(short = 'a', long, help_heading = "出力")]
    pub append: bool,

    /// 詳細な統計を表示 (最後に指定したものが優先)
    #[arg(short = 'f', long, overrides_with = "short", help_heading = "統計")]
    pub full: bool,

    /// 件数のみ表示 (最後に指定したものが優先)
    #[arg(short = 's', long, overrides_with = "full", help_heading = "統計")]
    pub short: bool,

    /// 統計レポートの形式
    #[arg(long, value_enum, default_value = "text", help_heading = "統計")]
    pub format: ReportFormat,

    /// ログを詳細にする (-v: info, -vv: debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
