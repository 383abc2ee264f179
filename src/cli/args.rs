// src/cli/args.rs
use std::path::PathBuf;

use char_freq_domain::SortStrategy;
use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliCharClass, CliMode, CliOutputFormat, CliScreen};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "char_freq",
    version = crate::VERSION,
    about = "文字頻度（出現回数/ランク）の集計ツール",
    group(
        clap::ArgGroup::new("input_source")
            .args(&["paths", "text"])
            .multiple(false)
    )
)]
pub struct Args {
    /// 集計対象ファイル（`-` で標準入力）。未指定なら標準入力
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub paths: Vec<PathBuf>,

    /// ファイルの代わりに文字列を直接集計
    #[arg(long, help_heading = "入力")]
    pub text: Option<String>,

    /// 相対パスが見つからない場合に `../` を試さない
    #[arg(long, help_heading = "入力")]
    pub no_parent_fallback: bool,

    /// 集計値（count: 出現回数, rank: 出現率）
    #[arg(long, value_enum, default_value = "count", help_heading = "集計")]
    pub mode: CliMode,

    /// 数える文字クラス
    #[arg(long = "class", value_enum, default_value = "alpha", help_heading = "集計")]
    pub class: CliCharClass,

    /// 入力バイトの事前フィルタ
    #[arg(long, value_enum, default_value = "legacy", help_heading = "集計")]
    pub screen: CliScreen,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// ソートキー（複数可, 例: value:desc,char:asc / none）
    #[arg(long, default_value = "char:asc", help_heading = "出力")]
    pub sort: SortStrategy,

    /// 上位N件のみ表示
    #[arg(long, help_heading = "出力")]
    pub top: Option<usize>,

    /// ランダムな印字可能 ASCII のサンプルファイルを生成し、それを集計
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "サンプル")]
    pub generate_sample: Option<PathBuf>,

    /// サンプルのバイト数
    #[arg(long, default_value_t = char_freq_infra::sample::DEFAULT_SAMPLE_LEN, requires = "generate_sample", help_heading = "サンプル")]
    pub sample_len: usize,

    /// サンプル生成の乱数シード（再現用）
    #[arg(long, requires = "generate_sample", help_heading = "サンプル")]
    pub seed: Option<u64>,

    /// ログ出力を増やす（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "その他")]
    pub verbose: u8,
}
