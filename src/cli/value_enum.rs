use char_freq_domain::{ByteScreen, CharClass};
use clap::ValueEnum;

use crate::config::{AnalysisMode, OutputFormat};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Tsv => OutputFormat::Tsv,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
            CliOutputFormat::Md => OutputFormat::Md,
            CliOutputFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliMode {
    /// 出現回数
    Count,
    /// 出現回数 / 合計
    Rank,
}

impl From<CliMode> for AnalysisMode {
    fn from(value: CliMode) -> Self {
        match value {
            CliMode::Count => AnalysisMode::Count,
            CliMode::Rank => AnalysisMode::Rank,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliCharClass {
    /// 何も数えない
    None,
    /// 英字（大文字に畳み込み）
    Alpha,
    /// 数字
    Digit,
    /// 英数字以外
    Symbol,
    /// 英字 + 数字
    #[value(alias = "alphanumeric")]
    Alnum,
    /// すべてのバイト
    Ascii,
}

impl From<CliCharClass> for CharClass {
    fn from(value: CliCharClass) -> Self {
        match value {
            CliCharClass::None => CharClass::None,
            CliCharClass::Alpha => CharClass::Alpha,
            CliCharClass::Digit => CharClass::Digit,
            CliCharClass::Symbol => CharClass::Symbol,
            CliCharClass::Alnum => CharClass::AlphaNumeric,
            CliCharClass::Ascii => CharClass::Ascii,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliScreen {
    /// '0' 以上 '0'+127 未満のバイトのみ（互換）
    Legacy,
    /// 0x00..=0x7F のすべて
    SevenBit,
}

impl From<CliScreen> for ByteScreen {
    fn from(value: CliScreen) -> Self {
        match value {
            CliScreen::Legacy => ByteScreen::Legacy,
            CliScreen::SevenBit => ByteScreen::SevenBit,
        }
    }
}
