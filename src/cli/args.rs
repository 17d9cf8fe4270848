// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use facet_filter_domain::MediaType;

use super::{
    parsers::{parse_media_type, parse_positive_usize, parse_score, parse_usize_1_to_512},
    value_enum::CliOutputFormat,
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "facet_filter",
    version = crate::VERSION,
    about = "メディアアセットカタログのファセット検索ツール",
    long_about = Some(include_str!("../../usage.txt"))
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// アセットカタログ (JSON 配列, .yaml/.yml は YAML)
    #[arg(long, short = 'c', value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub catalog: PathBuf,

    /// タイトル・説明・ソース・タグ・エンティティに対する部分一致検索（大文字小文字を区別しない）
    #[arg(long, short = 'q', help_heading = "フィルタ")]
    pub query: Option<String>,

    /// 必須タグ（すべて含むアセットのみ, カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub tag: Vec<String>,

    /// 除外タグ（いずれかを含むアセットを除外）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub exclude_tag: Vec<String>,

    /// エンティティ（いずれかを含むアセット, 複数指定可）
    #[arg(long, help_heading = "フィルタ")]
    pub entity: Vec<String>,

    /// 除外エンティティ
    #[arg(long, help_heading = "フィルタ")]
    pub exclude_entity: Vec<String>,

    /// メディア種別 (image, video, audio, document)
    #[arg(long = "type", value_delimiter = ',', value_parser = parse_media_type, help_heading = "フィルタ")]
    pub media_types: Vec<MediaType>,

    /// ソース（いずれかに一致, 大文字小文字を区別）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub source: Vec<String>,

    /// 色（いずれかに一致）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub color: Vec<String>,

    /// スコア下限 (0-100, 境界を含む)
    #[arg(long, value_parser = parse_score, help_heading = "フィルタ")]
    pub min_score: Option<f64>,

    /// スコア上限 (0-100, 境界を含む)
    #[arg(long, value_parser = parse_score, help_heading = "フィルタ")]
    pub max_score: Option<f64>,

    /// 自然言語クエリ（GEMINI_API_KEY が必要, 複数指定時は順に適用）
    #[arg(long, help_heading = "自然言語検索")]
    pub ask: Vec<String>,

    /// 記録済みのパーサ応答 (JSON) をマージする
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "自然言語検索")]
    pub parsed: Vec<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 有効なフィルタのチップ一覧を表示
    #[arg(long, help_heading = "出力")]
    pub chips: bool,

    /// 結果の統計を表示
    #[arg(long, help_heading = "出力")]
    pub stats: bool,

    /// 統計に含めるエンティティの上位N件
    #[arg(long, value_parser = parse_positive_usize, requires = "stats", help_heading = "出力")]
    pub top_entities: Option<usize>,

    /// カタログ内のタグ・エンティティ・ソース・色の一覧を表示
    #[arg(long, help_heading = "出力")]
    pub vocabulary: bool,

    /// 一覧のタグ・エンティティを部分一致で絞り込む (大文字小文字を区別しない)
    #[arg(long, value_name = "TEXT", requires = "vocabulary", help_heading = "出力")]
    pub facet_search: Option<String>,

    /// 評価スレッド数 (1-512, 省略時は CPU 数)
    #[arg(long, short = 'j', value_parser = parse_usize_1_to_512, help_heading = "実行")]
    pub jobs: Option<usize>,

    /// デバッグログを標準エラーに出力
    #[arg(long, short = 'v', help_heading = "実行")]
    pub verbose: bool,
}
