use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "details-store")]
#[command(about = "部品データ(JSON)の表示・追加・削除・検索・週次コスト集計", long_about = None)]
pub struct Cli {
    /// サブコマンド（省略時は対話メニュー）
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// データファイル（設定・環境変数より優先）
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話メニューを起動
    Menu,

    /// ファイルの内容を表示
    Show,

    /// レコードを追加
    Add {
        /// JSONオブジェクト形式のレコード
        #[arg(required = true)]
        record: String,
    },

    /// レコードを削除（0始まりのインデックス）
    Delete {
        #[arg(required = true, allow_hyphen_values = true)]
        index: i64,
    },

    /// フィールド値で検索
    Search {
        /// フィールド名
        #[arg(required = true)]
        field: String,

        /// 検索値（デフォルトは文字列として比較）
        #[arg(required = true, allow_hyphen_values = true)]
        value: String,

        /// 検索値をJSONリテラルとして解釈（数値・真偽値など）
        #[arg(long)]
        json: bool,

        /// 結果を結果ファイルに保存
        #[arg(long)]
        save: bool,
    },

    /// 指定日を含む週（月〜日）の部品コスト合計
    WeekCost {
        /// 基準日 (YYYY-MM-DD)
        #[arg(required = true)]
        date: String,
    },

    /// 設定を表示/編集
    Config {
        /// データファイルを設定
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// 結果ファイルを設定
        #[arg(long)]
        set_results_file: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
