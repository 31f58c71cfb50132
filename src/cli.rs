use clap::{Parser, Subcommand};
use crate::config::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inventory-desk")]
#[command(about = "連絡先・商品データのプレビューツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 出力形式 (table/json)。未指定なら設定ファイルの値
    #[arg(long, global = true)]
    pub output: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 連絡先一覧を表示
    Contacts {
        /// データJSONファイル（未指定なら設定値）
        file: Option<PathBuf>,
    },

    /// カテゴリ一覧、またはカテゴリに属するサブカテゴリを表示
    Catalog {
        /// データJSONファイル（未指定なら設定値）
        file: Option<PathBuf>,

        /// カテゴリID
        #[arg(short, long)]
        category: Option<String>,
    },

    /// 商品一覧を表示
    Products {
        /// データJSONファイル（未指定なら設定値）
        file: Option<PathBuf>,
    },

    /// 設定を管理
    Config {
        /// 現在の設定を表示
        #[arg(long)]
        show: bool,

        /// 既定のデータファイルを設定
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// 既定の出力形式を設定
        #[arg(long)]
        set_output: Option<OutputFormat>,
    },
}
