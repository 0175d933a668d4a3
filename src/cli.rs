use clap::{CommandFactory, Parser, Subcommand};

use crate::commands::{add, list};

/// ビルド情報が無いときのバージョン表示
const FALLBACK_VERSION: &str = "0.0.3";

#[derive(Debug, Parser)]
#[command(name = "devcn-ui")]
#[command(about = "Devcn UI CLI - Add components from the Devcn UI Design Registry", long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = "\
Examples:
  devcn-ui add ai-message
  devcn-ui add ai-conversation ai-input ai-message
  devcn-ui list

Environment:
  DEVCN_UI_REGISTRY_URL  Override the registry base URL")]
pub struct Cli {
    /// Show version information
    #[arg(short = 'v', long = "version", global = true)]
    pub version: bool,

    /// Print debug diagnostics to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add components to your project
    Add(add::Args),

    /// List all available components
    #[command(visible_alias = "ls")]
    List(list::Args),
}

/// 表示用バージョン
pub fn version() -> &'static str {
    option_env!("CARGO_PKG_VERSION").unwrap_or(FALLBACK_VERSION)
}

/// ルートのヘルプを標準出力へ
pub fn print_usage() {
    println!("{}", Cli::command().render_help());
}
