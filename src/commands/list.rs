//! devcn-ui list コマンド
//!
//! レジストリ一覧を取得して表示する。取得できなければ組み込みの一覧を使う。

use crate::config::{HttpConfig, RegistryConfig};
use crate::error::{self, DevcnError, ErrorFormatter};
use crate::registry::{fallback_index, RegistryClient, RegistryIndex, RegistryItem, RegistrySource};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only component names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args, verbose: bool) -> Result<(), String> {
    let formatter = ErrorFormatter::new(verbose);

    let index = match RegistryConfig::from_env() {
        Ok(config) => load_index(&RegistryClient::new(&HttpConfig::default(), config)).await,
        Err(e) => use_fallback(&e),
    };

    if args.json {
        print_json(&index).map_err(|e| formatter.format(&e))
    } else if args.simple {
        print_simple(&index);
        Ok(())
    } else {
        print!("{}", render_listing(&index));
        Ok(())
    }
}

/// 一覧を取得（失敗時は組み込み一覧にフォールバック）
pub async fn load_index(registry: &dyn RegistrySource) -> RegistryIndex {
    match registry.fetch_index().await {
        Ok(index) => index,
        Err(e) => use_fallback(&e),
    }
}

/// 取得できなかった理由を記録して組み込み一覧を返す
fn use_fallback(reason: &DevcnError) -> RegistryIndex {
    tracing::warn!(error = %reason, "registry listing unavailable");
    println!("Using local registry data...");
    fallback_index()
}

/// AI コンポーネントとユーティリティに分けた一覧表示
pub fn render_listing(index: &RegistryIndex) -> String {
    let (ai, utility): (Vec<&RegistryItem>, Vec<&RegistryItem>) =
        index.items.iter().partition(|item| item.is_ai());

    let mut out = String::from("\nAvailable components:\n");

    for (title, items) in [("AI Components:", &ai), ("Utility Components:", &utility)] {
        if items.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(title);
        out.push('\n');
        out.push_str(&render_table(items).to_string());
        out.push('\n');
    }

    out.push_str(&format!("\nTotal: {} components\n", index.items.len()));
    out.push_str("\nUsage: devcn-ui add <component-name>\n");
    out
}

fn render_table(items: &[&RegistryItem]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Description"]);
    for item in items {
        table.add_row(vec![
            item.name.as_str(),
            item.description.as_deref().unwrap_or("-"),
        ]);
    }
    table
}

fn print_simple(index: &RegistryIndex) {
    for item in &index.items {
        println!("{}", item.name);
    }
}

fn print_json(index: &RegistryIndex) -> error::Result<()> {
    let json = serde_json::to_string_pretty(&index.items)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
