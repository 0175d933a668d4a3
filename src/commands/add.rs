//! devcn-ui add コマンド
//!
//! 指定されたコンポーネントを順に追加する。1つが失敗しても残りは続行し、
//! 最後に集計を表示する。

use crate::config::{HttpConfig, ProjectLayout, RegistryConfig, ScaffoldConfig};
use crate::deps::WorkspaceMapping;
use crate::error::{DevcnError, ErrorFormatter};
use crate::fs::RealFs;
use crate::install::{ComponentInstaller, InstallContext};
use crate::output::CommandSummary;
use crate::process::SystemRunner;
use crate::registry::RegistryClient;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Component names as listed by `devcn-ui list`
    #[arg(required = true, value_name = "COMPONENT")]
    pub components: Vec<String>,

    /// Project root containing package.json (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

pub async fn run(args: Args, verbose: bool) -> Result<(), String> {
    let formatter = ErrorFormatter::new(verbose);

    let root = match args.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| formatter.format(&DevcnError::from(e)))?,
    };
    let registry_config = RegistryConfig::from_env().map_err(|e| formatter.format(&e))?;
    tracing::debug!(registry = %registry_config.base_url(), root = %root.display(), "add");

    let registry = RegistryClient::new(&HttpConfig::default(), registry_config);
    let layout = ProjectLayout::new(root);
    let scaffold = ScaffoldConfig::default();
    let mapping = WorkspaceMapping::default();

    let installer = ComponentInstaller::new(InstallContext {
        registry: &registry,
        fs: &RealFs,
        runner: &SystemRunner,
        layout: &layout,
        scaffold: &scaffold,
        mapping: &mapping,
    });

    let (success, failure) = add_components(&installer, &args.components, &formatter).await;

    println!();
    CommandSummary::format(success, failure).print();

    if failure > 0 {
        Err(format!("{} component(s) could not be added", failure))
    } else {
        Ok(())
    }
}

/// コンポーネントを順に追加し、(成功数, 失敗数) を返す
///
/// 空白だけの名前は数えずに飛ばす。
pub async fn add_components(
    installer: &ComponentInstaller<'_>,
    components: &[String],
    formatter: &ErrorFormatter,
) -> (usize, usize) {
    let mut success = 0;
    let mut failure = 0;

    for name in components.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
        println!("Adding {} component...", name);
        match installer.install(name).await {
            Ok(report) => {
                tracing::debug!(
                    component = %report.component,
                    dependencies = report.dependencies.len(),
                    manifest = ?report.manifest,
                    rewritten = report.rewrite.changed.len(),
                    primitives = report.primitives.installed.len(),
                    primitive_failures = report.primitives.failed.len(),
                    "component added"
                );
                success += 1;
            }
            Err(e) => {
                eprintln!("{}", formatter.format(&e));
                if e.is_registry_unavailable() {
                    eprintln!("Run `devcn-ui list` to see available components.");
                }
                failure += 1;
            }
        }
    }

    (success, failure)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
