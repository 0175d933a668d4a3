//! コンポーネント追加パイプライン
//!
//! 1コンポーネントにつき次の順で処理する:
//! 記述子取得 → 依存抽出 → package.json 調整 → スキャフォールド → import 書き換え
//! → プリミティブ補完。
//!
//! 記述子取得とスキャフォールドの失敗だけがこのコンポーネントの処理を中断する。
//! それ以外の失敗は警告と手動対応の案内を出して先へ進む。

use crate::config::{ProjectLayout, ScaffoldConfig};
use crate::deps::{extract_dependencies, DependencySet, WorkspaceMapping};
use crate::error::Result;
use crate::fs::FileSystem;
use crate::manifest::{ManifestReconciler, ReconcileOutcome};
use crate::primitives::{PrimitiveReconciler, PrimitiveReport};
use crate::process::CommandRunner;
use crate::registry::RegistrySource;
use crate::rewrite::{ImportRewriter, RewriteReport};
use crate::scaffold::Scaffolder;
use owo_colors::OwoColorize;
use std::path::Path;

/// パイプラインが使う外部資源一式
pub struct InstallContext<'a> {
    pub registry: &'a dyn RegistrySource,
    pub fs: &'a dyn FileSystem,
    pub runner: &'a dyn CommandRunner,
    pub layout: &'a ProjectLayout,
    pub scaffold: &'a ScaffoldConfig,
    pub mapping: &'a WorkspaceMapping,
}

/// 1コンポーネント分の結果
#[derive(Debug)]
pub struct InstallReport {
    pub component: String,
    pub dependencies: DependencySet,
    /// 依存が空なら None（package.json を見ない）
    pub manifest: Option<ReconcileOutcome>,
    pub rewrite: RewriteReport,
    pub primitives: PrimitiveReport,
}

/// コンポーネント追加処理
pub struct ComponentInstaller<'a> {
    ctx: InstallContext<'a>,
    rewriter: ImportRewriter,
}

impl<'a> ComponentInstaller<'a> {
    pub fn new(ctx: InstallContext<'a>) -> Self {
        let rewriter = ImportRewriter::new(ctx.layout);
        Self { ctx, rewriter }
    }

    /// 1コンポーネントを追加
    pub async fn install(&self, name: &str) -> Result<InstallReport> {
        let ctx = &self.ctx;

        let url = ctx.registry.component_url(name)?;
        let descriptor = ctx.registry.fetch_component(name).await?;
        tracing::debug!(component = name, files = descriptor.files.len(), "fetched descriptor");

        let dependencies = extract_dependencies(&descriptor, ctx.mapping);
        let manifest = if dependencies.is_empty() {
            None
        } else {
            let outcome =
                ManifestReconciler::new(ctx.fs, ctx.runner, ctx.layout).reconcile(&dependencies);
            print_manifest_outcome(&outcome);
            Some(outcome)
        };

        let scaffolder = Scaffolder::new(ctx.scaffold, ctx.runner, ctx.layout);
        scaffolder.add_from_url(name, &url)?;

        let rewrite = self.rewriter.rewrite_tree(ctx.fs, &ctx.layout.components_dir());
        print_rewrite_report(&rewrite, ctx.layout.root());

        let primitives =
            PrimitiveReconciler::new(ctx.fs, &scaffolder, ctx.layout).install_missing(&descriptor);
        if !primitives.is_empty() {
            print_primitive_report(&primitives);
        }

        Ok(InstallReport {
            component: name.to_string(),
            dependencies,
            manifest,
            rewrite,
            primitives,
        })
    }
}

fn print_manifest_outcome(outcome: &ReconcileOutcome) {
    match outcome {
        ReconcileOutcome::ManifestMissing => {
            println!(
                "{}  No package.json found. Skipping dependency check.",
                "⚠️".yellow()
            );
        }
        ReconcileOutcome::ManifestUnreadable(error) => {
            println!(
                "{}  Could not read package.json ({}). Skipping dependency check.",
                "⚠️".yellow(),
                error
            );
        }
        ReconcileOutcome::UpToDate => {}
        ReconcileOutcome::Installed { manager, packages } => {
            println!(
                "{} Installed {} with {}",
                "✓".green(),
                packages.join(", "),
                manager
            );
        }
        ReconcileOutcome::InstallFailed {
            manager,
            packages,
            error,
        } => {
            println!("{} Failed to install dependencies: {}", "✗".red(), error);
            println!(
                "Please install them manually: {} {} {}",
                manager.program(),
                manager.install_subcommand(),
                packages.join(" ")
            );
        }
    }
}

fn print_rewrite_report(report: &RewriteReport, root: &Path) {
    for path in &report.changed {
        println!("✨ Transformed imports in {}", display_relative(path, root));
    }
    for (path, error) in &report.failed {
        println!(
            "{}  Could not transform imports in {}: {}",
            "⚠️".yellow(),
            display_relative(path, root),
            error
        );
    }
}

fn print_primitive_report(report: &PrimitiveReport) {
    for name in &report.installed {
        println!("  {} {} installed", "✓".green(), name);
    }
    for (name, error, manual) in &report.failed {
        println!("  {}  Could not install {}: {}", "⚠️".yellow(), name, error);
        println!("  Please install it manually: {}", manual);
    }
}

/// プロジェクトルートからの相対表示（`./components/...`）
pub fn display_relative(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => format!("./{}", relative.display()),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
#[path = "install_test.rs"]
mod tests;
