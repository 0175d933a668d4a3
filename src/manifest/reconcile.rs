use super::{PackageManager, ProjectManifest};
use crate::config::ProjectLayout;
use crate::deps::DependencySet;
use crate::fs::FileSystem;
use crate::process::{CommandRunner, Invocation, OutputMode};
use owo_colors::OwoColorize;

/// 依存パッケージ調整の結果
///
/// いずれもパイプラインを止めない。
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// package.json がない（警告のみ）
    ManifestMissing,
    /// package.json が読めない（警告のみ）
    ManifestUnreadable(String),
    /// 不足なし
    UpToDate,
    /// インストール成功
    Installed {
        manager: PackageManager,
        packages: Vec<String>,
    },
    /// インストール失敗（手動インストールを案内する）
    InstallFailed {
        manager: PackageManager,
        packages: Vec<String>,
        error: String,
    },
}

/// 必要な依存パッケージと package.json を突き合わせ、不足分をインストールする
pub struct ManifestReconciler<'a> {
    fs: &'a dyn FileSystem,
    runner: &'a dyn CommandRunner,
    layout: &'a ProjectLayout,
}

impl<'a> ManifestReconciler<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        runner: &'a dyn CommandRunner,
        layout: &'a ProjectLayout,
    ) -> Self {
        Self { fs, runner, layout }
    }

    pub fn reconcile(&self, required: &DependencySet) -> ReconcileOutcome {
        let manifest_path = self.layout.manifest_path();

        let manifest = match ProjectManifest::load(self.fs, &manifest_path) {
            Ok(Some(manifest)) => manifest,
            Ok(None) => return ReconcileOutcome::ManifestMissing,
            Err(e) => {
                tracing::warn!(error = %e, "could not read manifest");
                return ReconcileOutcome::ManifestUnreadable(e.to_string());
            }
        };

        let missing = manifest.missing(required);
        if missing.is_empty() {
            return ReconcileOutcome::UpToDate;
        }

        let manager = PackageManager::detect(self.fs, self.layout);
        tracing::debug!(%manager, ?missing, "installing missing dependencies");

        println!(
            "📦 Installing missing dependencies: {}",
            missing.join(", ").cyan()
        );

        let invocation = Invocation::new(manager.program(), self.layout.root())
            .arg(manager.install_subcommand())
            .args(missing.iter().cloned())
            .output(OutputMode::Inherit);

        match self.runner.run(&invocation) {
            Ok(()) => ReconcileOutcome::Installed {
                manager,
                packages: missing,
            },
            Err(e) => ReconcileOutcome::InstallFailed {
                manager,
                packages: missing,
                error: e.to_string(),
            },
        }
    }
}
