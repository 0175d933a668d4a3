use crate::config::ProjectLayout;
use crate::fs::FileSystem;

/// 利用側プロジェクトのパッケージマネージャ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManager {
    /// ロックファイルの検出順
    const LOCKFILES: [(&'static str, PackageManager); 3] = [
        ("pnpm-lock.yaml", PackageManager::Pnpm),
        ("yarn.lock", PackageManager::Yarn),
        ("package-lock.json", PackageManager::Npm),
    ];

    /// ロックファイルから検出（見つからなければ npm）
    pub fn detect(fs: &dyn FileSystem, layout: &ProjectLayout) -> Self {
        Self::LOCKFILES
            .iter()
            .find(|(lockfile, _)| fs.exists(&layout.root_file(lockfile)))
            .map(|(_, manager)| *manager)
            .unwrap_or(PackageManager::Npm)
    }

    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// パッケージ追加のサブコマンド
    pub fn install_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Pnpm | PackageManager::Yarn => "add",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}
