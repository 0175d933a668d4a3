use std::collections::BTreeMap;

/// ワークスペース内部パッケージの名前空間
pub const INTERNAL_NAMESPACE: &str = "@repo/";

/// UI フレームワーク自身のパッケージ（利用側に必ずあるので除外）
pub const FRAMEWORK_PACKAGES: &[&str] = &["react", "react-dom", "next"];

/// 内部パッケージ → 公開パッケージの既定対応表（None は依存不要）
const DEFAULT_TRANSLATIONS: &[(&str, Option<&str>)] = &[
    // shadcn のプリミティブはスキャフォールドツール経由で入る
    ("@repo/shadcn-ui", None),
    ("@repo/code-block", Some("shiki")),
];

/// 内部パッケージの変換先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// 依存パッケージとしては不要
    Skip,
    /// 指定の公開パッケージに置き換える
    Package(String),
}

/// 内部パッケージ名の変換表
#[derive(Debug, Clone)]
pub struct WorkspaceMapping {
    entries: BTreeMap<String, Translation>,
}

impl WorkspaceMapping {
    /// 空の変換表
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// エントリを追加（既存は上書き）
    pub fn with(mut self, package: &str, translation: Translation) -> Self {
        self.entries.insert(package.to_string(), translation);
        self
    }

    /// パッケージIDに対応する変換を引く
    pub fn lookup(&self, package: &str) -> Option<&Translation> {
        self.entries.get(package)
    }
}

impl Default for WorkspaceMapping {
    fn default() -> Self {
        DEFAULT_TRANSLATIONS
            .iter()
            .fold(Self::empty(), |mapping, (package, public)| {
                let translation = match public {
                    Some(name) => Translation::Package(name.to_string()),
                    None => Translation::Skip,
                };
                mapping.with(package, translation)
            })
    }
}
