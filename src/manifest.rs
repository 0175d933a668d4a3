//! 利用側プロジェクトの package.json と依存パッケージの調整

mod package_manager;
mod reconcile;

pub use package_manager::PackageManager;
pub use reconcile::{ManifestReconciler, ReconcileOutcome};

use crate::error::{DevcnError, Result};
use crate::fs::FileSystem;
use crate::serde_ext::null_as_default;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// package.json のうち依存宣言の部分
///
/// パイプラインはこの値を書き換えない。更新はパッケージマネージャに任せる。
/// 各マップが `null` の場合は空として扱う。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub peer_dependencies: BTreeMap<String, serde_json::Value>,
}

impl ProjectManifest {
    /// ディスクから読み込む（ファイルがなければ None）
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Option<Self>> {
        if !fs.exists(path) {
            return Ok(None);
        }

        let content = fs.read_to_string(path)?;
        let manifest = serde_json::from_str(&content).map_err(|source| {
            DevcnError::ManifestParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(Some(manifest))
    }

    /// runtime / dev / peer のいずれかで宣言済みか
    pub fn declares(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
            || self.dev_dependencies.contains_key(package)
            || self.peer_dependencies.contains_key(package)
    }

    /// 未宣言のパッケージを入力順のまま返す
    pub fn missing<'a, I>(&self, required: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        required
            .into_iter()
            .filter(|package| !self.declares(package))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod tests;
