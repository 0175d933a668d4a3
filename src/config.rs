//! HTTP・レジストリ・プロジェクト構成の設定

use crate::env::EnvVar;
use crate::error::{DevcnError, Result};
use reqwest::{Client, Url};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// レジストリのベースURLを上書きする環境変数
pub const REGISTRY_URL_ENV: &str = "DEVCN_UI_REGISTRY_URL";

/// デフォルトのレジストリ
pub const DEFAULT_REGISTRY_URL: &str = "https://devcn-ui.dedevs.com/";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（None なら無制限）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: "devcn-ui-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// レジストリ設定
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    base_url: Url,
}

impl RegistryConfig {
    /// ベースURLから作成
    ///
    /// 末尾に `/` がなければ補う（`r/<name>.json` をベースパス配下に結合するため）。
    pub fn new(base_url: &str) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base_url = Url::parse(&normalized)
            .map_err(|e| DevcnError::InvalidRegistryUrl(format!("{}: {}", base_url, e)))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DevcnError::InvalidRegistryUrl(base_url.to_string()));
        }

        Ok(Self { base_url })
    }

    /// 環境変数 DEVCN_UI_REGISTRY_URL から作成（未設定ならデフォルト）
    pub fn from_env() -> Result<Self> {
        Self::new(&EnvVar::get_or(REGISTRY_URL_ENV, DEFAULT_REGISTRY_URL))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// コンポーネント記述子のURL: `{base}/r/{name}.json`
    pub fn component_url(&self, name: &str) -> Result<Url> {
        self.join(&format!("r/{}.json", name))
    }

    /// レジストリ一覧のURL: `{base}/registry.json`
    pub fn index_url(&self) -> Result<Url> {
        self.join("registry.json")
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| DevcnError::InvalidRegistryUrl(format!("{}{}: {}", self.base_url, path, e)))
    }
}

/// スキャフォールドツールの設定
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// 実行するランナー
    pub program: String,
    /// ランナーに渡すパッケージ指定
    pub package: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            package: "shadcn@latest".to_string(),
        }
    }
}

/// 利用側プロジェクトのパス規約
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    /// UIコンポーネントのエイリアス
    pub ui_alias: String,
    /// ユーティリティモジュールのエイリアス
    pub utils_alias: String,
    /// コードブロックコンポーネントのエイリアス
    pub code_block_alias: String,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ui_alias: "@/components/ui".to_string(),
            utils_alias: "@/lib/utils".to_string(),
            code_block_alias: "@/components/ui/code-block".to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// package.json のパス
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// components/ ディレクトリ
    pub fn components_dir(&self) -> PathBuf {
        self.root.join("components")
    }

    /// components/ui/ ディレクトリ
    pub fn ui_dir(&self) -> PathBuf {
        self.components_dir().join("ui")
    }

    /// ルート直下のファイルパス（ロックファイル検出用）
    pub fn root_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
