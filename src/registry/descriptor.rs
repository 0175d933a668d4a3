use crate::serde_ext::null_as_default;
use serde::{Deserialize, Serialize};

/// `r/<name>.json` のスキーマ（未知のフィールドは無視）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<FileEntry>,
}

impl ComponentDescriptor {
    /// 全ファイルの内容を順に返す
    pub fn contents(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.content.as_str())
    }
}

/// 記述子に含まれる1ファイル
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// 情報用のみ
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// `registry.json` のスキーマ
///
/// `items` が無い（または配列でない）本文は不正な一覧としてパースエラーにする。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryIndex {
    pub items: Vec<RegistryItem>,
}

/// レジストリ一覧の1エントリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RegistryItem {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
        }
    }

    /// AI コンポーネント（`ai-` 接頭辞）かどうか
    pub fn is_ai(&self) -> bool {
        self.name.starts_with("ai-")
    }
}
