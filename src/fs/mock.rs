//! テスト用モックファイルシステム

use super::*;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
///
/// パス文字列をキーにしたフラットなマップ。ディレクトリは明示追加か、
/// 配下にファイルがあれば存在扱いになる。
pub struct MockFs {
    files: RwLock<BTreeMap<String, MockEntry>>,
    writes: RwLock<Vec<PathBuf>>,
}

#[derive(Clone)]
enum MockEntry {
    File(Vec<u8>),
    Dir,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(BTreeMap::new()),
            writes: RwLock::new(Vec::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), MockEntry::File(content.as_bytes().to_vec()));
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), MockEntry::Dir);
    }

    /// ファイル内容を取得（存在しなければ None）
    pub fn content(&self, path: &str) -> Option<String> {
        match self.files.read().unwrap().get(path) {
            Some(MockEntry::File(bytes)) => Some(String::from_utf8_lossy(bytes).to_string()),
            _ => None,
        }
    }

    /// write() が呼ばれたパスの履歴
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.writes.read().unwrap().clone()
    }

    fn dir_prefix(path: &Path) -> String {
        let path_str = path.to_string_lossy().to_string();
        if path_str.ends_with('/') {
            path_str
        } else {
            format!("{}/", path_str)
        }
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .contains_key(path.to_string_lossy().as_ref())
            || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let files = self.files.read().unwrap();
        if let Some(entry) = files.get(path.to_string_lossy().as_ref()) {
            return matches!(entry, MockEntry::Dir);
        }
        let prefix = Self::dir_prefix(path);
        files.keys().any(|k| k.starts_with(&prefix))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.content(path.to_string_lossy().as_ref())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into())
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.files.write().unwrap().insert(
            path.to_string_lossy().to_string(),
            MockEntry::File(content.to_vec()),
        );
        self.writes.write().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn walk_files(&self, dir: &Path) -> Vec<PathBuf> {
        let prefix = Self::dir_prefix(dir);
        self.files
            .read()
            .unwrap()
            .iter()
            .filter(|(k, v)| k.starts_with(&prefix) && matches!(v, MockEntry::File(_)))
            .map(|(k, _)| PathBuf::from(k))
            .collect()
    }
}
