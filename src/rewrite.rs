//! import パスの書き換え
//!
//! スキャフォールド後のファイルに残った内部名前空間（`@repo/`）の import を、
//! 利用側プロジェクトのパス規約に合わせて書き換える。
//!
//! ルールは宣言順に適用する。最後の「`@repo/` を剥がす」ルールは最も広いので、
//! 先に適用すると個別ルールを横取りしてしまう。

use crate::config::ProjectLayout;
use crate::fs::FileSystem;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// 書き換え対象の拡張子
pub const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// `from '…'` / `import '…'` / `import("…")` の直前部分と開き引用符
const LEAD: &str = r#"(?P<lead>\b(?:from|import)\s*\(?\s*)(?P<open>['"])"#;

static UI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"@repo/shadcn-ui/components/ui/(?P<rest>[^'"]+)(?P<close>['"])"#)
});
static UTILS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"@repo/shadcn-ui/lib/utils(?P<close>['"])"#));
static CODE_BLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"@repo/code-block(?P<rest>/[^'"]*)?(?P<close>['"])"#));
static NAMESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?:@repo/)+(?P<rest>[^'"]+)(?P<close>['"])"#));

fn compile(specifier: &str) -> Regex {
    Regex::new(&format!("{}{}", LEAD, specifier)).expect("rewrite pattern is valid")
}

/// 置換文字列中の `$` をエスケープ
fn literal(text: &str) -> String {
    text.replace('$', "$$")
}

/// 書き換えルール（パターンと置換）
#[derive(Debug, Clone)]
pub struct ImportRewriteRule {
    pub name: &'static str,
    pattern: &'static Regex,
    replacement: String,
}

impl ImportRewriteRule {
    pub fn apply(&self, content: &str) -> String {
        self.pattern
            .replace_all(content, self.replacement.as_str())
            .into_owned()
    }
}

/// ツリー書き換えの結果
#[derive(Debug, Default)]
pub struct RewriteReport {
    /// 実際に内容が変わったファイル
    pub changed: Vec<PathBuf>,
    /// 読み書きに失敗したファイル
    pub failed: Vec<(PathBuf, String)>,
}

/// import 書き換え器
#[derive(Debug, Clone)]
pub struct ImportRewriter {
    rules: Vec<ImportRewriteRule>,
}

impl ImportRewriter {
    /// 利用側のパス規約からルールを組み立てる
    pub fn new(layout: &ProjectLayout) -> Self {
        let rules = vec![
            ImportRewriteRule {
                name: "ui-components",
                pattern: &UI_PATTERN,
                replacement: format!("${{lead}}${{open}}{}/${{rest}}${{close}}", literal(&layout.ui_alias)),
            },
            ImportRewriteRule {
                name: "utils",
                pattern: &UTILS_PATTERN,
                replacement: format!("${{lead}}${{open}}{}${{close}}", literal(&layout.utils_alias)),
            },
            ImportRewriteRule {
                name: "code-block",
                pattern: &CODE_BLOCK_PATTERN,
                replacement: format!(
                    "${{lead}}${{open}}{}${{rest}}${{close}}",
                    literal(&layout.code_block_alias)
                ),
            },
            ImportRewriteRule {
                name: "namespace-strip",
                pattern: &NAMESPACE_PATTERN,
                replacement: "${lead}${open}${rest}${close}".to_string(),
            },
        ];

        Self { rules }
    }

    #[cfg(test)]
    pub fn rules(&self) -> &[ImportRewriteRule] {
        &self.rules
    }

    /// テキストにルールを順に適用
    pub fn rewrite(&self, content: &str) -> String {
        self.rules.iter().fold(content.to_string(), |text, rule| {
            let applied = rule.apply(&text);
            if applied != text {
                tracing::debug!(rule = rule.name, "applied rewrite rule");
            }
            applied
        })
    }

    /// 1ファイルを書き換え、内容が変わったときだけ書き戻す
    ///
    /// 戻り値は書き戻したかどうか。
    pub fn rewrite_file(&self, fs: &dyn FileSystem, path: &Path) -> crate::error::Result<bool> {
        let original = fs.read_to_string(path)?;
        let rewritten = self.rewrite(&original);

        if rewritten == original {
            return Ok(false);
        }

        fs.write(path, rewritten.as_bytes())?;
        Ok(true)
    }

    /// ディレクトリ配下のソースファイルをすべて書き換える
    ///
    /// 個々のファイルの失敗は記録して続行する。
    pub fn rewrite_tree(&self, fs: &dyn FileSystem, dir: &Path) -> RewriteReport {
        let mut report = RewriteReport::default();

        if !fs.is_dir(dir) {
            tracing::debug!(dir = %dir.display(), "no components directory, skipping rewrite");
            return report;
        }

        for path in fs.walk_files(dir).into_iter().filter(|p| is_source_file(p)) {
            match self.rewrite_file(fs, &path) {
                Ok(true) => {
                    tracing::info!(file = %path.display(), "rewrote imports");
                    report.changed.push(path);
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "could not rewrite imports");
                    report.failed.push((path, e.to_string()));
                }
            }
        }

        report
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod tests;
