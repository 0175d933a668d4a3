use super::mapping::{Translation, WorkspaceMapping, FRAMEWORK_PACKAGES, INTERNAL_NAMESPACE};
use crate::registry::ComponentDescriptor;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// 抽出結果（重複なし、表示用に昇順）
pub type DependencySet = BTreeSet<String>;

/// ES モジュールの import 文（default / named / namespace / default+named）
///
/// `import "x"` のような副作用のみの import は対象外。
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"import\s+(?:type\s+)?(?:[\w$]+\s*,\s*)?(?:\{[^}]*\}|\*\s*as\s+[\w$]+|[\w$]+)\s+from\s+['"]([^'"]+)['"]"#,
    )
    .expect("import pattern is valid")
});

/// テキスト中の import 文からモジュール指定子を順に取り出す
pub fn import_specifiers(content: &str) -> impl Iterator<Item = &str> {
    IMPORT_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// モジュール指定子からパッケージIDを導出
///
/// - 相対パス（`.` 始まり）と組み込みモジュール（`node:`）は None
/// - `@scope/pkg/sub` → `@scope/pkg`
/// - `pkg/sub` → `pkg`
pub fn package_id(specifier: &str) -> Option<String> {
    if specifier.starts_with('.') || specifier.starts_with("node:") {
        return None;
    }

    let segments: Vec<&str> = specifier.split('/').collect();
    let id = if specifier.starts_with('@') {
        segments.iter().take(2).copied().collect::<Vec<_>>().join("/")
    } else {
        segments[0].to_string()
    };

    (!id.is_empty()).then_some(id)
}

/// 1つのパッケージIDを変換表とフィルタに通す
fn resolve(id: String, mapping: &WorkspaceMapping) -> Option<String> {
    if let Some(translation) = mapping.lookup(&id) {
        return match translation {
            Translation::Skip => None,
            Translation::Package(public) => Some(public.clone()),
        };
    }

    if FRAMEWORK_PACKAGES.contains(&id.as_str()) || id.starts_with(INTERNAL_NAMESPACE) {
        return None;
    }

    Some(id)
}

/// 記述子の全ファイルから外部依存パッケージを抽出
pub fn extract_dependencies(
    descriptor: &ComponentDescriptor,
    mapping: &WorkspaceMapping,
) -> DependencySet {
    let mut dependencies = DependencySet::new();

    for content in descriptor.contents() {
        for specifier in import_specifiers(content) {
            let Some(id) = package_id(specifier) else {
                continue;
            };
            if let Some(package) = resolve(id, mapping) {
                dependencies.insert(package);
            }
        }
    }

    tracing::debug!(?dependencies, "extracted dependencies");
    dependencies
}
