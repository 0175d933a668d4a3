//! ベースUIプリミティブ（shadcn/ui コンポーネント）の補完
//!
//! 記述子が参照するプリミティブのうち、利用側の components/ui に無いものを
//! スキャフォールドツールで1つずつ追加する。

use crate::config::ProjectLayout;
use crate::fs::FileSystem;
use crate::registry::ComponentDescriptor;
use crate::scaffold::Scaffolder;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// 内部名前空間のプリミティブ参照（書き換え前の記述子に対して使う）
static PRIMITIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@repo/shadcn-ui/components/ui/([^'"]+)"#).expect("primitive pattern is valid")
});

/// プリミティブの存在確認に使う拡張子
const PRIMITIVE_EXTENSIONS: [&str; 2] = ["tsx", "ts"];

/// 記述子が参照するプリミティブ名を集める
pub fn referenced_primitives(descriptor: &ComponentDescriptor) -> BTreeSet<String> {
    descriptor
        .contents()
        .flat_map(|content| {
            PRIMITIVE_RE
                .captures_iter(content)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// 補完の結果
#[derive(Debug, Default)]
pub struct PrimitiveReport {
    pub installed: Vec<String>,
    /// (名前, エラー, 手動インストール用コマンド)
    pub failed: Vec<(String, String, String)>,
}

impl PrimitiveReport {
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty() && self.failed.is_empty()
    }
}

/// プリミティブの補完処理
pub struct PrimitiveReconciler<'a> {
    fs: &'a dyn FileSystem,
    scaffolder: &'a Scaffolder<'a>,
    layout: &'a ProjectLayout,
}

impl<'a> PrimitiveReconciler<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        scaffolder: &'a Scaffolder<'a>,
        layout: &'a ProjectLayout,
    ) -> Self {
        Self {
            fs,
            scaffolder,
            layout,
        }
    }

    /// ローカルにファイルが無いプリミティブ名
    pub fn missing(&self, names: &BTreeSet<String>) -> Vec<String> {
        let ui_dir = self.layout.ui_dir();
        names
            .iter()
            .filter(|name| {
                !PRIMITIVE_EXTENSIONS
                    .iter()
                    .any(|ext| self.fs.exists(&ui_dir.join(format!("{}.{}", name, ext))))
            })
            .cloned()
            .collect()
    }

    /// 不足分を1つずつインストールする（失敗しても残りは続行）
    pub fn install_missing(&self, descriptor: &ComponentDescriptor) -> PrimitiveReport {
        let mut report = PrimitiveReport::default();

        let missing = self.missing(&referenced_primitives(descriptor));
        if missing.is_empty() {
            return report;
        }

        println!(
            "🧩 Installing missing shadcn/ui components: {}",
            missing.join(", ")
        );

        for name in missing {
            println!("  Installing {}...", name);
            match self.scaffolder.add_primitive(&name) {
                Ok(()) => report.installed.push(name),
                Err(e) => {
                    tracing::warn!(component = %name, error = %e, "primitive install failed");
                    let manual = self.scaffolder.manual_command(&name);
                    report.failed.push((name, e.to_string(), manual));
                }
            }
        }

        report
    }
}

#[cfg(test)]
#[path = "primitives_test.rs"]
mod tests;
