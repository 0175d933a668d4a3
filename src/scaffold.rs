//! 外部スキャフォールドツール（shadcn CLI）の呼び出し

use crate::config::{ProjectLayout, ScaffoldConfig};
use crate::error::{DevcnError, Result};
use crate::process::{CommandRunner, Invocation, OutputMode};
use reqwest::Url;

/// スキャフォールドツール
pub struct Scaffolder<'a> {
    config: &'a ScaffoldConfig,
    runner: &'a dyn CommandRunner,
    layout: &'a ProjectLayout,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        config: &'a ScaffoldConfig,
        runner: &'a dyn CommandRunner,
        layout: &'a ProjectLayout,
    ) -> Self {
        Self {
            config,
            runner,
            layout,
        }
    }

    fn invocation(&self, target: &str, output: OutputMode) -> Invocation {
        Invocation::new(&self.config.program, self.layout.root())
            .args([self.config.package.as_str(), "add", target])
            .output(output)
    }

    /// レジストリURLからコンポーネントを追加（出力は表示）
    pub fn add_from_url(&self, component: &str, url: &Url) -> Result<()> {
        self.runner
            .run(&self.invocation(url.as_str(), OutputMode::Inherit))
            .map_err(|e| DevcnError::Scaffold {
                component: component.to_string(),
                source: Box::new(e),
            })
    }

    /// 名前でベースUIプリミティブを追加（出力は抑制）
    pub fn add_primitive(&self, name: &str) -> Result<()> {
        self.runner.run(&self.invocation(name, OutputMode::Piped))
    }

    /// 手動インストール用のコマンドライン
    pub fn manual_command(&self, target: &str) -> String {
        self.invocation(target, OutputMode::Inherit).display()
    }
}
