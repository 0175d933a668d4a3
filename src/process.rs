//! 外部コマンド実行の抽象化
//!
//! スキャフォールドツールとパッケージマネージャの起動はすべてここを通る。

use crate::error::{DevcnError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 子プロセスの標準入出力の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// 親プロセスの入出力を引き継ぐ（進捗がそのまま見える）
    Inherit,
    /// 出力を捕捉して表示しない
    Piped,
}

/// 実行するコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub output: OutputMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            output: OutputMode::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// 表示用のコマンドライン
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// コマンド実行を抽象化するトレイト
pub trait CommandRunner: Send + Sync {
    /// コマンドを実行し、終了まで待つ
    ///
    /// 非ゼロ終了は `DevcnError::CommandFailed`、起動失敗は `DevcnError::CommandSpawn`。
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// 本番用: std::process::Command で実行
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        tracing::debug!(command = %invocation.display(), cwd = %invocation.cwd.display(), "running");

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);

        let status = match invocation.output {
            OutputMode::Inherit => command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status(),
            OutputMode::Piped => command
                .stdin(Stdio::null())
                .output()
                .map(|output| {
                    if !output.status.success() {
                        tracing::debug!(
                            stderr = %String::from_utf8_lossy(&output.stderr),
                            "command failed"
                        );
                    }
                    output.status
                }),
        }
        .map_err(|source| DevcnError::CommandSpawn {
            command: invocation.display(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(DevcnError::CommandFailed {
                command: invocation.display(),
                status: status.to_string(),
            })
        }
    }
}

#[cfg(test)]
pub mod mock;
