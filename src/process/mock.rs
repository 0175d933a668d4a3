//! テスト用コマンドランナー

use super::*;
use std::sync::Mutex;

/// 実行されたコマンドを記録し、指定した引数を含むコマンドだけ失敗させる
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    failing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 引数に `needle` を含む呼び出しを失敗させる
    pub fn failing_on(mut self, needle: &str) -> Self {
        self.failing.push(needle.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// 表示形式のコマンドライン一覧
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(Invocation::display).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.calls.lock().unwrap().push(invocation.clone());

        let fails = self
            .failing
            .iter()
            .any(|needle| invocation.args.iter().any(|a| a == needle));

        if fails {
            Err(DevcnError::CommandFailed {
                command: invocation.display(),
                status: "exit status: 1".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
