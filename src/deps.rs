//! 依存パッケージ抽出
//!
//! コンポーネント記述子のソースを静的に走査し、利用側でインストールが必要な
//! 外部パッケージを集める。

mod extract;
mod mapping;

pub use extract::{extract_dependencies, DependencySet};
pub use mapping::WorkspaceMapping;

#[cfg(test)]
use extract::{import_specifiers, package_id};
#[cfg(test)]
use mapping::Translation;

#[cfg(test)]
#[path = "deps_test.rs"]
mod tests;

#[cfg(test)]
#[path = "deps_proptests.rs"]
mod proptests;
