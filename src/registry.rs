//! コンポーネントレジストリ
//!
//! リモートレジストリからコンポーネント記述子と一覧を取得する。

mod client;
mod descriptor;
mod fallback;

pub use client::RegistryClient;
pub use descriptor::{ComponentDescriptor, RegistryIndex, RegistryItem};
#[cfg(test)]
pub use descriptor::FileEntry;
pub use fallback::fallback_index;

use crate::error::Result;
use reqwest::Url;
use std::future::Future;
use std::pin::Pin;

/// コンポーネント記述子の取得元
pub trait RegistrySource: Send + Sync {
    /// 名前からコンポーネント記述子のURLを組み立てる（スキャフォールドツールにも渡す）
    fn component_url(&self, name: &str) -> Result<Url>;

    /// コンポーネント記述子を取得
    fn fetch_component<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ComponentDescriptor>> + Send + 'a>>;

    /// レジストリ全体の一覧を取得
    fn fetch_index(&self) -> Pin<Box<dyn Future<Output = Result<RegistryIndex>> + Send + '_>>;
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
