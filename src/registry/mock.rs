//! テスト用インメモリレジストリ

use super::*;
use crate::config::RegistryConfig;
use crate::error::DevcnError;
use std::collections::HashMap;

/// 名前→記述子のマップを返すレジストリ。未登録の名前は 404 扱い。
pub struct MockRegistry {
    config: RegistryConfig,
    components: HashMap<String, ComponentDescriptor>,
    index: Option<RegistryIndex>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::new("https://registry.test/").unwrap(),
            components: HashMap::new(),
            index: None,
        }
    }

    pub fn with_component(mut self, name: &str, descriptor: ComponentDescriptor) -> Self {
        self.components.insert(name.to_string(), descriptor);
        self
    }

    pub fn with_index(mut self, index: RegistryIndex) -> Self {
        self.index = Some(index);
        self
    }
}

impl RegistrySource for MockRegistry {
    fn component_url(&self, name: &str) -> Result<Url> {
        self.config.component_url(name)
    }

    fn fetch_component<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ComponentDescriptor>> + Send + 'a>> {
        Box::pin(async move {
            self.components
                .get(name)
                .cloned()
                .ok_or_else(|| DevcnError::RegistryFetch {
                    url: self.config.component_url(name).map(|u| u.to_string()).unwrap_or_default(),
                    status: 404,
                })
        })
    }

    fn fetch_index(&self) -> Pin<Box<dyn Future<Output = Result<RegistryIndex>> + Send + '_>> {
        Box::pin(async move {
            self.index.clone().ok_or_else(|| DevcnError::RegistryFetch {
                url: "https://registry.test/registry.json".to_string(),
                status: 503,
            })
        })
    }
}

/// 1ファイルだけの記述子を作る
pub fn single_file_descriptor(path: &str, content: &str) -> ComponentDescriptor {
    ComponentDescriptor {
        name: None,
        kind: None,
        files: vec![FileEntry {
            path: path.to_string(),
            content: content.to_string(),
            kind: "registry:ui".to_string(),
        }],
    }
}
