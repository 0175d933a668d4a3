use super::{RegistryIndex, RegistryItem};

/// レジストリ一覧が取得できないときに使う組み込みスナップショット
const KNOWN_COMPONENTS: &[(&str, &str)] = &[
    ("ai-branch", "AI conversation branch component for displaying branched conversations"),
    ("ai-conversation", "AI conversation container component"),
    ("ai-input", "AI chat input component with advanced features"),
    ("ai-message", "AI message display component"),
    ("ai-reasoning", "AI reasoning visualization component"),
    ("ai-response", "AI response component with streaming support"),
    ("ai-server", "AI server component utilities"),
    ("ai-simple", "Simple AI component for basic interactions"),
    ("ai-source", "AI source attribution component"),
    ("ai-suggestion", "AI suggestion component for prompts and recommendations"),
    ("ai-tool", "AI tool component for function calling interfaces"),
    ("code-block", "Enhanced code block component with syntax highlighting"),
    ("editor", "Code editor component"),
    ("snippet", "Code snippet component"),
];

pub fn fallback_index() -> RegistryIndex {
    RegistryIndex {
        items: KNOWN_COMPONENTS
            .iter()
            .map(|(name, description)| RegistryItem::new(name, description))
            .collect(),
    }
}
