use crate::cache::CacheSnapshot;
use crate::config::ToolbeltConfig;
use crate::model::Entry;

pub mod add;
pub mod config;
pub mod list;
pub mod new;
pub mod remember;
pub mod suggest;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub entries: Vec<Entry>,
    pub suggestions: Vec<String>,
    pub cache: Option<CacheSnapshot>,
    pub config: Option<ToolbeltConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_cache(mut self, cache: CacheSnapshot) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_config(mut self, config: ToolbeltConfig) -> Self {
        self.config = Some(config);
        self
    }
}
