use crate::config::DocdeckConfig;
use crate::render::SectionView;
use serde::Serialize;

pub mod config;
pub mod copy;
pub mod export;
pub mod langs;
pub mod list;
pub mod search;
pub mod view;

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

/// One navigation-pane row: a section reduced to what the list shows.
#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    pub id: String,
    pub title: String,
    pub endpoint_count: usize,
}

/// An example resolved for copying, with enough context to label it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedExample {
    pub url: String,
    pub language: String,
    pub code: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub summaries: Vec<SectionSummary>,
    pub views: Vec<SectionView>,
    pub languages: Vec<String>,
    pub copied: Option<CopiedExample>,
    pub config: Option<DocdeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_summaries(mut self, summaries: Vec<SectionSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_views(mut self, views: Vec<SectionView>) -> Self {
        self.views = views;
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_copied(mut self, copied: CopiedExample) -> Self {
        self.copied = Some(copied);
        self
    }

    pub fn with_config(mut self, config: DocdeckConfig) -> Self {
        self.config = Some(config);
        self
    }
}
