mod actions;
mod document;
mod utils;

use crate::{
    error::ShiftResult,
    host::{Host, TextEditor},
};
pub use document::Document;
use tracing::info;
pub use utils::CharIndexed;

/// In-memory host: open documents, one of them active, and collected notifications.
#[derive(Debug, Default)]
pub struct Workspace {
    editors: Vec<Document>,
    active: usize,
    messages: Vec<String>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// opened document becomes active
    pub fn open(&mut self, document: Document) {
        self.editors.push(document);
        self.active = self.editors.len() - 1;
    }

    pub fn get_active(&mut self) -> Option<&mut Document> {
        self.editors.get_mut(self.active)
    }

    pub fn activate(&mut self, name: &str) -> bool {
        match self.editors.iter().position(|doc| doc.name == name) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    pub fn close_active(&mut self) -> Option<Document> {
        if self.editors.is_empty() {
            return None;
        }
        let document = self.editors.remove(self.active);
        self.active = self.active.min(self.editors.len().saturating_sub(1));
        Some(document)
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Host for Workspace {
    fn active_editor(&mut self) -> Option<&mut dyn TextEditor> {
        self.get_active().map(|doc| doc as &mut dyn TextEditor)
    }

    fn notify(&mut self, message: &str) -> ShiftResult<()> {
        info!("{message}");
        self.messages.push(message.to_owned());
        Ok(())
    }
}
