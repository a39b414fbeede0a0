mod edits;

use crate::cursor::Select;
pub use edits::{Edit, Shift};

#[derive(Debug)]
pub enum Action {
    Single(Edit),
    Multi(Vec<Edit>),
}

impl Action {
    pub fn apply(&self, content: &mut Vec<String>) {
        match self {
            Self::Single(edit) => edit.apply(content),
            Self::Multi(edits) => edits.iter().for_each(|edit| edit.apply(content)),
        }
    }

    pub fn apply_rev(&self, content: &mut Vec<String>) {
        match self {
            Self::Single(edit) => edit.apply_rev(content),
            Self::Multi(edits) => edits.iter().rev().for_each(|edit| edit.apply_rev(content)),
        }
    }
}

impl From<Vec<Edit>> for Action {
    fn from(mut edits: Vec<Edit>) -> Self {
        match edits.len() {
            1 => Self::Single(edits.remove(0)),
            _ => Self::Multi(edits),
        }
    }
}

/// Undo entry, selections are restored alongside content
#[derive(Debug)]
pub struct Record {
    pub action: Action,
    pub before: Vec<Select>,
    pub after: Vec<Select>,
}

#[derive(Debug)]
pub struct Actions {
    done: Vec<Record>,
    undone: Vec<Record>,
    saved: Option<usize>,
}

impl Default for Actions {
    fn default() -> Self {
        Self { done: Vec::new(), undone: Vec::new(), saved: Some(0) }
    }
}

impl Actions {
    pub fn push_done(&mut self, record: Record) {
        if matches!(self.saved, Some(saved) if saved > self.done.len()) {
            // saved state lived on the redo stack
            self.saved = None;
        }
        self.undone.clear();
        self.done.push(record);
    }

    pub fn undo(&mut self, content: &mut Vec<String>) -> Option<Vec<Select>> {
        let record = self.done.pop()?;
        record.action.apply_rev(content);
        let selections = record.before.clone();
        self.undone.push(record);
        Some(selections)
    }

    pub fn redo(&mut self, content: &mut Vec<String>) -> Option<Vec<Select>> {
        let record = self.undone.pop()?;
        record.action.apply(content);
        let selections = record.after.clone();
        self.done.push(record);
        Some(selections)
    }

    pub fn mark_saved(&mut self) {
        self.saved = Some(self.done.len());
    }

    pub fn is_saved(&self) -> bool {
        self.saved == Some(self.done.len())
    }
}
