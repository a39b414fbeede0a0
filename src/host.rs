//! Capabilities consumed from the surrounding editor.

use crate::{cursor::Select, error::ShiftResult};

pub trait Host {
    /// None when no document is open / focused
    fn active_editor(&mut self) -> Option<&mut dyn TextEditor>;

    /// Informational message for the user, best effort.
    fn notify(&mut self, message: &str) -> ShiftResult<()>;
}

pub trait TextEditor {
    /// Ordered, non overlapping selections with from <= to. Carets are empty selections.
    fn selections(&self) -> Vec<Select>;

    /// Text spanned by select, lines joined with '\n'.
    fn text_in(&self, select: Select) -> ShiftResult<String>;

    /// Replaces every select with its text as a single undoable edit.
    /// Either all replacements are applied or none.
    fn replace_selections(&mut self, edits: Vec<(Select, String)>) -> ShiftResult<()>;
}
