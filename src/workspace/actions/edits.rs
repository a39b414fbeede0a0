use super::super::utils::{clip_content, insert_clip};
use crate::cursor::{CursorPosition, Select};

#[derive(Debug, Clone, PartialEq)]
pub struct Edit {
    pub select: Select,
    pub end: CursorPosition,
    pub text: String,
    pub reverse: String,
}

impl Edit {
    /// replaces select with clip, keeping the removed text for undo
    pub fn replace_select(from: CursorPosition, to: CursorPosition, clip: String, content: &mut Vec<String>) -> Self {
        let reverse = clip_content(from, to, content);
        let end = if !clip.is_empty() { insert_clip(&clip, content, from) } else { from };
        Self { select: (from, to), end, text: clip, reverse }
    }

    pub fn apply(&self, content: &mut Vec<String>) {
        let (from, to) = self.select;
        clip_content(from, to, content);
        if !self.text.is_empty() {
            insert_clip(&self.text, content, from);
        }
    }

    pub fn apply_rev(&self, content: &mut Vec<String>) {
        let from = self.select.0;
        clip_content(from, self.end, content);
        if !self.reverse.is_empty() {
            insert_clip(&self.reverse, content, from);
        }
    }

    #[inline]
    pub fn new_select(&self) -> Select {
        (self.select.0, self.end)
    }
}

/// Tracks how positions after already applied edits move.
/// Edits must be fed in ascending order.
#[derive(Debug, Default)]
pub struct Shift {
    lines: isize,
    last_line: Option<usize>,
    chars: isize,
}

impl Shift {
    pub fn position(&self, position: CursorPosition) -> CursorPosition {
        let line = (position.line as isize + self.lines) as usize;
        match self.last_line == Some(position.line) {
            true => CursorPosition { line, char: (position.char as isize + self.chars) as usize },
            false => CursorPosition { line, char: position.char },
        }
    }

    /// original end of the replaced range and the end of inserted text
    pub fn update(&mut self, to: CursorPosition, end: CursorPosition) {
        self.lines = end.line as isize - to.line as isize;
        self.last_line = Some(to.line);
        self.chars = end.char as isize - to.char as isize;
    }
}
