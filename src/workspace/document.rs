use super::{
    actions::{Action, Actions, Edit, Record, Shift},
    utils::{copy_content, CharIndexed},
};
use crate::{
    cursor::{normalize, CursorPosition, Select},
    error::{ShiftError, ShiftResult},
    host::TextEditor,
};
use tracing::debug;

/// Line based text buffer with selections and undo history.
#[derive(Debug)]
pub struct Document {
    pub name: String,
    content: Vec<String>,
    selections: Vec<Select>,
    read_only: bool,
    actions: Actions,
}

impl Document {
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            content: text.split('\n').map(String::from).collect(),
            selections: vec![CursorPosition::default().caret()],
            read_only: false,
            actions: Actions::default(),
        }
    }

    pub fn text(&self) -> String {
        self.content.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.content
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_modified(&self) -> bool {
        !self.actions.is_saved()
    }

    pub fn mark_saved(&mut self) {
        self.actions.mark_saved();
    }

    pub fn set_selections(&mut self, selections: Vec<Select>) -> ShiftResult<()> {
        self.selections = self.checked(selections)?;
        Ok(())
    }

    pub fn select_all(&mut self) {
        let last = self.content.len() - 1;
        let end = CursorPosition { line: last, char: self.content[last].char_len() };
        self.selections = vec![(CursorPosition::default(), end)];
    }

    pub fn undo(&mut self) -> bool {
        match self.actions.undo(&mut self.content) {
            Some(selections) => {
                self.selections = selections;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.actions.redo(&mut self.content) {
            Some(selections) => {
                self.selections = selections;
                true
            }
            None => false,
        }
    }

    fn in_bounds(&self, position: CursorPosition) -> bool {
        match self.content.get(position.line) {
            Some(line) => position.char <= line.char_len(),
            None => false,
        }
    }

    /// normalized, sorted and validated against content
    fn checked(&self, selections: Vec<Select>) -> ShiftResult<Vec<Select>> {
        let mut selections = selections.into_iter().map(normalize).collect::<Vec<_>>();
        selections.sort();
        for select in selections.iter() {
            if !self.in_bounds(select.0) || !self.in_bounds(select.1) {
                return Err(ShiftError::OutOfBounds(*select));
            }
        }
        if selections.windows(2).any(|pair| pair[0].1 > pair[1].0) {
            return Err(ShiftError::OverlappingSelections);
        }
        Ok(selections)
    }
}

impl TextEditor for Document {
    fn selections(&self) -> Vec<Select> {
        self.selections.clone()
    }

    fn text_in(&self, select: Select) -> ShiftResult<String> {
        let (from, to) = normalize(select);
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return Err(ShiftError::OutOfBounds((from, to)));
        }
        Ok(copy_content(from, to, &self.content))
    }

    fn replace_selections(&mut self, edits: Vec<(Select, String)>) -> ShiftResult<()> {
        if self.read_only {
            return Err(ShiftError::ReadOnly(self.name.to_owned()));
        }
        let mut edits = edits.into_iter().map(|(select, text)| (normalize(select), text)).collect::<Vec<_>>();
        edits.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));
        self.checked(edits.iter().map(|(select, _)| *select).collect())?;
        if edits.is_empty() {
            return Ok(());
        }

        let before = std::mem::take(&mut self.selections);
        let mut shift = Shift::default();
        let mut done = Vec::with_capacity(edits.len());
        for ((from, to), text) in edits {
            let edit = Edit::replace_select(shift.position(from), shift.position(to), text, &mut self.content);
            shift.update(to, edit.end);
            done.push(edit);
        }
        let after = done.iter().map(Edit::new_select).collect::<Vec<_>>();
        debug!("{}: replaced {} selection(s)", self.name, after.len());
        self.selections = after.clone();
        self.actions.push_done(Record { action: Action::from(done), before, after });
        Ok(())
    }
}
