use crate::{case::toggle_case, error::ShiftResult, host::Host};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// no active editor, nothing was touched
    NoEditor,
    /// every selection already maps onto itself (carets, caseless text)
    Unchanged,
    /// number of selections whose text changed
    Applied(usize),
}

/// Toggles case of every selection in the active editor independently.
/// All replacements land in the host as one edit.
pub fn toggle_selections(host: &mut dyn Host) -> ShiftResult<Toggled> {
    let Some(editor) = host.active_editor() else {
        debug!("toggle case: no active editor");
        return Ok(Toggled::NoEditor);
    };

    let mut changed = 0;
    let mut edits = vec![];
    for select in editor.selections() {
        let text = editor.text_in(select)?;
        let new_text = toggle_case(&text);
        if new_text != text {
            changed += 1;
        }
        edits.push((select, new_text));
    }
    if changed == 0 {
        debug!("toggle case: {} selection(s) without change", edits.len());
        return Ok(Toggled::Unchanged);
    }

    // untouched selections are replaced with themselves so the host keeps all of them
    editor.replace_selections(edits)?;

    let message = match changed {
        1 => String::from("Case toggled"),
        n => format!("Case toggled in {n} selections"),
    };
    if let Err(error) = host.notify(&message) {
        warn!("toggle case notification failed: {error}");
    }
    Ok(Toggled::Applied(changed))
}
