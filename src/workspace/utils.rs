use crate::cursor::CursorPosition;

/// char based indexing over utf8 text
pub trait CharIndexed {
    fn char_len(&self) -> usize;
    /// byte index of char position, text len if the position is at (or past) the end
    fn byte_at(&self, char: usize) -> usize;
}

impl CharIndexed for str {
    #[inline]
    fn char_len(&self) -> usize {
        self.chars().count()
    }

    #[inline]
    fn byte_at(&self, char: usize) -> usize {
        self.char_indices().nth(char).map(|(idx, _)| idx).unwrap_or(self.len())
    }
}

/// returns position at the end of the inserted clip
pub fn insert_clip(clip: &str, content: &mut Vec<String>, mut cursor: CursorPosition) -> CursorPosition {
    let mut lines = clip.split('\n').collect::<Vec<_>>();
    if lines.len() == 1 {
        let line = &mut content[cursor.line];
        let idx = line.byte_at(cursor.char);
        line.insert_str(idx, clip);
        cursor.char += clip.char_len();
        return cursor;
    };

    let first_line = &mut content[cursor.line];
    let idx = first_line.byte_at(cursor.char);
    let mut last_line = first_line.split_off(idx);
    first_line.push_str(lines.remove(0));

    let prefix = lines.remove(lines.len() - 1); // len is already checked
    cursor.line += 1;
    cursor.char = prefix.char_len();

    last_line.insert_str(0, prefix);
    content.insert(cursor.line, last_line);

    for new_line in lines {
        content.insert(cursor.line, new_line.to_owned());
        cursor.line += 1;
    }

    cursor
}

/// panics if out of bounds
pub fn clip_content(from: CursorPosition, to: CursorPosition, content: &mut Vec<String>) -> String {
    if from.line == to.line {
        let line = &mut content[from.line];
        let range = line.byte_at(from.char)..line.byte_at(to.char);
        let clip = line[range.clone()].to_owned();
        line.replace_range(range, "");
        return clip;
    };
    let next_line_idx = from.line + 1;
    let idx = content[from.line].byte_at(from.char);
    let clip_init = content[from.line].split_off(idx);
    let clip =
        content.drain(next_line_idx..to.line).fold(clip_init, |clip, next_line| push_on_newline(clip, &next_line));
    let final_clip = content.remove(next_line_idx);
    let (clipped, remaining) = final_clip.split_at(final_clip.byte_at(to.char));
    content[from.line].push_str(remaining);
    push_on_newline(clip, clipped)
}

/// panics if out of bounds
pub fn copy_content(from: CursorPosition, to: CursorPosition, content: &[String]) -> String {
    if from.line == to.line {
        let line = &content[from.line];
        return line[line.byte_at(from.char)..line.byte_at(to.char)].to_owned();
    };
    let first = &content[from.line];
    let clip_init = first[first.byte_at(from.char)..].to_owned();
    let clip = content[from.line + 1..to.line].iter().fold(clip_init, |clip, line| push_on_newline(clip, line));
    let last = &content[to.line];
    push_on_newline(clip, &last[..last.byte_at(to.char)])
}

#[inline(always)]
fn push_on_newline(mut buf: String, string: &str) -> String {
    buf.push('\n');
    buf.push_str(string);
    buf
}
