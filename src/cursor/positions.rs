use std::fmt::Display;

pub type Select = (CursorPosition, CursorPosition);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CursorPosition {
    pub line: usize,
    pub char: usize, // this is char position not byte index
}

impl CursorPosition {
    pub const fn new(line: usize, char: usize) -> Self {
        Self { line, char }
    }

    pub const fn caret(self) -> Select {
        (self, self)
    }
}

impl From<(usize, usize)> for CursorPosition {
    fn from((line, char): (usize, usize)) -> Self {
        Self { line, char }
    }
}

impl Display for CursorPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}:{}", self.line, self.char))
    }
}

/// orders select so that from <= to
#[inline]
pub fn normalize((from, to): Select) -> Select {
    match from > to {
        true => (to, from),
        false => (from, to),
    }
}
