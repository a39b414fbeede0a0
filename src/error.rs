use crate::cursor::Select;
use std::fmt::Display;
use thiserror::Error;
pub type ShiftResult<T> = Result<T, ShiftError>;

#[derive(Error, Debug)]
pub enum ShiftError {
    ReadOnly(String),
    OutOfBounds(Select),
    OverlappingSelections,
    UnknownCommand(String),
    DuplicateCommand(String),
    InvalidSelect(String),
    Io(#[from] std::io::Error),
    IOError(String),
    GeneralError(String),
}

impl ShiftError {
    pub fn any(message: impl Into<String>) -> Self {
        Self::GeneralError(message.into())
    }

    pub fn io_err(message: impl Into<String>) -> Self {
        Self::IOError(message.into())
    }

    pub fn invalid_select(message: impl Into<String>) -> Self {
        Self::InvalidSelect(message.into())
    }
}

impl Display for ShiftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadOnly(name) => f.write_fmt(format_args!("Document {name} is read only!")),
            Self::OutOfBounds((from, to)) => f.write_fmt(format_args!(
                "Select {}:{} - {}:{} is out of document bounds!",
                from.line, from.char, to.line, to.char
            )),
            Self::OverlappingSelections => f.write_str("Selections overlap!"),
            Self::UnknownCommand(id) => f.write_fmt(format_args!("Unknown command: {id}")),
            Self::DuplicateCommand(id) => f.write_fmt(format_args!("Command already registered: {id}")),
            Self::InvalidSelect(message) => f.write_fmt(format_args!("Invalid select: {message}")),
            Self::Io(err) => {
                f.write_str("IO - ")?;
                Display::fmt(err, f)
            }
            Self::IOError(message) => f.write_fmt(format_args!("IO Err: {message}")),
            Self::GeneralError(message) => f.write_str(message),
        }
    }
}
