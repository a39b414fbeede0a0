use crate::{
    commands::{initialize, shutdown, ExtensionContext, TOGGLE_CASE},
    cursor::{normalize, CursorPosition, Select},
    error::{ShiftError, ShiftResult},
    workspace::{Document, Workspace},
};
use clap::Parser;
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File to edit, stdin is used when omitted
    pub path: Option<PathBuf>,
    /// Selection as LINE:COL or LINE:COL-LINE:COL (1-based), can be repeated; defaults to the whole text
    #[arg(short, long = "select", value_parser = parse_select)]
    pub selects: Vec<Select>,
    /// Command to execute on the selections
    #[arg(short, long, default_value = TOGGLE_CASE)]
    pub command: String,
    /// Write the result back into PATH instead of stdout
    #[arg(short, long)]
    pub in_place: bool,
    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn run(self) -> ShiftResult<()> {
        if self.in_place && self.path.is_none() {
            return Err(ShiftError::any("--in-place requires PATH!"));
        }
        let (name, text) = read_input(self.path.as_deref())?;

        let mut context = ExtensionContext::default();
        let handle = initialize(&mut context)?;
        let result = edit(&context, Document::new(name, &text), self.selects, &self.command);
        shutdown(&mut context, handle);
        let output = result?;

        match self.path {
            Some(path) if self.in_place => {
                if output != text {
                    std::fs::write(&path, output)?;
                    debug!("written {}", path.display());
                }
            }
            _ => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(output.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Opens document as the active editor, dispatches command and returns the resulting text.
pub fn edit(
    context: &ExtensionContext,
    mut document: Document,
    selects: Vec<Select>,
    command: &str,
) -> ShiftResult<String> {
    match selects.is_empty() {
        true => document.select_all(),
        false => document.set_selections(selects)?,
    }
    let mut ws = Workspace::new();
    ws.open(document);
    context.execute(command, &mut ws)?;
    ws.close_active().map(|document| document.text()).ok_or_else(|| ShiftError::any("Document was closed!"))
}

fn read_input(path: Option<&Path>) -> ShiftResult<(String, String)> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|err| ShiftError::io_err(format!("{}: {err}", path.display())))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok((String::from("stdin"), text))
        }
    }
}

/// LINE:COL or LINE:COL-LINE:COL, 1-based
pub fn parse_select(text: &str) -> ShiftResult<Select> {
    let select = match text.split_once('-') {
        Some((from, to)) => (parse_position(from)?, parse_position(to)?),
        None => parse_position(text)?.caret(),
    };
    Ok(normalize(select))
}

fn parse_position(text: &str) -> ShiftResult<CursorPosition> {
    let Some((line, col)) = text.trim().split_once(':') else {
        return Err(ShiftError::invalid_select(format!("expected LINE:COL, found {text:?}")));
    };
    Ok(CursorPosition { line: parse_index(line)? - 1, char: parse_index(col)? - 1 })
}

fn parse_index(text: &str) -> ShiftResult<usize> {
    match text.trim().parse::<usize>() {
        Ok(0) => Err(ShiftError::invalid_select("lines and columns start at 1")),
        Ok(idx) => Ok(idx),
        Err(err) => Err(ShiftError::invalid_select(format!("{text:?} - {err}"))),
    }
}

#[cfg(test)]
mod tests;
