//! Editor command toggling the letter case of selected text.
//!
//! [case::toggle_case] holds the transformation, [adapter::toggle_selections] applies it through
//! any [host::Host], and [commands] binds it to `shift-case.toggleCase`. [workspace] is an
//! in-memory host used by the `shift-case` binary.

pub mod adapter;
pub mod case;
pub mod cli;
pub mod commands;
pub mod cursor;
pub mod error;
pub mod host;
pub mod workspace;
