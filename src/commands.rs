use crate::{
    adapter::toggle_selections,
    error::{ShiftError, ShiftResult},
    host::Host,
};
use std::collections::HashMap;
use tracing::{debug, info};

pub const TOGGLE_CASE: &str = "shift-case.toggleCase";

pub type CommandCallback = fn(&mut dyn Host) -> ShiftResult<()>;

#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandCallback>,
}

impl CommandRegistry {
    pub fn register(&mut self, id: &'static str, callback: CommandCallback) -> ShiftResult<()> {
        if self.commands.contains_key(id) {
            return Err(ShiftError::DuplicateCommand(id.to_owned()));
        }
        self.commands.insert(id, callback);
        debug!("registered command {id}");
        Ok(())
    }

    pub fn unregister(&mut self, id: &str) -> bool {
        self.commands.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.commands.contains_key(id)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids = self.commands.keys().copied().collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    pub fn execute(&self, id: &str, host: &mut dyn Host) -> ShiftResult<()> {
        let callback = self.commands.get(id).ok_or_else(|| ShiftError::UnknownCommand(id.to_owned()))?;
        debug!("executing {id}");
        (callback)(host)
    }
}

/// Commands owned by one activation, released by [shutdown].
#[derive(Debug)]
#[must_use]
pub struct RegistrationHandle {
    ids: Vec<&'static str>,
}

impl RegistrationHandle {
    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }
}

#[derive(Debug, Default)]
pub struct ExtensionContext {
    pub registry: CommandRegistry,
}

impl ExtensionContext {
    pub fn execute(&self, id: &str, host: &mut dyn Host) -> ShiftResult<()> {
        self.registry.execute(id, host)
    }
}

fn toggle_case_command(host: &mut dyn Host) -> ShiftResult<()> {
    toggle_selections(host).map(|_| ())
}

pub fn initialize(context: &mut ExtensionContext) -> ShiftResult<RegistrationHandle> {
    context.registry.register(TOGGLE_CASE, toggle_case_command)?;
    info!("shift case active");
    Ok(RegistrationHandle { ids: vec![TOGGLE_CASE] })
}

pub fn shutdown(context: &mut ExtensionContext, handle: RegistrationHandle) {
    for id in handle.ids {
        context.registry.unregister(id);
    }
    info!("shift case deactivated");
}
