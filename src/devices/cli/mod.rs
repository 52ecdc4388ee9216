//! Console command table.
//!
//! The console engine tokenizes a line and hands the command name and its
//! arguments to a [`CommandTable`], which dispatches to the first command
//! registered under that name. Built-in commands live in [`commands`];
//! boards compose them with their own (e.g. file system commands) into a
//! single slice.
use crate::{
    devices::{scheduler::TaskRecord, telemetry::Telemetry},
    hal::serial::{self, Stream},
    utilities::iterator::Unique,
};

pub mod commands;

/// Command level errors, returned to the console engine which is in
/// charge of reporting them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Error {
    CommandUnknown,
    MalformedArguments,
    /// External command failure, carrying the command's own status code.
    Failed(u8),
}

pub type Status = Result<(), Error>;

pub type Handler<S> = fn(&mut Context<'_, S>, &[&str]) -> Status;

/// Everything a command handler can reach.
pub struct Context<'a, S: serial::Write> {
    pub serial: &'a mut S,
    pub telemetry: &'a Telemetry,
    pub commands: &'a [Command<S>],
    pub tasks: &'a [&'a TaskRecord],
}

impl<'a, S: serial::Write> Context<'a, S> {
    /// Formattable view over the session's serial stream.
    pub fn stream(&mut self) -> Stream<'_, S> { Stream::new(&mut *self.serial) }
}

pub struct Command<S: serial::Write> {
    pub name: &'static str,
    pub help: &'static str,
    pub handler: Handler<S>,
}

impl<S: serial::Write> Command<S> {
    pub const fn new(name: &'static str, help: &'static str, handler: Handler<S>) -> Self {
        Self { name, help, handler }
    }
}

impl<S: serial::Write> Clone for Command<S> {
    fn clone(&self) -> Self { *self }
}

impl<S: serial::Write> Copy for Command<S> {}

pub struct CommandTable<'a, S: serial::Write> {
    commands: &'a [Command<S>],
    tasks: &'a [&'a TaskRecord],
}

impl<'a, S: serial::Write> CommandTable<'a, S> {
    pub fn new(commands: &'a [Command<S>]) -> Result<Self, crate::error::Error> {
        if commands.iter().map(|c| c.name).all_unique() {
            Ok(Self { commands, tasks: &[] })
        } else {
            Err(crate::error::Error::ConfigurationError("Command names must be unique"))
        }
    }

    /// Exposes the scheduler's task records to the commands.
    pub fn with_tasks(self, tasks: &'a [&'a TaskRecord]) -> Self { Self { tasks, ..self } }

    pub fn execute(
        &self,
        name: &str,
        arguments: &[&str],
        serial: &mut S,
        telemetry: &Telemetry,
    ) -> Status {
        let command =
            self.commands.iter().find(|c| c.name == name).ok_or(Error::CommandUnknown)?;
        let mut context =
            Context { serial, telemetry, commands: self.commands, tasks: self.tasks };
        (command.handler)(&mut context, arguments)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }
}
