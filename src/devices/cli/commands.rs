//! Built-in console commands.
use super::{Command, Context, Error, Status};
use crate::hal::serial;
use ufmt::uwrite;

/// Built-in commands, ready to be composed with board commands.
pub fn builtins<S: serial::Write>() -> [Command<S>; 4] {
    [
        Command::new("debug", "Reports or sets debug output. Usage: debug <1|0>", debug),
        Command::new("accel", "Prints the filtered accelerometer reading.", accel),
        Command::new("threads", "Lists scheduled tasks and their run counts.", threads),
        Command::new("help", "Lists commands. Usage: help [command]", help),
    ]
}

/// `debug` prints the flag, `debug 1` and `debug 0` set it first. Anything
/// else leaves the flag untouched and prints the usage line.
fn debug<S: serial::Write>(context: &mut Context<'_, S>, arguments: &[&str]) -> Status {
    let well_formed = match arguments {
        [] => true,
        ["1"] => {
            context.telemetry.set_debug(true);
            true
        }
        ["0"] => {
            context.telemetry.set_debug(false);
            true
        }
        _ => false,
    };

    let value = u8::from(context.telemetry.debug());
    let mut stream = context.stream();
    uwrite!(stream, "debug = {}\r\n", value).ok();
    if !well_formed {
        uwrite!(stream, "Usage: debug <1|0>\r\n").ok();
    }
    Ok(())
}

fn accel<S: serial::Write>(context: &mut Context<'_, S>, arguments: &[&str]) -> Status {
    if !arguments.is_empty() {
        return Err(Error::MalformedArguments);
    }
    let reading = context.telemetry.reading();
    let mut stream = context.stream();
    uwrite!(stream, "X:{}, Y:{}\r\n", reading.x, reading.y).ok();
    Ok(())
}

fn threads<S: serial::Write>(context: &mut Context<'_, S>, arguments: &[&str]) -> Status {
    let tasks = context.tasks;
    let mut stream = context.stream();
    if !arguments.is_empty() {
        uwrite!(stream, "Usage: threads\r\n").ok();
        return Ok(());
    }
    uwrite!(stream, "Tasks:\r\n").ok();
    for task in tasks {
        uwrite!(
            stream,
            "  {} - every {}ms, {} runs\r\n",
            task.name(),
            task.period().0,
            task.runs()
        )
        .ok();
    }
    Ok(())
}

fn help<S: serial::Write>(context: &mut Context<'_, S>, arguments: &[&str]) -> Status {
    let commands = context.commands;
    let mut stream = context.stream();
    match arguments {
        [] => {
            uwrite!(stream, "Commands:\r\n").ok();
            for command in commands {
                uwrite!(stream, "  {} - {}\r\n", command.name, command.help).ok();
            }
            Ok(())
        }
        [name] => {
            let command =
                commands.iter().find(|c| c.name == *name).ok_or(Error::CommandUnknown)?;
            uwrite!(stream, "{} - {}\r\n", command.name, command.help).ok();
            Ok(())
        }
        _ => Err(Error::MalformedArguments),
    }
}
