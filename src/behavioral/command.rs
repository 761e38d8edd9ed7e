// Command: wrap a request in an object so invokers can be configured,
// and requests replayed or undone.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::dispatch::Placeholder;
use crate::error::{PatternError, Result};

/// Receiver: the thing commands act upon.
#[derive(Debug, Default)]
pub struct Light {
    is_on: bool,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, out: &mut dyn Write) -> Result<()> {
        self.is_on = true;
        writeln!(out, "The light is on")?;
        Ok(())
    }

    pub fn off(&mut self, out: &mut dyn Write) -> Result<()> {
        self.is_on = false;
        writeln!(out, "The light is off")?;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
    fn undo(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.light.borrow_mut().on(out)
    }

    fn undo(&self, out: &mut dyn Write) -> Result<()> {
        self.light.borrow_mut().off(out)
    }
}

pub struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.light.borrow_mut().off(out)
    }

    fn undo(&self, out: &mut dyn Write) -> Result<()> {
        self.light.borrow_mut().on(out)
    }
}

impl Command for Placeholder {
    fn execute(&self, _out: &mut dyn Write) -> Result<()> {
        Placeholder::fail("Command", "execute")
    }

    fn undo(&self, _out: &mut dyn Write) -> Result<()> {
        Placeholder::fail("Command", "undo")
    }
}

// ============================================================================
// Invoker
// ============================================================================

/// Holds one command slot and remembers what it executed.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Rc<dyn Command>>,
    history: Vec<Rc<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Rc<dyn Command>) {
        self.command = Some(command);
    }

    pub fn press_button(&mut self, out: &mut dyn Write) -> Result<()> {
        let command = self
            .command
            .clone()
            .ok_or_else(|| PatternError::invalid("remote control has no command assigned"))?;
        command.execute(out)?;
        self.history.push(command);
        Ok(())
    }

    /// Undo the most recent successful press. Returns false when there is nothing to undo.
    pub fn undo_last(&mut self, out: &mut dyn Write) -> Result<bool> {
        match self.history.pop() {
            Some(command) => {
                command.undo(out)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let light = Rc::new(RefCell::new(Light::new()));
    let light_on: Rc<dyn Command> = Rc::new(LightOnCommand::new(Rc::clone(&light)));
    let light_off: Rc<dyn Command> = Rc::new(LightOffCommand::new(Rc::clone(&light)));

    let mut remote = RemoteControl::new();

    remote.set_command(light_on);
    remote.press_button(out)?;

    remote.set_command(light_off);
    remote.press_button(out)?;
    Ok(())
}
