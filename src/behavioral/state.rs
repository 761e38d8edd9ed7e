// State: an object changes behavior when its internal state changes.
//
// Each state handles a request and names its successor; the context installs
// the successor after the handler returns.

use std::io::Write;

use crate::dispatch::Placeholder;
use crate::error::Result;

pub trait State {
    fn name(&self) -> &'static str;

    /// Handle one request and return the state to switch to.
    fn handle(&self, out: &mut dyn Write) -> Result<Box<dyn State>>;
}

pub struct ConcreteStateA;

impl State for ConcreteStateA {
    fn name(&self) -> &'static str {
        "ConcreteStateA"
    }

    fn handle(&self, out: &mut dyn Write) -> Result<Box<dyn State>> {
        writeln!(out, "State A handling request.")?;
        Ok(Box::new(ConcreteStateB))
    }
}

pub struct ConcreteStateB;

impl State for ConcreteStateB {
    fn name(&self) -> &'static str {
        "ConcreteStateB"
    }

    fn handle(&self, out: &mut dyn Write) -> Result<Box<dyn State>> {
        writeln!(out, "State B handling request.")?;
        Ok(Box::new(ConcreteStateA))
    }
}

impl State for Placeholder {
    fn name(&self) -> &'static str {
        "State"
    }

    fn handle(&self, _out: &mut dyn Write) -> Result<Box<dyn State>> {
        Placeholder::fail("State", "handle")
    }
}

pub struct Context {
    state: Box<dyn State>,
}

impl Context {
    pub fn new(state: Box<dyn State>, out: &mut dyn Write) -> Result<Self> {
        announce(state.as_ref(), out)?;
        Ok(Self { state })
    }

    pub fn set_state(&mut self, state: Box<dyn State>, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(from = self.state.name(), to = state.name(), "state transition");
        announce(state.as_ref(), out)?;
        self.state = state;
        Ok(())
    }

    /// Delegate to the current state. A failing handler leaves the state unchanged.
    pub fn request(&mut self, out: &mut dyn Write) -> Result<()> {
        let next = self.state.handle(out)?;
        self.set_state(next, out)
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }
}

fn announce(state: &dyn State, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "State changed to {}", state.name())?;
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut context = Context::new(Box::new(ConcreteStateA), out)?;
    context.request(out)?;
    context.request(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;
    use std::io;

    #[test]
    fn test_states_alternate() {
        let mut context = Context::new(Box::new(ConcreteStateB), &mut io::sink()).unwrap();
        assert_eq!(context.state_name(), "ConcreteStateB");

        context.request(&mut io::sink()).unwrap();
        assert_eq!(context.state_name(), "ConcreteStateA");

        context.request(&mut io::sink()).unwrap();
        assert_eq!(context.state_name(), "ConcreteStateB");
    }

    #[test]
    fn test_placeholder_state_keeps_context_unchanged() {
        let mut out: Vec<u8> = Vec::new();
        let mut context = Context::new(Box::new(Placeholder), &mut out).unwrap();

        let err = context.request(&mut out).unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnimplementedOperation {
                role: "State",
                operation: "handle"
            }
        ));
        assert_eq!(context.state_name(), "State");
        assert_eq!(String::from_utf8(out).unwrap(), "State changed to State\n");
    }

    #[test]
    fn test_transcript() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "State changed to ConcreteStateA\n\
             State A handling request.\n\
             State changed to ConcreteStateB\n\
             State B handling request.\n\
             State changed to ConcreteStateA\n"
        );
    }
}
