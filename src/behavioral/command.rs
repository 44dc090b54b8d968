//! Command: wrap a request in an object so it can be stored and run later.

use std::rc::Rc;

use crate::util::transcript::Transcript;

pub trait Command {
    fn execute(&self, out: &mut Transcript);
}

/// Handles a simple request on its own.
pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self, out: &mut Transcript) {
        out.line(format!(
            "SimpleCommand: See, I can do simple things like printing ({})",
            self.payload
        ));
    }
}

/// Holds the actual business logic that commands delegate to.
#[derive(Debug, Default)]
pub struct Receiver;

impl Receiver {
    pub fn do_something(&self, a: &str, out: &mut Transcript) {
        out.line(format!("Receiver: Working on ({a}.)"));
    }

    pub fn do_something_else(&self, b: &str, out: &mut Transcript) {
        out.line(format!("Receiver: Also working on ({b}.)"));
    }
}

/// Delegates to a shared [`Receiver`] with its own context data.
pub struct ComplexCommand {
    receiver: Rc<Receiver>,
    a: String,
    b: String,
}

impl ComplexCommand {
    pub fn new(receiver: Rc<Receiver>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self, out: &mut Transcript) {
        out.line("ComplexCommand: Complex stuff should be done by a receiver object");
        self.receiver.do_something(&self.a, out);
        self.receiver.do_something_else(&self.b, out);
    }
}

/// Runs optional commands before and after its own work.
#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    pub fn do_something_important(&self, out: &mut Transcript) {
        out.line("Invoker: Does anybody want something done before I begin?");
        if let Some(command) = &self.on_start {
            command.execute(out);
        }

        out.line("Invoker: ...doing something really important...");

        out.line("Invoker: Does anybody want something done after I finish?");
        if let Some(command) = &self.on_finish {
            command.execute(out);
        }
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let mut invoker = Invoker::new();
    invoker.set_on_start(Box::new(SimpleCommand::new("Print this message!")));
    let receiver = Rc::new(Receiver);
    invoker.set_on_finish(Box::new(ComplexCommand::new(
        receiver,
        "Send email",
        "Save report",
    )));
    invoker.do_something_important(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoker_without_commands_only_narrates() {
        let mut out = Transcript::new();
        Invoker::new().do_something_important(&mut out);
        assert_eq!(out.len(), 3);
    }
}
