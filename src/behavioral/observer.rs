//! Observer: subscribers react when a subject's state changes.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::util::transcript::Transcript;

/// Upper bound (exclusive) of the states [`RandomState`] draws.
pub const STATE_LIMIT: u8 = 10;

/// Where the subject's next state comes from.
pub trait StateSource {
    fn next_state(&mut self) -> u8;
}

impl<F: FnMut() -> u8> StateSource for F {
    fn next_state(&mut self) -> u8 {
        self()
    }
}

/// Uniform draws in `0..STATE_LIMIT`, reproducible when seeded.
pub struct RandomState {
    rng: StdRng,
}

impl RandomState {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl StateSource for RandomState {
    fn next_state(&mut self) -> u8 {
        self.rng.gen_range(0..STATE_LIMIT)
    }
}

pub trait Observer {
    /// React to the subject's current state; `None` means "not interested".
    fn update(&self, subject: &Subject) -> Option<String>;
}

/// Reacts to low states.
#[derive(Debug, Default)]
pub struct ObserverA;

impl Observer for ObserverA {
    fn update(&self, subject: &Subject) -> Option<String> {
        match subject.state() {
            Some(state) if state < 3 => Some("ConcreteObserverA: Reacted to the event".into()),
            _ => None,
        }
    }
}

/// Reacts to zero and to anything from two upwards.
#[derive(Debug, Default)]
pub struct ObserverB;

impl Observer for ObserverB {
    fn update(&self, subject: &Subject) -> Option<String> {
        match subject.state() {
            Some(state) if state == 0 || state >= 2 => {
                Some("ConcreteObserverB: Reacted to the event".into())
            }
            _ => None,
        }
    }
}

/// Publisher that owns some state and tells its subscribers when it changes.
#[derive(Default)]
pub struct Subject {
    state: Option<u8>,
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<u8> {
        self.state
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>, out: &mut Transcript) {
        out.line("Subject: Attached an observer.");
        self.observers.push(observer);
    }

    /// Remove the first subscription of this exact observer. Returns false if absent.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) -> bool {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(pos) => {
                self.observers.remove(pos);
                true
            }
            None => {
                debug!("detach of an unknown observer ignored");
                false
            }
        }
    }

    pub fn notify(&self, out: &mut Transcript) {
        out.line("Subject: Notifying observers...");
        for observer in &self.observers {
            if let Some(reaction) = observer.update(self) {
                out.line(reaction);
            }
        }
    }

    /// Change state from `source`, then notify.
    #[instrument(level = "debug", skip_all)]
    pub fn some_business_logic(&mut self, source: &mut dyn StateSource, out: &mut Transcript) {
        out.blank();
        out.line("Subject: I'm doing something important.");
        let state = source.next_state();
        self.state = Some(state);
        out.line(format!("Subject: My state has just changed to: {state}"));
        self.notify(out);
    }
}

/// Runs `rounds` changes with both observers attached, then one more without A.
#[instrument(level = "debug")]
pub fn demo(seed: Option<u64>, rounds: usize) -> Transcript {
    let mut source = RandomState::new(seed);
    run(&mut source, rounds)
}

pub fn run(source: &mut dyn StateSource, rounds: usize) -> Transcript {
    let mut out = Transcript::new();
    let mut subject = Subject::new();

    let observer_a: Rc<dyn Observer> = Rc::new(ObserverA);
    subject.attach(Rc::clone(&observer_a), &mut out);
    subject.attach(Rc::new(ObserverB), &mut out);

    for _ in 0..rounds {
        subject.some_business_logic(source, &mut out);
    }

    subject.detach(&observer_a);
    subject.some_business_logic(source, &mut out);
    out
}
