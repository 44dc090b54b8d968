//! Bridge: split an abstraction from its implementation so both vary independently.

use crate::util::transcript::Transcript;

/// Primitive operations a platform provides.
pub trait Implementation {
    fn operation_implementation(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformA;

impl Implementation for PlatformA {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationA: Here's the result on the platform A.".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformB;

impl Implementation for PlatformB {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationB: Here's the result on the platform B.".to_string()
    }
}

/// The "governing" side: high-level operations built on an [`Implementation`].
pub trait Abstraction {
    fn operation(&self) -> String;
}

pub struct BaseAbstraction {
    implementation: Box<dyn Implementation>,
}

impl BaseAbstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Abstraction for BaseAbstraction {
    fn operation(&self) -> String {
        format!(
            "Abstraction: Base operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

/// Extends the abstraction side without touching any implementation.
pub struct ExtendedAbstraction {
    implementation: Box<dyn Implementation>,
}

impl ExtendedAbstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Abstraction for ExtendedAbstraction {
    fn operation(&self) -> String {
        format!(
            "ExtendedAbstraction: Extended operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

fn client_code(abstraction: &dyn Abstraction, out: &mut Transcript) {
    out.block(&abstraction.operation());
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    client_code(&BaseAbstraction::new(Box::new(PlatformA)), &mut out);
    out.blank();
    client_code(&ExtendedAbstraction::new(Box::new(PlatformB)), &mut out);
    out
}
