//! Factory Method: subclasses decide which product the shared logic works with.

use crate::util::transcript::Transcript;

pub trait Product {
    fn operation(&self) -> String;
}

pub struct Product1;

impl Product for Product1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

pub struct Product2;

impl Product for Product2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    /// Business logic that only sees the product through its trait.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

pub struct Creator1;

impl Creator for Creator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(Product1)
    }
}

pub struct Creator2;

impl Creator for Creator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(Product2)
    }
}

fn client_code(creator: &dyn Creator, out: &mut Transcript) {
    out.line("Client: I'm not aware of the creator's class, but it still works.");
    out.line(creator.some_operation());
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    out.line("App: Launched with the ConcreteCreator1.");
    client_code(&Creator1, &mut out);
    out.blank();
    out.line("App: Launched with the ConcreteCreator2.");
    client_code(&Creator2, &mut out);
    out
}
