//! Abstract Factory: create families of related products without naming concrete types.

use crate::util::transcript::Transcript;

pub trait ProductA {
    fn useful_function_a(&self) -> String;
}

pub trait ProductB {
    fn useful_function_b(&self) -> String;

    /// Products of the same family can work together.
    fn collaborate(&self, collaborator: &dyn ProductA) -> String;
}

pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn ProductA>;
    fn create_product_b(&self) -> Box<dyn ProductB>;
}

pub struct ProductA1;
pub struct ProductA2;
pub struct ProductB1;
pub struct ProductB2;

impl ProductA for ProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

impl ProductA for ProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

impl ProductB for ProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn collaborate(&self, collaborator: &dyn ProductA) -> String {
        format!(
            "The result of the B1 collaborating with the ({})",
            collaborator.useful_function_a()
        )
    }
}

impl ProductB for ProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn collaborate(&self, collaborator: &dyn ProductA) -> String {
        format!(
            "The result of the B2 collaborating with the ({})",
            collaborator.useful_function_a()
        )
    }
}

/// Produces the "1" family.
pub struct Factory1;

impl AbstractFactory for Factory1 {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        Box::new(ProductA1)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        Box::new(ProductB1)
    }
}

/// Produces the "2" family.
pub struct Factory2;

impl AbstractFactory for Factory2 {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        Box::new(ProductA2)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        Box::new(ProductB2)
    }
}

fn client_code(factory: &dyn AbstractFactory, out: &mut Transcript) {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();
    out.line(product_b.useful_function_b());
    out.line(product_b.collaborate(product_a.as_ref()));
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    out.line("Client: Testing client code with the first factory type:");
    client_code(&Factory1, &mut out);
    out.blank();
    out.line("Client: Testing the same client code with the second factory type:");
    client_code(&Factory2, &mut out);
    out
}
