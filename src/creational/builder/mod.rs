//! Builder: assemble a complex object step by step.

pub mod director;
pub mod recipe;

use tracing::instrument;

use crate::creational::pizza::{DoughDepth, DoughType, Pizza, PizzaBase, Sauce, Topping};
use crate::errors::PatternResult;
use crate::util::transcript::Transcript;

pub use director::{Director, MargaritaBuilder, PizzaBuilder, SalamiBuilder};
pub use recipe::PizzaRecipe;

const SEPARATOR: &str = "---------------------------";

#[instrument(level = "debug")]
pub fn director_demo() -> PatternResult<Transcript> {
    let mut out = Transcript::new();
    let mut director = Director::new();
    let builders: [Box<dyn PizzaBuilder>; 2] = [
        Box::new(MargaritaBuilder::new()),
        Box::new(SalamiBuilder::new()),
    ];
    for builder in builders {
        director.set_builder(builder);
        let pizza = director.make_pizza()?;
        out.block(&pizza.to_string());
        out.line(SEPARATOR);
    }
    Ok(out)
}

#[instrument(level = "debug")]
pub fn recipe_demo() -> PatternResult<Transcript> {
    let mut out = Transcript::new();
    let pizza = Pizza::builder()
        .name("Margarita")
        .dough(PizzaBase::new(DoughDepth::Thick, DoughType::Wheat))
        .sauce(Sauce::Tomato)
        .toppings([Topping::Mozzarella, Topping::Mozzarella, Topping::Bacon])
        .cooking_time(10)
        .build()?;
    out.block(&pizza.to_string());
    Ok(out)
}
