//! Builder driven by a director that knows the order of the steps.

use tracing::{debug, instrument};

use crate::creational::pizza::{DoughDepth, DoughType, Pizza, PizzaBase, Sauce, Topping};
use crate::errors::{PatternError, PatternResult};

/// Step-by-step assembly of a [`Pizza`].
pub trait PizzaBuilder {
    fn prepare_dough(&mut self);
    fn add_sauce(&mut self);
    fn add_topping(&mut self);
    fn pizza(&self) -> &Pizza;
}

#[derive(Debug, Clone)]
pub struct MargaritaBuilder {
    pizza: Pizza,
}

impl Default for MargaritaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MargaritaBuilder {
    pub fn new() -> Self {
        let mut pizza = Pizza::named("Margarita");
        pizza.cooking_time = Some(15);
        Self { pizza }
    }
}

impl PizzaBuilder for MargaritaBuilder {
    fn prepare_dough(&mut self) {
        self.pizza.base = Some(PizzaBase::new(DoughDepth::Thick, DoughType::Wheat));
    }

    fn add_sauce(&mut self) {
        self.pizza.sauce = Some(Sauce::Tomato);
    }

    fn add_topping(&mut self) {
        self.pizza
            .toppings
            .extend([Topping::Mozzarella, Topping::Mozzarella, Topping::Bacon]);
    }

    fn pizza(&self) -> &Pizza {
        &self.pizza
    }
}

#[derive(Debug, Clone)]
pub struct SalamiBuilder {
    pizza: Pizza,
}

impl Default for SalamiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SalamiBuilder {
    pub fn new() -> Self {
        let mut pizza = Pizza::named("Salami");
        pizza.cooking_time = Some(10);
        Self { pizza }
    }
}

impl PizzaBuilder for SalamiBuilder {
    fn prepare_dough(&mut self) {
        self.pizza.base = Some(PizzaBase::new(DoughDepth::Thin, DoughType::Rye));
    }

    fn add_sauce(&mut self) {
        self.pizza.sauce = Some(Sauce::Barbecue);
    }

    fn add_topping(&mut self) {
        self.pizza
            .toppings
            .extend([Topping::Mozzarella, Topping::Salami]);
    }

    fn pizza(&self) -> &Pizza {
        &self.pizza
    }
}

/// Runs the builder steps in a fixed order.
#[derive(Default)]
pub struct Director {
    builder: Option<Box<dyn PizzaBuilder>>,
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_builder(&mut self, builder: Box<dyn PizzaBuilder>) {
        self.builder = Some(builder);
    }

    /// Dough, sauce, toppings; then hand back the finished pizza.
    #[instrument(level = "debug", skip(self))]
    pub fn make_pizza(&mut self) -> PatternResult<Pizza> {
        let builder = self.builder.as_mut().ok_or(PatternError::BuilderNotSet)?;
        builder.prepare_dough();
        builder.add_sauce();
        builder.add_topping();
        debug!(name = %builder.pizza().name, "pizza assembled");
        Ok(builder.pizza().clone())
    }
}
