//! Builder without a director: the client chains the steps itself.

use crate::creational::pizza::{Pizza, PizzaBase, Sauce, Topping};
use crate::errors::{PatternError, PatternResult};

/// Collects pizza fields; [`build`](Self::build) checks that the required ones are set.
#[derive(Debug, Default, Clone)]
pub struct PizzaRecipe {
    name: Option<String>,
    base: Option<PizzaBase>,
    sauce: Option<Sauce>,
    toppings: Vec<Topping>,
    cooking_time: Option<u32>,
}

impl Pizza {
    pub fn builder() -> PizzaRecipe {
        PizzaRecipe::default()
    }
}

impl PizzaRecipe {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn dough(mut self, base: PizzaBase) -> Self {
        self.base = Some(base);
        self
    }

    pub fn sauce(mut self, sauce: Sauce) -> Self {
        self.sauce = Some(sauce);
        self
    }

    pub fn toppings(mut self, toppings: impl IntoIterator<Item = Topping>) -> Self {
        self.toppings = toppings.into_iter().collect();
        self
    }

    pub fn cooking_time(mut self, minutes: u32) -> Self {
        self.cooking_time = Some(minutes);
        self
    }

    pub fn build(self) -> PatternResult<Pizza> {
        let name = self.name.ok_or(PatternError::MissingField("name"))?;
        let base = self.base.ok_or(PatternError::MissingField("dough"))?;
        let sauce = self.sauce.ok_or(PatternError::MissingField("sauce"))?;
        let cooking_time = self
            .cooking_time
            .ok_or(PatternError::MissingField("cooking_time"))?;
        Ok(Pizza {
            name,
            base: Some(base),
            sauce: Some(sauce),
            toppings: self.toppings,
            cooking_time: Some(cooking_time),
        })
    }
}
