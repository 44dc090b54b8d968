//! Pizza vocabulary shared by both builder variants.

use std::fmt;

use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoughDepth {
    Thin,
    Thick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoughType {
    Wheat,
    Corn,
    Rye,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sauce {
    Pesto,
    WhiteGarlic,
    Barbecue,
    Tomato,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topping {
    Mozzarella,
    Salami,
    Bacon,
    Mushrooms,
    Shrimps,
}

/// Dough depth and type together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PizzaBase {
    pub depth: DoughDepth,
    pub dough: DoughType,
}

impl PizzaBase {
    pub fn new(depth: DoughDepth, dough: DoughType) -> Self {
        Self { depth, dough }
    }
}

/// The product both builders assemble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    pub name: String,
    pub base: Option<PizzaBase>,
    pub sauce: Option<Sauce>,
    pub toppings: Vec<Topping>,
    /// Minutes in the oven
    pub cooking_time: Option<u32>,
}

impl Pizza {
    /// A pizza with nothing on it yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            sauce: None,
            toppings: Vec::new(),
            cooking_time: None,
        }
    }
}

fn or_unset<T: fmt::Debug>(value: Option<T>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| format!("{v:?}"))
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pizza name: {}", self.name)?;
        match self.base {
            Some(base) => writeln!(f, "dough type: {:?} & {:?}", base.depth, base.dough)?,
            None => writeln!(f, "dough type: unset")?,
        }
        writeln!(f, "sauce type: {}", or_unset(self.sauce))?;
        writeln!(
            f,
            "topping: [{}]",
            self.toppings.iter().map(|t| format!("{t:?}")).join(", ")
        )?;
        write!(f, "cooking time: {} minutes", or_unset(self.cooking_time))
    }
}
