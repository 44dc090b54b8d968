//! Command, themed: a pizzeria queues kitchen steps and runs them in order.

use std::rc::Rc;

use tracing::{debug, instrument};

use crate::behavioral::command::Command;
use crate::util::transcript::Transcript;

pub const EMPTY_QUEUE_NOTICE: &str = "No pizza-making commands have been queued";

#[derive(Debug, Default)]
pub struct ChefAssistant;

impl ChefAssistant {
    pub fn prepare_pizza_dough(&self, out: &mut Transcript) {
        out.line("The assistant prepares the pizza dough");
    }

    pub fn prepare_topping(&self, out: &mut Transcript) {
        out.line("The assistant cuts the pizza toppings");
    }

    pub fn prepare_sauce(&self, out: &mut Transcript) {
        out.line("The assistant prepares the sauce");
    }
}

#[derive(Debug, Default)]
pub struct Stove;

impl Stove {
    pub fn prepare_stove(&self, out: &mut Transcript) {
        out.line("The oven is heating up");
    }

    pub fn cooking_pizza(&self, out: &mut Transcript) {
        out.line("Pizza is cooked in the oven");
    }
}

#[derive(Debug, Default)]
pub struct ChefCook;

impl ChefCook {
    pub fn make_pizza_base(&self, out: &mut Transcript) {
        out.line("Chef rolls out a pizza base");
    }

    pub fn applied_sauce(&self, out: &mut Transcript) {
        out.line("The chef applies the sauce to the base of the pizza");
    }

    pub fn add_topping_to_pizza(&self, out: &mut Transcript) {
        out.line("Chef adds toppings to pizza");
    }

    pub fn bon_appetit(&self, out: &mut Transcript) {
        out.line("The chef wishes the client a bon appetit!");
    }
}

/// One command type per kitchen action, each bound to a shared receiver.
macro_rules! kitchen_command {
    ($name:ident, $receiver:ty, $action:ident) => {
        pub struct $name {
            executor: Rc<$receiver>,
        }

        impl $name {
            pub fn new(executor: Rc<$receiver>) -> Self {
                Self { executor }
            }
        }

        impl Command for $name {
            fn execute(&self, out: &mut Transcript) {
                self.executor.$action(out);
            }
        }
    };
}

kitchen_command!(PrepareStoveCommand, Stove, prepare_stove);
kitchen_command!(CookingPizzaCommand, Stove, cooking_pizza);
kitchen_command!(PrepareDoughCommand, ChefAssistant, prepare_pizza_dough);
kitchen_command!(PrepareToppingCommand, ChefAssistant, prepare_topping);
kitchen_command!(PrepareSauceCommand, ChefAssistant, prepare_sauce);
kitchen_command!(MakePizzaBaseCommand, ChefCook, make_pizza_base);
kitchen_command!(AppliedSauceCommand, ChefCook, applied_sauce);
kitchen_command!(AddToppingCommand, ChefCook, add_topping_to_pizza);
kitchen_command!(BonAppetitCommand, ChefCook, bon_appetit);

/// Queue of kitchen commands.
#[derive(Default)]
pub struct Pizzeria {
    history: Vec<Box<dyn Command>>,
}

impl Pizzeria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.history.push(command);
    }

    pub fn pending(&self) -> usize {
        self.history.len()
    }

    /// Run every queued command in order, then empty the queue.
    #[instrument(level = "debug", skip_all)]
    pub fn cook(&mut self, out: &mut Transcript) {
        if self.history.is_empty() {
            out.line(EMPTY_QUEUE_NOTICE);
        } else {
            debug!(commands = self.history.len(), "cooking");
            for command in &self.history {
                command.execute(out);
            }
        }
        self.history.clear();
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let chef = Rc::new(ChefCook);
    let assistant = Rc::new(ChefAssistant);
    let stove = Rc::new(Stove);

    let mut pizzeria = Pizzeria::new();
    pizzeria.add_command(Box::new(PrepareDoughCommand::new(Rc::clone(&assistant))));
    pizzeria.add_command(Box::new(MakePizzaBaseCommand::new(Rc::clone(&chef))));
    pizzeria.add_command(Box::new(PrepareSauceCommand::new(Rc::clone(&assistant))));
    pizzeria.add_command(Box::new(AppliedSauceCommand::new(Rc::clone(&chef))));
    pizzeria.add_command(Box::new(PrepareStoveCommand::new(Rc::clone(&stove))));
    pizzeria.add_command(Box::new(PrepareToppingCommand::new(Rc::clone(&assistant))));
    pizzeria.add_command(Box::new(AddToppingCommand::new(Rc::clone(&chef))));
    pizzeria.add_command(Box::new(CookingPizzaCommand::new(Rc::clone(&stove))));
    pizzeria.add_command(Box::new(BonAppetitCommand::new(chef)));

    pizzeria.cook(&mut out);
    out
}
