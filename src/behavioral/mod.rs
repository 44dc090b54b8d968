//! Behavioral patterns: how objects share responsibility and talk to each other.

pub mod command;
pub mod iterator;
pub mod observer;
pub mod pizza_slices;
pub mod pizzeria;

pub use command::{Command, Invoker};
pub use iterator::WordsCollection;
pub use observer::{Observer, StateSource, Subject};
pub use pizza_slices::PizzaAggregate;
pub use pizzeria::Pizzeria;
