//! Creational patterns: how objects get made.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod gui_factory;
pub mod pizza;
pub mod singleton;

pub use builder::{Director, PizzaBuilder, PizzaRecipe};
pub use gui_factory::{create_factory, OperatingSystem};
pub use pizza::Pizza;
pub use singleton::Singleton;
