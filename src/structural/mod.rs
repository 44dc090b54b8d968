//! Structural patterns: how objects are assembled into larger structures.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod facade;

pub use adapter::{CelsiusOven, OriginalOven, Oven, OvenAdapter};
pub use bridge::{Abstraction, BaseAbstraction, ExtendedAbstraction, Implementation};
pub use composite::{Component, CompositeTree, NodeId, NodeKind};
pub use facade::Facade;
