//! Registry of every demonstration the CLI can run.

use std::fmt;

use clap::ValueEnum;
use tracing::{info, instrument};

use crate::behavioral::{command, iterator, observer, pizza_slices, pizzeria};
use crate::config::Settings;
use crate::creational::{abstract_factory, builder, factory_method, gui_factory, singleton};
use crate::errors::PatternResult;
use crate::structural::{adapter, bridge, composite, facade};
use crate::util::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Behavioral,
    Creational,
    Structural,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Behavioral => "behavioral",
            Family::Creational => "creational",
            Family::Structural => "structural",
        };
        write!(f, "{name}")
    }
}

/// One runnable demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Command,
    CommandPizzeria,
    Iterator,
    IteratorPizza,
    Observer,
    AbstractFactory,
    AbstractFactoryGui,
    FactoryMethod,
    BuilderDirector,
    BuilderFluent,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Facade,
}

impl Demo {
    pub fn all() -> &'static [Demo] {
        Demo::value_variants()
    }

    /// The kebab-case id used on the command line.
    pub fn id(&self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }

    pub fn family(&self) -> Family {
        match self {
            Demo::Command
            | Demo::CommandPizzeria
            | Demo::Iterator
            | Demo::IteratorPizza
            | Demo::Observer => Family::Behavioral,
            Demo::AbstractFactory
            | Demo::AbstractFactoryGui
            | Demo::FactoryMethod
            | Demo::BuilderDirector
            | Demo::BuilderFluent
            | Demo::Singleton => Family::Creational,
            Demo::Adapter | Demo::Bridge | Demo::Composite | Demo::Facade => Family::Structural,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Demo::Command => "Command",
            Demo::CommandPizzeria => "Command: pizzeria kitchen",
            Demo::Iterator => "Iterator",
            Demo::IteratorPizza => "Iterator: pizza slices",
            Demo::Observer => "Observer",
            Demo::AbstractFactory => "Abstract Factory",
            Demo::AbstractFactoryGui => "Abstract Factory: GUI toolkit",
            Demo::FactoryMethod => "Factory Method",
            Demo::BuilderDirector => "Builder: with director",
            Demo::BuilderFluent => "Builder: fluent recipe",
            Demo::Singleton => "Singleton",
            Demo::Adapter => "Adapter: Fahrenheit oven",
            Demo::Bridge => "Bridge",
            Demo::Composite => "Composite",
            Demo::Facade => "Facade",
        }
    }

    #[instrument(level = "debug", skip(settings))]
    pub fn run(&self, settings: &Settings) -> PatternResult<Transcript> {
        info!(demo = %self.id(), "running");
        let transcript = match self {
            Demo::Command => command::demo(),
            Demo::CommandPizzeria => pizzeria::demo(),
            Demo::Iterator => iterator::demo(&settings.iterator.words),
            Demo::IteratorPizza => pizza_slices::demo(settings.iterator.slices),
            Demo::Observer => observer::demo(settings.observer.seed, settings.observer.rounds),
            Demo::AbstractFactory => abstract_factory::demo(),
            Demo::AbstractFactoryGui => gui_factory::demo(settings.gui.system),
            Demo::FactoryMethod => factory_method::demo(),
            Demo::BuilderDirector => builder::director_demo()?,
            Demo::BuilderFluent => builder::recipe_demo()?,
            Demo::Singleton => singleton::demo(),
            Demo::Adapter => adapter::demo(settings.adapter.fahrenheit, settings.adapter.celsius)?,
            Demo::Bridge => bridge::demo(),
            Demo::Composite => composite::demo()?,
            Demo::Facade => facade::demo(),
        };
        Ok(transcript)
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
