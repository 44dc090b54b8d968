//! Abstract Factory, themed: one widget family per operating system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::{PatternError, PatternResult};
use crate::util::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Windows,
    Linux,
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingSystem::Windows => write!(f, "Windows"),
            OperatingSystem::Linux => write!(f, "Linux"),
        }
    }
}

impl FromStr for OperatingSystem {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(OperatingSystem::Windows),
            "linux" => Ok(OperatingSystem::Linux),
            _ => Err(PatternError::UnknownSystem(s.to_string())),
        }
    }
}

pub trait Widget {
    fn system(&self) -> OperatingSystem;
    fn create(&self) -> String;
}

macro_rules! widget {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            system: OperatingSystem,
        }

        impl $name {
            pub fn new(system: OperatingSystem) -> Self {
                Self { system }
            }
        }

        impl Widget for $name {
            fn system(&self) -> OperatingSystem {
                self.system
            }

            fn create(&self) -> String {
                format!("Created {} for {}", $label, self.system)
            }
        }
    };
}

widget!(StatusBar, "status bar");
widget!(MainMenu, "main menu");
widget!(MainWindow, "MainWindow");

/// Creates a consistent set of widgets for one platform.
pub trait GuiFactory {
    fn status_bar(&self) -> Box<dyn Widget>;
    fn main_menu(&self) -> Box<dyn Widget>;
    fn main_window(&self) -> Box<dyn Widget>;
}

pub struct WindowsGuiFactory;

impl GuiFactory for WindowsGuiFactory {
    fn status_bar(&self) -> Box<dyn Widget> {
        Box::new(StatusBar::new(OperatingSystem::Windows))
    }

    fn main_menu(&self) -> Box<dyn Widget> {
        Box::new(MainMenu::new(OperatingSystem::Windows))
    }

    fn main_window(&self) -> Box<dyn Widget> {
        Box::new(MainWindow::new(OperatingSystem::Windows))
    }
}

pub struct LinuxGuiFactory;

impl GuiFactory for LinuxGuiFactory {
    fn status_bar(&self) -> Box<dyn Widget> {
        Box::new(StatusBar::new(OperatingSystem::Linux))
    }

    fn main_menu(&self) -> Box<dyn Widget> {
        Box::new(MainMenu::new(OperatingSystem::Linux))
    }

    fn main_window(&self) -> Box<dyn Widget> {
        Box::new(MainWindow::new(OperatingSystem::Linux))
    }
}

/// Client that only knows about the factory interface.
pub struct Application {
    factory: Box<dyn GuiFactory>,
}

impl Application {
    pub fn new(factory: Box<dyn GuiFactory>) -> Self {
        Self { factory }
    }

    /// Window, menu, status bar, in that order.
    pub fn create_gui(&self) -> Vec<String> {
        let main_window = self.factory.main_window();
        let status_bar = self.factory.status_bar();
        let main_menu = self.factory.main_menu();
        vec![main_window.create(), main_menu.create(), status_bar.create()]
    }
}

pub fn factory_for(system: OperatingSystem) -> Box<dyn GuiFactory> {
    match system {
        OperatingSystem::Windows => Box::new(WindowsGuiFactory),
        OperatingSystem::Linux => Box::new(LinuxGuiFactory),
    }
}

/// Look a factory up by system name, e.g. `"Linux"`.
pub fn create_factory(system_name: &str) -> PatternResult<Box<dyn GuiFactory>> {
    Ok(factory_for(system_name.parse()?))
}

#[instrument(level = "debug")]
pub fn demo(system: OperatingSystem) -> Transcript {
    let mut out = Transcript::new();
    let app = Application::new(factory_for(system));
    for line in app.create_gui() {
        out.line(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LINUX".parse::<OperatingSystem>(), Ok(OperatingSystem::Linux));
        assert_eq!(
            "windows".parse::<OperatingSystem>(),
            Ok(OperatingSystem::Windows)
        );
    }

    #[test]
    fn test_widgets_report_their_system() {
        let factory = WindowsGuiFactory;
        assert_eq!(factory.status_bar().system(), OperatingSystem::Windows);
        assert_eq!(factory.main_menu().create(), "Created main menu for Windows");
    }
}
