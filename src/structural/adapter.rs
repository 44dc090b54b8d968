//! Adapter: let an oven that speaks Fahrenheit work behind a Celsius interface.

use tracing::instrument;

use crate::errors::{PatternError, PatternResult};
use crate::util::transcript::Transcript;

pub const CELSIUS_TO_FAHRENHEIT: f64 = 9.0 / 5.0;
pub const FAHRENHEIT_TO_CELSIUS: f64 = 5.0 / 9.0;
pub const FAHRENHEIT_ZERO: f64 = 32.0;

/// The interface being adapted: temperatures in Fahrenheit.
pub trait Oven {
    fn temperature(&self) -> f64;
    fn set_temperature(&mut self, fahrenheit: f64) -> PatternResult<()>;
}

/// The interface the rest of the system wants: temperatures in Celsius.
pub trait CelsiusOven {
    fn celsius_temperature(&self) -> f64;
    fn set_celsius_temperature(&mut self, celsius: f64) -> PatternResult<()>;
    fn original_temperature(&self) -> f64;
}

/// An oven that refuses to go below freezing point.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginalOven {
    temperature: f64,
}

fn check_not_freezing(fahrenheit: f64, what: &str) -> PatternResult<()> {
    if fahrenheit >= FAHRENHEIT_ZERO {
        Ok(())
    } else {
        Err(PatternError::InvalidArgument(format!(
            "{what}: {fahrenheit} F is below {FAHRENHEIT_ZERO} F"
        )))
    }
}

impl OriginalOven {
    pub fn new(fahrenheit: f64) -> PatternResult<Self> {
        check_not_freezing(fahrenheit, "an oven is not a refrigerator")?;
        Ok(Self {
            temperature: fahrenheit,
        })
    }
}

impl Oven for OriginalOven {
    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn set_temperature(&mut self, fahrenheit: f64) -> PatternResult<()> {
        check_not_freezing(fahrenheit, "an oven cannot freeze")?;
        self.temperature = fahrenheit;
        Ok(())
    }
}

/// Wraps any [`Oven`] and exposes it as a [`CelsiusOven`].
#[derive(Debug, Clone, PartialEq)]
pub struct OvenAdapter<O: Oven> {
    oven: O,
    temperature: f64,
}

impl<O: Oven> OvenAdapter<O> {
    pub fn new(oven: O) -> Self {
        let temperature = FAHRENHEIT_TO_CELSIUS * (oven.temperature() - FAHRENHEIT_ZERO);
        Self { oven, temperature }
    }

    pub fn into_inner(self) -> O {
        self.oven
    }
}

impl<O: Oven> CelsiusOven for OvenAdapter<O> {
    fn celsius_temperature(&self) -> f64 {
        self.temperature
    }

    fn set_celsius_temperature(&mut self, celsius: f64) -> PatternResult<()> {
        let fahrenheit = CELSIUS_TO_FAHRENHEIT * celsius + FAHRENHEIT_ZERO;
        self.oven.set_temperature(fahrenheit)?;
        self.temperature = celsius;
        Ok(())
    }

    fn original_temperature(&self) -> f64 {
        self.oven.temperature()
    }
}

fn print_temperature(oven: &dyn CelsiusOven, out: &mut Transcript) {
    out.line(format!(
        "Original temperature = {} F",
        oven.original_temperature()
    ));
    out.line(format!("Celsius temperature = {}", oven.celsius_temperature()));
}

#[instrument(level = "debug")]
pub fn demo(fahrenheit: f64, celsius: f64) -> PatternResult<Transcript> {
    let mut out = Transcript::new();
    let mut oven = OvenAdapter::new(OriginalOven::new(fahrenheit)?);
    print_temperature(&oven, &mut out);

    oven.set_celsius_temperature(celsius)?;
    out.line("----------------");
    out.line("New temperature");
    out.line("----------------");
    print_temperature(&oven, &mut out);
    Ok(out)
}
