//! Tests for adapter, bridge and facade

use rstest::rstest;

use patternbook::structural::adapter::{self, CelsiusOven, OriginalOven, Oven, OvenAdapter};
use patternbook::structural::bridge::{
    self, Abstraction, BaseAbstraction, ExtendedAbstraction, PlatformA, PlatformB,
};
use patternbook::structural::facade::{self, Facade, Subsystem1};
use patternbook::PatternError;

// ============================================================
// Adapter
// ============================================================

#[rstest]
#[case(32.0, 0.0)]
#[case(212.0, 100.0)]
#[case(356.0, 180.0)]
fn given_fahrenheit_oven_when_adapted_then_reports_celsius(
    #[case] fahrenheit: f64,
    #[case] celsius: f64,
) {
    let adapter = OvenAdapter::new(OriginalOven::new(fahrenheit).unwrap());

    assert!((adapter.celsius_temperature() - celsius).abs() < 1e-9);
    assert_eq!(adapter.original_temperature(), fahrenheit);
}

#[test]
fn given_adapter_when_setting_celsius_then_wrapped_oven_gets_fahrenheit() {
    let mut adapter = OvenAdapter::new(OriginalOven::new(32.0).unwrap());

    adapter.set_celsius_temperature(180.0).unwrap();

    assert_eq!(adapter.celsius_temperature(), 180.0);
    assert!((adapter.original_temperature() - 356.0).abs() < 1e-9);
}

#[test]
fn given_freezing_temperature_when_creating_oven_then_invalid_argument() {
    let result = OriginalOven::new(31.9);

    assert!(matches!(result, Err(PatternError::InvalidArgument(_))));
}

#[test]
fn given_negative_celsius_when_setting_then_fails_and_leaves_both_sides_unchanged() {
    let mut adapter = OvenAdapter::new(OriginalOven::new(212.0).unwrap());

    let result = adapter.set_celsius_temperature(-10.0);

    assert!(matches!(result, Err(PatternError::InvalidArgument(_))));
    assert!((adapter.celsius_temperature() - 100.0).abs() < 1e-9);
    assert_eq!(adapter.into_inner().temperature(), 212.0);
}

#[test]
fn given_default_values_when_running_adapter_demo_then_prints_both_states() {
    let out = adapter::demo(32.0, 180.0).unwrap();

    assert_eq!(
        out.lines(),
        &[
            "Original temperature = 32 F",
            "Celsius temperature = 0",
            "----------------",
            "New temperature",
            "----------------",
            "Original temperature = 356 F",
            "Celsius temperature = 180",
        ]
    );
}

#[test]
fn given_freezing_start_when_running_adapter_demo_then_errors() {
    assert!(adapter::demo(0.0, 180.0).is_err());
}

// ============================================================
// Bridge
// ============================================================

#[test]
fn given_any_pairing_when_operation_then_abstraction_wraps_implementation() {
    let base_b = BaseAbstraction::new(Box::new(PlatformB));
    let extended_a = ExtendedAbstraction::new(Box::new(PlatformA));

    assert_eq!(
        base_b.operation(),
        "Abstraction: Base operation with:\n\
         ConcreteImplementationB: Here's the result on the platform B."
    );
    assert!(extended_a
        .operation()
        .starts_with("ExtendedAbstraction: Extended operation with:\nConcreteImplementationA"));
}

#[test]
fn given_bridge_demo_when_run_then_shows_both_combinations() {
    let out = bridge::demo();

    assert_eq!(out.len(), 5);
    assert!(out.contains("Abstraction: Base operation with:"));
    assert!(out.contains("ConcreteImplementationB: Here's the result on the platform B."));
}

// ============================================================
// Facade
// ============================================================

#[test]
fn given_missing_subsystems_when_creating_facade_then_defaults_are_used() {
    let explicit = Facade::new(Some(Subsystem1), None);
    let implicit = Facade::default();

    assert_eq!(explicit.operation(), implicit.operation());
}

#[test]
fn given_facade_when_operation_then_runs_subsystems_in_order() {
    let out = facade::demo();

    assert_eq!(
        out.lines(),
        &[
            "Facade initializes subsystems:",
            "Subsystem1: Ready!",
            "Subsystem2: Get ready!",
            "Facade orders subsystems to perform the action:",
            "Subsystem1: Go!",
            "Subsystem2: Fire!",
        ]
    );
}
