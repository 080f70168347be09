//! Built-in unit catalog
//!
//! Each dimension registers its units along with the spellings users may
//! type for them. Order matters: when two units claim the same alias the
//! one listed first keeps it.

use crate::dimension::{Duration, Length, Mass, Speed, Temperature, Volume};
use crate::unit::{SimpleUnit, UnitType};

/// A unit and its recognized aliases
#[derive(Debug, Clone)]
pub struct UnitEntry {
    pub unit: UnitType,
    pub aliases: &'static [&'static str],
}

impl UnitEntry {
    fn new(unit: UnitType, aliases: &'static [&'static str]) -> Self {
        UnitEntry { unit, aliases }
    }
}

// ============ Length (meters) ============

pub(crate) const METERS_PER_INCH: f64 = 0.0254;
pub(crate) const INCHES_PER_FOOT: f64 = 12.0;
pub(crate) const METERS_PER_FOOT: f64 = INCHES_PER_FOOT * METERS_PER_INCH;

pub static METER: SimpleUnit<Length> = SimpleUnit::linear("m", 1.0);
pub static KILOMETER: SimpleUnit<Length> = SimpleUnit::linear("km", 1000.0);
pub static MILLIMETER: SimpleUnit<Length> = SimpleUnit::linear("mm", 0.001);
pub static CENTIMETER: SimpleUnit<Length> = SimpleUnit::linear("cm", 0.01);
pub static NANOMETER: SimpleUnit<Length> = SimpleUnit::linear("nm", 1e-9);
pub static INCH: SimpleUnit<Length> = SimpleUnit::linear("in", METERS_PER_INCH);
pub static FOOT: SimpleUnit<Length> = SimpleUnit::linear("ft", METERS_PER_FOOT);
pub static YARD: SimpleUnit<Length> = SimpleUnit::linear("yd", 0.9144);
pub static MILE: SimpleUnit<Length> = SimpleUnit::linear("miles", 1609.344);
pub static FURLONG: SimpleUnit<Length> = SimpleUnit::linear("furlongs", 201.168);
pub static LIGHTYEAR: SimpleUnit<Length> = SimpleUnit::linear("ly", 9_460_730_472_580_800.0);
pub static NAUTICAL_MILE: SimpleUnit<Length> = SimpleUnit::linear("nautical mile", 1852.0);
pub static FATHOM: SimpleUnit<Length> = SimpleUnit::linear("fathoms", 1.8288);

fn length_units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new(UnitType::Length(&METER), &["m", "meter", "meters", "metre", "metres"]),
        UnitEntry::new(
            UnitType::Length(&KILOMETER),
            &["km", "kilometer", "kilometers", "kilometre", "kilometres"],
        ),
        UnitEntry::new(
            UnitType::Length(&MILLIMETER),
            &["mm", "millimeter", "millimeters", "millimetre", "millimetres"],
        ),
        UnitEntry::new(
            UnitType::Length(&CENTIMETER),
            &["cm", "centimeter", "centimeters", "centimetre", "centimetres"],
        ),
        UnitEntry::new(
            UnitType::Length(&NANOMETER),
            &["nm", "nanometer", "nanometers", "nanometre", "nanometres"],
        ),
        UnitEntry::new(UnitType::Length(&INCH), &["in", "inch", "inches"]),
        // "ft" reads as feet+inches so "5 ft" and "5'" behave alike
        UnitEntry::new(UnitType::FootInch, &["ft", "feet+inches", "ftin", "ft+in"]),
        UnitEntry::new(UnitType::Length(&FOOT), &["foot", "feet"]),
        UnitEntry::new(UnitType::Length(&YARD), &["yd", "yard", "yards"]),
        UnitEntry::new(UnitType::Length(&MILE), &["mi", "mile", "miles"]),
        UnitEntry::new(UnitType::Length(&FURLONG), &["furlong", "furlongs"]),
        UnitEntry::new(UnitType::Length(&LIGHTYEAR), &["ly", "lightyear", "lightyears"]),
        UnitEntry::new(UnitType::Length(&NAUTICAL_MILE), &["nmi"]),
        UnitEntry::new(UnitType::Length(&FATHOM), &["fathom", "fathoms"]),
    ]
}

// ============ Mass (grams) ============

pub static GRAM: SimpleUnit<Mass> = SimpleUnit::linear("g", 1.0);
pub static KILOGRAM: SimpleUnit<Mass> = SimpleUnit::linear("kg", 1000.0);
pub static POUND: SimpleUnit<Mass> = SimpleUnit::linear("lbs", 453.59237);
pub static STONE: SimpleUnit<Mass> = SimpleUnit::linear("stones", 6350.29318);

fn mass_units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new(UnitType::Mass(&GRAM), &["g", "gram", "grams"]),
        UnitEntry::new(UnitType::Mass(&KILOGRAM), &["kg", "kilogram", "kilograms"]),
        UnitEntry::new(UnitType::Mass(&POUND), &["lb", "lbs", "pound", "pounds"]),
        UnitEntry::new(UnitType::Mass(&STONE), &["st", "stone", "stones"]),
    ]
}

// ============ Temperature (kelvin) ============

const KELVIN_OFFSET: f64 = 273.15;

fn celsius_to_kelvin(c: f64) -> f64 {
    c + KELVIN_OFFSET
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - KELVIN_OFFSET
}

fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    (k - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0
}

pub static CELSIUS: SimpleUnit<Temperature> =
    SimpleUnit::affine("°C", celsius_to_kelvin, kelvin_to_celsius);
pub static FAHRENHEIT: SimpleUnit<Temperature> =
    SimpleUnit::affine("°F", fahrenheit_to_kelvin, kelvin_to_fahrenheit);
pub static KELVIN: SimpleUnit<Temperature> = SimpleUnit::linear("K", 1.0);

fn temperature_units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new(UnitType::Temperature(&CELSIUS), &["c", "celsius", "celcius"]),
        UnitEntry::new(UnitType::Temperature(&FAHRENHEIT), &["f", "fahrenheit"]),
        UnitEntry::new(UnitType::Temperature(&KELVIN), &["k", "kelvin"]),
    ]
}

// ============ Speed (meters per second) ============

pub static MILES_PER_HOUR: SimpleUnit<Speed> = SimpleUnit::linear("mph", 0.44704);
pub static KILOMETERS_PER_HOUR: SimpleUnit<Speed> = SimpleUnit::linear("km/h", 1.0 / 3.6);
pub static LIGHT_SPEED: SimpleUnit<Speed> = SimpleUnit::linear("C", 299_792_458.0);

fn speed_units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new(UnitType::Speed(&MILES_PER_HOUR), &["mph"]),
        UnitEntry::new(UnitType::Speed(&KILOMETERS_PER_HOUR), &["kmh", "km/h", "kmph"]),
        UnitEntry::new(UnitType::Speed(&LIGHT_SPEED), &["light", "lights", "lightspeed"]),
    ]
}

// ============ Volume (liters) ============

pub static LITER: SimpleUnit<Volume> = SimpleUnit::linear("l", 1.0);
pub static CENTILITER: SimpleUnit<Volume> = SimpleUnit::linear("cl", 0.01);
pub static MILLILITER: SimpleUnit<Volume> = SimpleUnit::linear("ml", 0.001);
pub static GALLON: SimpleUnit<Volume> = SimpleUnit::linear("gal", 3.785411784);
pub static QUART: SimpleUnit<Volume> = SimpleUnit::linear("quart", 0.946352946);
pub static PINT: SimpleUnit<Volume> = SimpleUnit::linear("pint", 0.473176473);
pub static CUP: SimpleUnit<Volume> = SimpleUnit::linear("cup", 0.2365882365);
pub static FLUID_OUNCE: SimpleUnit<Volume> = SimpleUnit::linear("fl oz", 0.0295735295625);
pub static TABLESPOON: SimpleUnit<Volume> = SimpleUnit::linear("tbsp", 0.01478676478125);
pub static TEASPOON: SimpleUnit<Volume> = SimpleUnit::linear("tsp", 0.00492892159375);

fn volume_units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new(UnitType::Volume(&LITER), &["l", "liter", "liters", "litre", "litres"]),
        UnitEntry::new(UnitType::Volume(&CENTILITER), &["cl", "centiliter", "centiliters"]),
        UnitEntry::new(UnitType::Volume(&MILLILITER), &["ml", "milliliter", "milliliters"]),
        UnitEntry::new(UnitType::Volume(&GALLON), &["gal", "gals", "gallon", "gallons"]),
        UnitEntry::new(UnitType::Volume(&QUART), &["qt", "quart", "quarts"]),
        UnitEntry::new(UnitType::Volume(&PINT), &["pt", "pint", "pints"]),
        UnitEntry::new(UnitType::Volume(&CUP), &["cup", "cups"]),
        UnitEntry::new(UnitType::Volume(&FLUID_OUNCE), &["oz", "floz", "ounce", "ounces"]),
        UnitEntry::new(UnitType::Volume(&TABLESPOON), &["tbsp", "tablespoon", "tablespoons"]),
        UnitEntry::new(UnitType::Volume(&TEASPOON), &["tsp", "teaspoon", "teaspoons"]),
    ]
}

// ============ Duration (seconds) ============

pub static SECOND: SimpleUnit<Duration> = SimpleUnit::linear("s", 1.0);
pub static MINUTE: SimpleUnit<Duration> = SimpleUnit::linear("min", 60.0);
pub static HOUR: SimpleUnit<Duration> = SimpleUnit::linear("hr", 3600.0);
pub static DAY: SimpleUnit<Duration> = SimpleUnit::linear("days", 86_400.0);
pub static WEEK: SimpleUnit<Duration> = SimpleUnit::linear("weeks", 604_800.0);
pub static MONTH: SimpleUnit<Duration> = SimpleUnit::linear("months", 2_592_000.0);
pub static YEAR: SimpleUnit<Duration> = SimpleUnit::linear("years", 31_557_600.0);

fn duration_units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new(UnitType::Duration(&SECOND), &["s", "sec", "secs", "second", "seconds"]),
        UnitEntry::new(UnitType::Duration(&MINUTE), &["min", "mins", "minute", "minutes"]),
        UnitEntry::new(UnitType::Duration(&HOUR), &["hr", "hrs", "hour", "hours"]),
        UnitEntry::new(UnitType::Duration(&DAY), &["day", "days"]),
        UnitEntry::new(UnitType::Duration(&WEEK), &["wk", "week", "weeks"]),
        UnitEntry::new(UnitType::Duration(&MONTH), &["month", "months"]),
        UnitEntry::new(UnitType::Duration(&YEAR), &["yr", "year", "years"]),
    ]
}

/// Every built-in unit, grouped by dimension
pub fn builtin_units() -> Vec<UnitEntry> {
    let mut entries = Vec::new();
    entries.extend(length_units());
    entries.extend(mass_units());
    entries.extend(temperature_units());
    entries.extend(speed_units());
    entries.extend(volume_units());
    entries.extend(duration_units());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::UnitDimension;
    use std::collections::HashSet;

    #[test]
    fn test_every_dimension_populated() {
        let dims: HashSet<UnitDimension> =
            builtin_units().iter().map(|e| e.unit.dimension()).collect();
        for dim in [
            UnitDimension::Length,
            UnitDimension::Mass,
            UnitDimension::Speed,
            UnitDimension::Duration,
            UnitDimension::Temperature,
            UnitDimension::Volume,
        ] {
            assert!(dims.contains(&dim), "missing {}", dim);
        }
        assert!(!dims.contains(&UnitDimension::Currency));
    }

    #[test]
    fn test_aliases_are_lowercase() {
        for entry in builtin_units() {
            for alias in entry.aliases {
                assert_eq!(*alias, alias.to_lowercase());
            }
        }
    }

    #[test]
    fn test_display_names_unique() {
        let mut seen = HashSet::new();
        for entry in builtin_units() {
            assert!(seen.insert(entry.unit.name().to_string()), "duplicate {}", entry.unit.name());
        }
    }

    #[test]
    fn test_fahrenheit_round_trip() {
        let k = FAHRENHEIT.to_canonical(-40.0);
        assert!((CELSIUS.from_canonical(k) + 40.0).abs() < 1e-9);
    }
}
