//! Values with units attached
//!
//! Simple-unit values store their magnitude in the dimension's internal
//! representation, so moving between sibling units is a relabel.

use std::fmt;

use crate::catalog::{INCHES_PER_FOOT, METERS_PER_FOOT, METERS_PER_INCH};
use crate::convert::{self, RateSource};
use crate::dimension::{
    Duration, Length, Mass, Measure, Speed, Temperature, UnitDimension, Volume,
};
use crate::error::ConversionError;
use crate::format::format_general;
use crate::unit::{CurrencyUnit, SimpleUnit, UnitType};

/// Significant digits used when rendering simple-unit values
pub const DISPLAY_PRECISION: usize = 6;

/// A magnitude in a simple unit, stored in canonical form
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleUnitValue<D: Measure> {
    canonical: f64,
    unit: &'static SimpleUnit<D>,
}

impl<D: Measure> SimpleUnitValue<D> {
    pub fn from_canonical(canonical: f64, unit: &'static SimpleUnit<D>) -> Self {
        SimpleUnitValue { canonical, unit }
    }

    /// Magnitude expressed in the owning unit
    pub fn magnitude(&self) -> f64 {
        self.unit.from_canonical(self.canonical)
    }

    /// Magnitude in the dimension's internal representation
    pub fn canonical(&self) -> f64 {
        self.canonical
    }

    pub fn unit(&self) -> &'static SimpleUnit<D> {
        self.unit
    }

    /// Re-tag to a sibling unit. The canonical magnitude is unchanged.
    pub fn relabel(self, unit: &'static SimpleUnit<D>) -> Self {
        SimpleUnitValue { canonical: self.canonical, unit }
    }
}

impl<D: Measure> fmt::Display for SimpleUnitValue<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_general(self.magnitude(), DISPLAY_PRECISION), self.unit.name())
    }
}

/// Feet and inches kept apart until converted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FootInchVal {
    pub feet: f64,
    pub inches: f64,
}

impl FootInchVal {
    pub fn new(feet: f64, inches: f64) -> Self {
        FootInchVal { feet, inches }
    }

    /// Combined length in meters
    pub fn to_meters(&self) -> f64 {
        self.feet * METERS_PER_FOOT + self.inches * METERS_PER_INCH
    }

    /// Split a length into whole feet and the remaining inches
    pub fn from_meters(meters: f64) -> Self {
        if !meters.is_finite() {
            return FootInchVal { feet: meters, inches: 0.0 };
        }
        let total_inches = meters / METERS_PER_INCH;
        let feet = (total_inches / INCHES_PER_FOOT).trunc();
        let inches = total_inches - feet * INCHES_PER_FOOT;
        FootInchVal { feet, inches }
    }
}

impl fmt::Display for FootInchVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Inches that round up to a full foot carry over
        let mut inches = self.inches.round();
        let feet = self.feet + (inches / INCHES_PER_FOOT).trunc();
        inches %= INCHES_PER_FOOT;
        if inches == 0.0 {
            // Rendered as a plain foot quantity
            return write!(f, "{} ft", format_general(feet, DISPLAY_PRECISION));
        }
        write!(f, "{:.0}' {:.0}\"", feet, inches)
    }
}

/// An amount of money in a specific currency
#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyVal {
    pub amount: f64,
    pub unit: CurrencyUnit,
}

impl CurrencyVal {
    pub fn new(amount: f64, unit: CurrencyUnit) -> Self {
        CurrencyVal { amount, unit }
    }
}

impl fmt::Display for CurrencyVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.unit)
    }
}

/// A magnitude paired with its unit
#[derive(Clone, Debug, PartialEq)]
pub enum UnitVal {
    Length(SimpleUnitValue<Length>),
    Mass(SimpleUnitValue<Mass>),
    Speed(SimpleUnitValue<Speed>),
    Duration(SimpleUnitValue<Duration>),
    Temperature(SimpleUnitValue<Temperature>),
    Volume(SimpleUnitValue<Volume>),
    FootInch(FootInchVal),
    Currency(CurrencyVal),
}

impl UnitVal {
    pub fn unit(&self) -> UnitType {
        match self {
            UnitVal::Length(v) => UnitType::Length(v.unit()),
            UnitVal::Mass(v) => UnitType::Mass(v.unit()),
            UnitVal::Speed(v) => UnitType::Speed(v.unit()),
            UnitVal::Duration(v) => UnitType::Duration(v.unit()),
            UnitVal::Temperature(v) => UnitType::Temperature(v.unit()),
            UnitVal::Volume(v) => UnitType::Volume(v.unit()),
            UnitVal::FootInch(_) => UnitType::FootInch,
            UnitVal::Currency(v) => UnitType::Currency(v.unit.clone()),
        }
    }

    pub fn dimension(&self) -> UnitDimension {
        self.unit().dimension()
    }

    /// Convert to `to`. Currency conversions consult `rates`.
    pub fn convert(
        &self,
        to: &UnitType,
        rates: &dyn RateSource,
    ) -> Result<UnitVal, ConversionError> {
        convert::convert(self, to, rates)
    }
}

impl fmt::Display for UnitVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitVal::Length(v) => v.fmt(f),
            UnitVal::Mass(v) => v.fmt(f),
            UnitVal::Speed(v) => v.fmt(f),
            UnitVal::Duration(v) => v.fmt(f),
            UnitVal::Temperature(v) => v.fmt(f),
            UnitVal::Volume(v) => v.fmt(f),
            UnitVal::FootInch(v) => v.fmt(f),
            UnitVal::Currency(v) => v.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CENTIMETER, FAHRENHEIT, FOOT, INCH, KILOGRAM, METER};

    #[test]
    fn test_simple_display() {
        let v = CENTIMETER.from_float(6.4);
        assert_eq!(v.to_string(), "6.4 cm");
        assert_eq!(v.relabel(&METER).to_string(), "0.064 m");
    }

    #[test]
    fn test_relabel_keeps_canonical() {
        let v = KILOGRAM.from_float(2.0);
        assert_eq!(v.canonical(), 2000.0);
        assert_eq!(v.relabel(&KILOGRAM).canonical(), 2000.0);
    }

    #[test]
    fn test_temperature_display() {
        assert_eq!(FAHRENHEIT.from_float(212.0).to_string(), "212 °F");
    }

    #[test]
    fn test_foot_inch_display() {
        assert_eq!(FootInchVal::new(6.0, 0.0).to_string(), "6 ft");
        assert_eq!(FootInchVal::new(5.0, 11.0).to_string(), "5' 11\"");
    }

    #[test]
    fn test_foot_inch_whole_feet() {
        let split = |v: f64| FootInchVal::from_meters(v).to_string();

        assert_eq!(split(INCH.from_float(12.0).canonical()), "1 ft");
        assert_eq!(split(INCH.from_float(24.0).canonical()), "2 ft");
        assert_eq!(split(INCH.from_float(72.0).canonical()), "6 ft");
        assert_eq!(split(FOOT.from_float(5.99).canonical()), "6 ft");
        assert_eq!(FootInchVal::new(5.0, 11.7).to_string(), "6 ft");
        assert_eq!(FootInchVal::new(5.0, 11.4).to_string(), "5' 11\"");
    }

    #[test]
    fn test_foot_inch_non_finite() {
        let v = FootInchVal::from_meters(f64::INFINITY);
        assert_eq!(v.feet, f64::INFINITY);
        assert_eq!(v.inches, 0.0);
        assert_eq!(v.to_string(), "+Inf ft");
    }

    #[test]
    fn test_foot_inch_meters() {
        let v = FootInchVal::new(6.0, 2.0);
        assert!((v.to_meters() - 1.8796).abs() < 1e-9);

        let back = FootInchVal::from_meters(1.8796);
        assert_eq!(back.feet, 6.0);
        assert!((back.inches - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_currency_display() {
        let v = CurrencyVal::new(5.0, CurrencyUnit::new("usd"));
        assert_eq!(v.to_string(), "5.00 USD");
    }

    #[test]
    fn test_unit_val_unit() {
        let v = UnitVal::Length(METER.from_float(1.0));
        assert_eq!(v.unit(), UnitType::Length(&METER));
        assert_eq!(
            UnitVal::FootInch(FootInchVal::new(1.0, 0.0)).dimension(),
            UnitDimension::Length
        );
    }
}
