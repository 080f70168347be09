//! Unit representation
//!
//! [`UnitType`] is a closed set of unit kinds. Simple units rescale into
//! their dimension's internal representation; the feet+inches composite and
//! currencies have no single scale factor and are converted specially.

use std::fmt;
use std::marker::PhantomData;

use crate::dimension::{Duration, Length, Mass, Measure, Speed, Temperature, UnitDimension, Volume};
use crate::value::{CurrencyVal, FootInchVal, SimpleUnitValue, UnitVal};

/// Display name of the feet+inches composite unit
pub const FOOT_INCH_NAME: &str = "feet + inches";

/// How a simple unit maps onto its dimension's internal representation
#[derive(Clone, Copy)]
enum Scale {
    /// canonical = value * factor
    Linear(f64),
    /// Non-proportional units such as temperature scales
    Affine {
        to_canonical: fn(f64) -> f64,
        from_canonical: fn(f64) -> f64,
    },
}

/// A unit whose values are a scalar (or affine) function of the dimension's
/// internal representation
pub struct SimpleUnit<D: Measure> {
    name: &'static str,
    scale: Scale,
    _dimension: PhantomData<D>,
}

impl<D: Measure> SimpleUnit<D> {
    /// Unit with a fixed scale factor to the internal representation
    pub const fn linear(name: &'static str, factor: f64) -> Self {
        SimpleUnit { name, scale: Scale::Linear(factor), _dimension: PhantomData }
    }

    /// Unit with explicit conversion functions (offset scales)
    pub const fn affine(
        name: &'static str,
        to_canonical: fn(f64) -> f64,
        from_canonical: fn(f64) -> f64,
    ) -> Self {
        SimpleUnit {
            name,
            scale: Scale::Affine { to_canonical, from_canonical },
            _dimension: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dimension(&self) -> UnitDimension {
        D::DIMENSION
    }

    pub fn to_canonical(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Linear(factor) => value * factor,
            Scale::Affine { to_canonical, .. } => to_canonical(value),
        }
    }

    pub fn from_canonical(&self, canonical: f64) -> f64 {
        match self.scale {
            Scale::Linear(factor) => canonical / factor,
            Scale::Affine { from_canonical, .. } => from_canonical(canonical),
        }
    }

    /// Create a value of `magnitude` in this unit
    pub fn from_float(&'static self, magnitude: f64) -> SimpleUnitValue<D> {
        SimpleUnitValue::from_canonical(self.to_canonical(magnitude), self)
    }
}

impl<D: Measure> fmt::Debug for SimpleUnit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleUnit")
            .field("name", &self.name)
            .field("dimension", &D::DIMENSION)
            .finish()
    }
}

impl<D: Measure> fmt::Display for SimpleUnit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl<D: Measure> PartialEq for SimpleUnit<D> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A currency identified by its ISO-style code. Rates are looked up at
/// conversion time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyUnit {
    code: String,
}

impl CurrencyUnit {
    pub fn new(code: &str) -> Self {
        CurrencyUnit { code: code.to_uppercase() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Any unit a value can be expressed in
#[derive(Debug, Clone, PartialEq)]
pub enum UnitType {
    Length(&'static SimpleUnit<Length>),
    Mass(&'static SimpleUnit<Mass>),
    Speed(&'static SimpleUnit<Speed>),
    Duration(&'static SimpleUnit<Duration>),
    Temperature(&'static SimpleUnit<Temperature>),
    Volume(&'static SimpleUnit<Volume>),
    /// Feet and inches together; belongs to the length dimension
    FootInch,
    Currency(CurrencyUnit),
}

impl UnitType {
    /// Display name
    pub fn name(&self) -> &str {
        match self {
            UnitType::Length(u) => u.name(),
            UnitType::Mass(u) => u.name(),
            UnitType::Speed(u) => u.name(),
            UnitType::Duration(u) => u.name(),
            UnitType::Temperature(u) => u.name(),
            UnitType::Volume(u) => u.name(),
            UnitType::FootInch => FOOT_INCH_NAME,
            UnitType::Currency(c) => c.code(),
        }
    }

    pub fn dimension(&self) -> UnitDimension {
        match self {
            UnitType::Length(_) | UnitType::FootInch => UnitDimension::Length,
            UnitType::Mass(_) => UnitDimension::Mass,
            UnitType::Speed(_) => UnitDimension::Speed,
            UnitType::Duration(_) => UnitDimension::Duration,
            UnitType::Temperature(_) => UnitDimension::Temperature,
            UnitType::Volume(_) => UnitDimension::Volume,
            UnitType::Currency(_) => UnitDimension::Currency,
        }
    }

    /// Create a value of `magnitude` in this unit
    pub fn from_float(&self, magnitude: f64) -> UnitVal {
        match self {
            UnitType::Length(u) => UnitVal::Length(u.from_float(magnitude)),
            UnitType::Mass(u) => UnitVal::Mass(u.from_float(magnitude)),
            UnitType::Speed(u) => UnitVal::Speed(u.from_float(magnitude)),
            UnitType::Duration(u) => UnitVal::Duration(u.from_float(magnitude)),
            UnitType::Temperature(u) => UnitVal::Temperature(u.from_float(magnitude)),
            UnitType::Volume(u) => UnitVal::Volume(u.from_float(magnitude)),
            UnitType::FootInch => UnitVal::FootInch(FootInchVal::new(magnitude, 0.0)),
            UnitType::Currency(c) => UnitVal::Currency(CurrencyVal::new(magnitude, c.clone())),
        }
    }

    /// Check if values of this unit can be converted to `other`
    pub fn is_compatible(&self, other: &UnitType) -> bool {
        self.dimension() == other.dimension()
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
