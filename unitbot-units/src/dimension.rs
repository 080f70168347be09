//! Dimensions of convertible quantities
//!
//! Two units can be converted into each other only when they share a
//! dimension. Simple unit families additionally carry a compile-time
//! [`Measure`] tag so that, for example, a length value can only ever be
//! relabelled with another length unit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Family of physical quantity a unit belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitDimension {
    #[default]
    None,
    Length,
    Mass,
    Speed,
    Duration,
    Temperature,
    Volume,
    Currency,
}

impl UnitDimension {
    pub fn name(&self) -> &'static str {
        match self {
            UnitDimension::None => "none",
            UnitDimension::Length => "length",
            UnitDimension::Mass => "mass",
            UnitDimension::Speed => "speed",
            UnitDimension::Duration => "duration",
            UnitDimension::Temperature => "temperature",
            UnitDimension::Volume => "volume",
            UnitDimension::Currency => "currency",
        }
    }

}

impl fmt::Display for UnitDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compile-time tag for a simple unit family
pub trait Measure: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    const DIMENSION: UnitDimension;
}

/// Length, stored in metres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length;

/// Mass, stored in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mass;

/// Speed, stored in metres per second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed;

/// Duration, stored in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration;

/// Temperature, stored in kelvin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Temperature;

/// Volume, stored in litres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume;

impl Measure for Length {
    const DIMENSION: UnitDimension = UnitDimension::Length;
}

impl Measure for Mass {
    const DIMENSION: UnitDimension = UnitDimension::Mass;
}

impl Measure for Speed {
    const DIMENSION: UnitDimension = UnitDimension::Speed;
}

impl Measure for Duration {
    const DIMENSION: UnitDimension = UnitDimension::Duration;
}

impl Measure for Temperature {
    const DIMENSION: UnitDimension = UnitDimension::Temperature;
}

impl Measure for Volume {
    const DIMENSION: UnitDimension = UnitDimension::Volume;
}
