//! Unitbot Units - dimension-checked unit conversion
//!
//! Resolves unit names, builds values and converts between units of the
//! same dimension. Currency units are discovered from a remote rate service
//! on demand and their rates are cached.
//!
//! Dimensions:
//! - Length (m, km, in, ft, feet + inches, miles, ly, etc.)
//! - Mass (g, kg, lbs, stones)
//! - Temperature (°C, °F, K)
//! - Speed (mph, km/h, C)
//! - Volume (l, ml, gal, cup, tbsp, etc.)
//! - Duration (s, min, hr, days, years, etc.)
//! - Currency (USD, EUR, and whatever the rate service lists)

mod cache;
mod catalog;
mod convert;
mod currency;
mod dimension;
mod error;
mod format;
mod grammar;
mod registry;
mod unit;
mod value;

pub use cache::{RateCache, DEFAULT_SWEEP_INTERVAL, DEFAULT_TTL};
pub use catalog::{builtin_units, UnitEntry};
pub use convert::{convert, NoRates, RateSource};
pub use currency::{
    extra_aliases, pair_key, CurrConvClient, CurrencyInfo, CurrencyService, CURRENCY_ALIASES,
    DEFAULT_ENDPOINT,
};
pub use dimension::{Measure, UnitDimension};
pub use error::{ConversionError, CurrencyServiceError};
pub use format::format_general;
pub use grammar::{Command, Grammar, Quantity, USAGE};
pub use registry::{AliasTable, Bootstrap, BootstrapState, UnitRegistry};
pub use unit::{CurrencyUnit, SimpleUnit, UnitType, FOOT_INCH_NAME};
pub use value::{CurrencyVal, FootInchVal, SimpleUnitValue, UnitVal, DISPLAY_PRECISION};

/// Dimension tags for simple units
pub mod measure {
    pub use crate::dimension::{Duration, Length, Mass, Speed, Temperature, Volume};
}

/// Built-in unit definitions
pub mod units {
    pub use crate::catalog::{
        CELSIUS, CENTILITER, CENTIMETER, CUP, DAY, FAHRENHEIT, FATHOM, FLUID_OUNCE, FOOT,
        FURLONG, GALLON, GRAM, HOUR, INCH, KELVIN, KILOGRAM, KILOMETER, KILOMETERS_PER_HOUR,
        LIGHTYEAR, LIGHT_SPEED, LITER, METER, MILE, MILES_PER_HOUR, MILLILITER, MILLIMETER,
        MINUTE, MONTH, NANOMETER, NAUTICAL_MILE, PINT, POUND, QUART, SECOND, STONE,
        TABLESPOON, TEASPOON, WEEK, YARD, YEAR,
    };
}
