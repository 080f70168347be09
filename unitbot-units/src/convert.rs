//! Dimension-aware conversion between unit values

use tracing::debug;

use crate::error::ConversionError;
use crate::unit::{CurrencyUnit, UnitType};
use crate::value::{CurrencyVal, FootInchVal, SimpleUnitValue, UnitVal};

/// Supplies exchange rates for currency conversions
pub trait RateSource {
    /// Multiplier taking an amount in `from` to an amount in `to`
    fn rate(&self, from: &CurrencyUnit, to: &CurrencyUnit) -> Result<f64, ConversionError>;
}

/// Rate source for contexts with no currency support
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRates;

impl RateSource for NoRates {
    fn rate(&self, _from: &CurrencyUnit, _to: &CurrencyUnit) -> Result<f64, ConversionError> {
        Err(ConversionError::CurrencyServiceUnavailable)
    }
}

/// Convert `value` into the unit `to`
///
/// Values in the same simple-unit family are relabeled. Feet+inches and
/// plain length units convert through meters. Currencies multiply by the
/// rate from `rates`. Every other pairing is a [`ConversionError::DimensionMismatch`].
pub fn convert(
    value: &UnitVal,
    to: &UnitType,
    rates: &dyn RateSource,
) -> Result<UnitVal, ConversionError> {
    let from = value.unit();
    if !from.is_compatible(to) {
        return Err(mismatch(&from, to));
    }

    let converted = match (value, to) {
        (UnitVal::Length(v), UnitType::Length(u)) => UnitVal::Length(v.relabel(*u)),
        (UnitVal::Mass(v), UnitType::Mass(u)) => UnitVal::Mass(v.relabel(*u)),
        (UnitVal::Speed(v), UnitType::Speed(u)) => UnitVal::Speed(v.relabel(*u)),
        (UnitVal::Duration(v), UnitType::Duration(u)) => UnitVal::Duration(v.relabel(*u)),
        (UnitVal::Temperature(v), UnitType::Temperature(u)) => UnitVal::Temperature(v.relabel(*u)),
        (UnitVal::Volume(v), UnitType::Volume(u)) => UnitVal::Volume(v.relabel(*u)),

        (UnitVal::Length(v), UnitType::FootInch) => {
            UnitVal::FootInch(FootInchVal::from_meters(v.canonical()))
        }
        (UnitVal::FootInch(v), UnitType::Length(u)) => {
            UnitVal::Length(SimpleUnitValue::from_canonical(v.to_meters(), *u))
        }
        (UnitVal::FootInch(v), UnitType::FootInch) => UnitVal::FootInch(*v),

        (UnitVal::Currency(v), UnitType::Currency(u)) => {
            let rate = rates.rate(&v.unit, u)?;
            debug!(from = %v.unit, to = %u, rate, "applied exchange rate");
            UnitVal::Currency(CurrencyVal::new(v.amount * rate, u.clone()))
        }

        _ => return Err(mismatch(&from, to)),
    };

    Ok(converted)
}

fn mismatch(from: &UnitType, to: &UnitType) -> ConversionError {
    ConversionError::DimensionMismatch {
        from: from.name().to_string(),
        to: to.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CELSIUS, CENTIMETER, FAHRENHEIT, FOOT, GRAM, INCH, KILOGRAM, METER, POUND};

    struct FixedRate(f64);

    impl RateSource for FixedRate {
        fn rate(&self, _from: &CurrencyUnit, _to: &CurrencyUnit) -> Result<f64, ConversionError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_relabel_same_dimension() {
        let v = UnitVal::Length(CENTIMETER.from_float(6.4));
        let out = convert(&v, &UnitType::Length(&METER), &NoRates).unwrap();
        assert_eq!(out.to_string(), "0.064 m");
    }

    #[test]
    fn test_mass() {
        let v = UnitVal::Mass(KILOGRAM.from_float(1.0));
        let out = convert(&v, &UnitType::Mass(&POUND), &NoRates).unwrap();
        assert_eq!(out.to_string(), "2.20462 lbs");
    }

    #[test]
    fn test_temperature() {
        let v = UnitVal::Temperature(CELSIUS.from_float(100.0));
        let out = convert(&v, &UnitType::Temperature(&FAHRENHEIT), &NoRates).unwrap();
        assert_eq!(out.to_string(), "212 °F");
    }

    #[test]
    fn test_dimension_mismatch() {
        let v = UnitVal::Mass(GRAM.from_float(3.0));
        let err = convert(&v, &UnitType::Length(&METER), &NoRates).unwrap_err();
        assert_eq!(err, ConversionError::DimensionMismatch { from: "g".into(), to: "m".into() });
    }

    #[test]
    fn test_foot_inch_to_length() {
        let v = UnitVal::FootInch(FootInchVal::new(5.0, 0.0));
        let out = convert(&v, &UnitType::Length(&METER), &NoRates).unwrap();
        assert_eq!(out.to_string(), "1.524 m");

        let v = UnitVal::FootInch(FootInchVal::new(6.0, 1.0));
        let out = convert(&v, &UnitType::Length(&INCH), &NoRates).unwrap();
        assert_eq!(out.to_string(), "73 in");
    }

    #[test]
    fn test_length_to_foot_inch() {
        let v = UnitVal::Length(CENTIMETER.from_float(180.0));
        match convert(&v, &UnitType::FootInch, &NoRates).unwrap() {
            UnitVal::FootInch(fi) => {
                assert_eq!(fi.feet, 5.0);
                assert!((fi.inches - 10.8661).abs() < 1e-3);
            }
            other => panic!("expected feet+inches, got {:?}", other),
        }
    }

    #[test]
    fn test_foot_inch_identity() {
        let v = UnitVal::FootInch(FootInchVal::new(5.0, 11.0));
        assert_eq!(convert(&v, &UnitType::FootInch, &NoRates).unwrap(), v);
    }

    #[test]
    fn test_foot_to_foot_inch() {
        let v = UnitVal::Length(FOOT.from_float(6.5));
        let out = convert(&v, &UnitType::FootInch, &NoRates).unwrap();
        assert_eq!(out.to_string(), "6' 6\"");
    }

    #[test]
    fn test_currency() {
        let v = UnitVal::Currency(CurrencyVal::new(5.0, CurrencyUnit::new("USD")));
        let to = UnitType::Currency(CurrencyUnit::new("EUR"));
        let out = convert(&v, &to, &FixedRate(0.9)).unwrap();
        assert_eq!(out.to_string(), "4.50 EUR");
    }

    #[test]
    fn test_currency_unavailable() {
        let v = UnitVal::Currency(CurrencyVal::new(5.0, CurrencyUnit::new("USD")));
        let to = UnitType::Currency(CurrencyUnit::new("EUR"));
        assert_eq!(convert(&v, &to, &NoRates), Err(ConversionError::CurrencyServiceUnavailable));
    }

    #[test]
    fn test_currency_to_length_mismatch() {
        let v = UnitVal::Currency(CurrencyVal::new(5.0, CurrencyUnit::new("USD")));
        let err = convert(&v, &UnitType::Length(&METER), &FixedRate(1.0)).unwrap_err();
        assert!(matches!(err, ConversionError::DimensionMismatch { .. }));
    }
}
