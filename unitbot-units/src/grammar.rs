//! Command grammar
//!
//! ```text
//! command  := quantity "to" unit
//! quantity := float unit              (simple)
//!           | int foot-mark [int [inch-mark]]
//!           | currency-symbol float   (no space between)
//! ```
//!
//! Alternatives are tried in that order and the first match wins.

use unitbot_parser::prelude::*;

use crate::error::ConversionError;
use crate::registry::UnitRegistry;
use crate::value::{FootInchVal, UnitVal};

/// Reply for input that does not match the grammar
pub const USAGE: &str = "Usage: !conv [amount][from-unit] to [to-unit]";

const UNIT_PATTERN: &str = r"[A-Za-z+/$€¥£]+";
const CURRENCY_SYMBOLS: &str = "$€¥£";
const FOOT_MARKS: &str = "'’";
const INCH_MARKS: &str = "\"”";

/// A parsed amount whose unit name is not yet resolved
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    Simple { magnitude: f64, unit: String },
    FeetInches { feet: f64, inches: f64 },
}

impl Quantity {
    /// Resolve the unit name and build a value
    pub fn resolve(&self, registry: &UnitRegistry) -> Result<UnitVal, ConversionError> {
        match self {
            Quantity::Simple { magnitude, unit } => {
                Ok(registry.resolve(unit)?.from_float(*magnitude))
            }
            Quantity::FeetInches { feet, inches } => {
                Ok(UnitVal::FootInch(FootInchVal::new(*feet, *inches)))
            }
        }
    }
}

/// `<quantity> to <unit>`
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub from: Quantity,
    pub to: String,
}

/// Compiled command and quantity parsers
#[derive(Debug)]
pub struct Grammar {
    quantity: BoxedParser<Quantity>,
    command: BoxedParser<Command>,
}

impl Grammar {
    pub fn new() -> Result<Self, PatternError> {
        let command = sequence((quantity()?, literal("to"), token(UNIT_PATTERN)?))
            .map(|(from, _, to)| Command { from, to });

        Ok(Grammar {
            quantity: quantity()?.boxed(),
            command: command.boxed(),
        })
    }

    /// Parse a full command. Input after the destination unit is ignored.
    pub fn parse_command(&self, input: &str) -> Option<Command> {
        self.command.parse(input).into_value()
    }

    /// Parse just a quantity such as `6.4cm`, `5'11"` or `$5`
    pub fn parse_quantity(&self, input: &str) -> Option<Quantity> {
        self.quantity.parse(input).into_value()
    }
}

fn quantity() -> Result<impl Parser<Output = Quantity> + Send + Sync + 'static, PatternError> {
    let simple = sequence((float()?, token(UNIT_PATTERN)?))
        .map(|(magnitude, unit)| Quantity::Simple { magnitude, unit });

    let inches = sequence((int()?, one_of(INCH_MARKS).optional())).map(|(inches, _)| inches);
    let feet_inches = sequence((int()?, one_of(FOOT_MARKS), inches.or_default(0)))
        .map(|(feet, _, inches)| Quantity::FeetInches { feet: feet as f64, inches: inches as f64 });

    let currency = sequence((one_of(CURRENCY_SYMBOLS), float_raw()?))
        .map(|(symbol, magnitude)| Quantity::Simple { magnitude, unit: symbol.to_string() });

    Ok(first_of((simple, feet_inches, currency)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> Grammar {
        Grammar::new().unwrap()
    }

    fn simple(magnitude: f64, unit: &str) -> Quantity {
        Quantity::Simple { magnitude, unit: unit.to_string() }
    }

    #[test]
    fn test_simple_command() {
        let cmd = grammar().parse_command("6.4cm to m").unwrap();
        assert_eq!(cmd, Command { from: simple(6.4, "cm"), to: "m".into() });
    }

    #[test]
    fn test_spacing_and_compound_units() {
        let g = grammar();
        let cmd = g.parse_command("  5 km/h   to mph").unwrap();
        assert_eq!(cmd.from, simple(5.0, "km/h"));
        assert_eq!(cmd.to, "mph");
    }

    #[test]
    fn test_feet_without_inches() {
        let g = grammar();
        let a = g.parse_command("6' to m").unwrap();
        let b = g.parse_command("6'0 to m").unwrap();
        assert_eq!(a.from, Quantity::FeetInches { feet: 6.0, inches: 0.0 });
        assert_eq!(a, b);
    }

    #[test]
    fn test_feet_and_inches_marks() {
        let g = grammar();
        let ascii = g.parse_command("5'11\" to cm").unwrap();
        let typographic = g.parse_command("5’11” to cm").unwrap();
        assert_eq!(ascii.from, Quantity::FeetInches { feet: 5.0, inches: 11.0 });
        assert_eq!(ascii, typographic);
    }

    #[test]
    fn test_trailing_dot() {
        let g = grammar();
        assert_eq!(g.parse_command("5. ft to m").unwrap().from, simple(5.0, "ft"));
        assert_eq!(g.parse_command("5. to m"), None);
    }

    #[test]
    fn test_currency_literal() {
        let g = grammar();
        let cmd = g.parse_command("$5 to EUR").unwrap();
        assert_eq!(cmd, Command { from: simple(5.0, "$"), to: "EUR".into() });

        let cmd = g.parse_command("€3,50 to usd").unwrap();
        assert_eq!(cmd.from, simple(3.5, "€"));
    }

    #[test]
    fn test_currency_symbol_must_abut() {
        assert_eq!(grammar().parse_command("$ 5 to EUR"), None);
    }

    #[test]
    fn test_mismatches() {
        let g = grammar();
        assert_eq!(g.parse_command(""), None);
        assert_eq!(g.parse_command("hello"), None);
        assert_eq!(g.parse_command("5 m to"), None);
        assert_eq!(g.parse_command("m to ft"), None);
    }

    #[test]
    fn test_trailing_input_ignored() {
        let cmd = grammar().parse_command("5 m to ft please").unwrap();
        assert_eq!(cmd.to, "ft");
    }

    #[test]
    fn test_parse_quantity() {
        let g = grammar();
        assert_eq!(g.parse_quantity("5 ft"), Some(simple(5.0, "ft")));
        assert_eq!(g.parse_quantity("£20"), Some(simple(20.0, "£")));
        assert_eq!(g.parse_quantity("6'2"), Some(Quantity::FeetInches { feet: 6.0, inches: 2.0 }));
        assert_eq!(g.parse_quantity("tall"), None);
    }

    #[test]
    fn test_scientific_magnitude() {
        let cmd = grammar().parse_command("-1.5e3 g to kg").unwrap();
        assert_eq!(cmd.from, simple(-1500.0, "g"));
    }
}
