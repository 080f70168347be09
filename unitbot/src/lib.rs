//! Unitbot - unit and currency conversion for chat commands
//!
//! ```ignore
//! let bot = UnitBot::new(&BotConfig::from_env()?)?;
//! assert_eq!(bot.process("6.4cm to m"), "6.4 cm = 0.064 m");
//! ```
//!
//! Every entry point answers with a single line. Failures become the user
//! facing message of the matching [`BotError`] rather than an error value;
//! the `try_` variants expose the error instead.

mod config;
mod error;

pub use config::BotConfig;
pub use error::{BotError, BotResult};
pub use unitbot_units::{ConversionError, CurrencyService, UnitDimension, UnitType, UnitVal, USAGE};

use std::sync::Arc;

use tracing::{debug, info};
use unitbot_units::{CurrConvClient, Grammar, Quantity, RateCache, UnitRegistry};

/// Parses commands and converts quantities
pub struct UnitBot {
    grammar: Grammar,
    registry: UnitRegistry,
}

impl UnitBot {
    /// Bot backed by the HTTP rate service described in `config`
    pub fn new(config: &BotConfig) -> BotResult<Self> {
        let client = CurrConvClient::new(
            config.currency_endpoint.clone(),
            config.currency_api_key.clone(),
            config.request_timeout(),
        )
        .map_err(|e| BotError::Config(e.to_string()))?;

        if !client.has_credential() {
            info!("currency API key was not set, currency conversion is not available");
        }
        Self::with_service(config, Arc::new(client))
    }

    /// Bot backed by a caller-supplied rate service
    pub fn with_service(config: &BotConfig, service: Arc<dyn CurrencyService>) -> BotResult<Self> {
        let grammar = Grammar::new()?;
        let rates = RateCache::with_ttl(config.rate_ttl(), config.sweep_interval());
        Ok(UnitBot {
            grammar,
            registry: UnitRegistry::with_cache(service, rates),
        })
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Answer a full `<quantity> to <unit>` command
    pub fn process(&self, text: &str) -> String {
        reply(self.try_process(text))
    }

    pub fn try_process(&self, text: &str) -> BotResult<String> {
        let command = self.grammar.parse_command(text).ok_or_else(|| {
            debug!(input = text, "invalid command");
            BotError::GrammarMismatch
        })?;
        let from = command.from.resolve(&self.registry)?;
        self.render(&from, &command.to)
    }

    /// Answer with the quantity and destination unit given separately
    pub fn convert(&self, quantity: &str, to: &str) -> String {
        reply(self.try_convert(quantity, to))
    }

    pub fn try_convert(&self, quantity: &str, to: &str) -> BotResult<String> {
        let from = self.parse_quantity(quantity)?.resolve(&self.registry)?;
        self.render(&from, to)
    }

    /// Answer for a numeric amount with named units
    pub fn convert_value(&self, value: f64, from: &str, to: &str) -> String {
        reply(self.try_convert_value(value, from, to))
    }

    pub fn try_convert_value(&self, value: f64, from: &str, to: &str) -> BotResult<String> {
        let from = self.registry.resolve(from)?.from_float(value);
        self.render(&from, to)
    }

    /// Display names of units in the quantity's dimension starting with
    /// `partial`. Empty when the quantity does not parse or resolve.
    pub fn autocomplete(&self, quantity: &str, partial: &str) -> Vec<String> {
        let resolved = self
            .parse_quantity(quantity)
            .and_then(|q| q.resolve(&self.registry).map_err(BotError::from));
        let dimension = match resolved {
            Ok(value) => value.dimension(),
            Err(e) => {
                debug!(input = quantity, error = %e, "no completions");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = Vec::new();
        for unit in self.registry.units_in(dimension) {
            let name = unit.name();
            if name.starts_with(partial) && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    fn parse_quantity(&self, text: &str) -> BotResult<Quantity> {
        self.grammar.parse_quantity(text).ok_or_else(|| {
            debug!(input = text, "invalid quantity");
            BotError::GrammarMismatch
        })
    }

    fn render(&self, from: &UnitVal, to: &str) -> BotResult<String> {
        let to = self.registry.resolve(to)?;
        let converted = self.registry.convert(from, &to)?;
        Ok(format!("{} = {}", from, converted))
    }
}

fn reply(result: BotResult<String>) -> String {
    result.unwrap_or_else(|e| e.to_string())
}
