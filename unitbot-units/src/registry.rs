//! Unit registry
//!
//! Resolves user-typed unit names to [`UnitType`]s. The alias table starts
//! with the built-in catalog plus a static currency seed. The first lookup
//! that misses triggers a one-time bootstrap that pulls the supported
//! currency list from the [`CurrencyService`] and registers every code.
//! The bootstrap is never retried, whatever its outcome.

use std::collections::HashMap;
use std::iter;
use std::sync::{Arc, Condvar, Mutex, PoisonError, RwLock, RwLockReadGuard};

use tracing::{debug, error, info};

use crate::cache::RateCache;
use crate::catalog::builtin_units;
use crate::convert::RateSource;
use crate::currency::{extra_aliases, pair_key, CurrencyService, CURRENCY_ALIASES};
use crate::dimension::UnitDimension;
use crate::error::{ConversionError, CurrencyServiceError};
use crate::unit::{CurrencyUnit, UnitType};
use crate::value::UnitVal;

// ============ alias table ============

/// Case-insensitive map from alias to unit. Aliases are never overwritten.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, UnitType>,
    units: Vec<UnitType>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in catalog plus the seeded currencies
    pub fn builtin() -> Self {
        let mut table = AliasTable::new();
        for entry in builtin_units() {
            table.register(entry.unit, entry.aliases.iter().copied());
        }
        for (code, aliases) in CURRENCY_ALIASES {
            let unit = UnitType::Currency(CurrencyUnit::new(code));
            table.register(unit, iter::once(*code).chain(aliases.iter().copied()));
        }
        table
    }

    /// Register `unit` under `aliases`, skipping any alias already claimed.
    /// Returns how many aliases were added.
    pub fn register<I, S>(&mut self, unit: UnitType, aliases: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for alias in aliases {
            let alias = alias.as_ref().to_lowercase();
            if !self.aliases.contains_key(&alias) {
                self.aliases.insert(alias, unit.clone());
                added += 1;
            }
        }
        if !self.units.contains(&unit) {
            self.units.push(unit);
        }
        added
    }

    pub fn get(&self, alias: &str) -> Option<&UnitType> {
        self.aliases.get(&alias.to_lowercase())
    }

    /// Units of one dimension, in registration order
    pub fn units_in(&self, dimension: UnitDimension) -> Vec<UnitType> {
        self.units.iter().filter(|u| u.dimension() == dimension).cloned().collect()
    }

    /// Number of registered aliases
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

// ============ bootstrap ============

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Uninitialized,
    Bootstrapping,
    Ready,
    Failed,
}

/// Run-once gate. Callers arriving while the bootstrap runs wait for it.
#[derive(Debug)]
pub struct Bootstrap {
    state: Mutex<BootstrapState>,
    done: Condvar,
}

impl Bootstrap {
    pub fn new() -> Self {
        Bootstrap {
            state: Mutex::new(BootstrapState::Uninitialized),
            done: Condvar::new(),
        }
    }

    pub fn state(&self) -> BootstrapState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `init` if no attempt has been made yet, otherwise wait for the
    /// attempt in flight. Returns the settled state.
    pub fn run_once<F>(&self, init: F) -> BootstrapState
    where
        F: FnOnce() -> bool,
    {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            loop {
                match *state {
                    BootstrapState::Uninitialized => {
                        *state = BootstrapState::Bootstrapping;
                        break;
                    }
                    BootstrapState::Bootstrapping => {
                        state = self.done.wait(state).unwrap_or_else(PoisonError::into_inner);
                    }
                    settled => return settled,
                }
            }
        }

        // A panicking `init` still settles the gate as failed
        let mut completion = Completion { bootstrap: self, outcome: BootstrapState::Failed };
        if init() {
            completion.outcome = BootstrapState::Ready;
        }
        let outcome = completion.outcome;
        drop(completion);
        outcome
    }
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

struct Completion<'a> {
    bootstrap: &'a Bootstrap,
    outcome: BootstrapState,
}

impl Drop for Completion<'_> {
    fn drop(&mut self) {
        let mut state = self.bootstrap.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = self.outcome;
        self.bootstrap.done.notify_all();
    }
}

// ============ registry ============

/// Alias table, currency discovery and rate cache behind one handle
pub struct UnitRegistry {
    table: RwLock<AliasTable>,
    bootstrap: Bootstrap,
    service: Arc<dyn CurrencyService>,
    rates: RateCache,
}

impl UnitRegistry {
    pub fn new(service: Arc<dyn CurrencyService>) -> Self {
        Self::with_cache(service, RateCache::new())
    }

    pub fn with_cache(service: Arc<dyn CurrencyService>, rates: RateCache) -> Self {
        let table = AliasTable::builtin();
        info!(aliases = table.len(), "unit alias table built");
        UnitRegistry {
            table: RwLock::new(table),
            bootstrap: Bootstrap::new(),
            service,
            rates,
        }
    }

    /// Find a unit by alias, case-insensitively. A miss triggers the
    /// currency bootstrap the first time.
    pub fn lookup(&self, name: &str) -> Option<UnitType> {
        if let Some(unit) = self.read_table().get(name) {
            return Some(unit.clone());
        }
        self.bootstrap.run_once(|| self.load_currencies());
        self.read_table().get(name).cloned()
    }

    /// Like [`lookup`](Self::lookup) but reports a miss as an error
    pub fn resolve(&self, name: &str) -> Result<UnitType, ConversionError> {
        self.lookup(name).ok_or_else(|| ConversionError::UnknownUnit(name.to_string()))
    }

    /// Registered units of one dimension, in registration order
    pub fn units_in(&self, dimension: UnitDimension) -> Vec<UnitType> {
        self.read_table().units_in(dimension)
    }

    /// Convert with this registry supplying exchange rates
    pub fn convert(&self, value: &UnitVal, to: &UnitType) -> Result<UnitVal, ConversionError> {
        value.convert(to, self)
    }

    pub fn bootstrap_state(&self) -> BootstrapState {
        self.bootstrap.state()
    }

    pub fn rates(&self) -> &RateCache {
        &self.rates
    }

    fn read_table(&self) -> RwLockReadGuard<'_, AliasTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn load_currencies(&self) -> bool {
        info!("loading currencies");
        let currencies = match self.service.currencies() {
            Ok(currencies) => currencies,
            Err(CurrencyServiceError::MissingCredential) => {
                info!("currency API key not set, currency conversion is not available");
                return false;
            }
            Err(e) => {
                error!(error = %e, "failed to load currencies");
                return false;
            }
        };

        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let mut added = 0;
        for currency in &currencies {
            debug!(code = %currency.id, name = %currency.name, "registering currency");
            let unit = UnitType::Currency(CurrencyUnit::new(&currency.id));
            let aliases = iter::once(currency.id.as_str())
                .chain(extra_aliases(&currency.id).iter().copied());
            added += table.register(unit, aliases);
        }
        info!(currencies = currencies.len(), aliases_added = added, "currencies loaded");
        true
    }
}

impl RateSource for UnitRegistry {
    fn rate(&self, from: &CurrencyUnit, to: &CurrencyUnit) -> Result<f64, ConversionError> {
        let key = pair_key(from.code(), to.code());
        self.rates
            .get_or_fetch(&key, || self.service.rate(from.code(), to.code()))
            .map_err(|e| {
                match e {
                    CurrencyServiceError::MissingCredential => {
                        debug!(pair = %key, "no currency API key, rate unavailable")
                    }
                    e => error!(pair = %key, error = %e, "error calling currency service"),
                }
                ConversionError::CurrencyServiceUnavailable
            })
    }
}
