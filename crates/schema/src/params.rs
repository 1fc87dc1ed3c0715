//! Named model parameters.

use std::collections::BTreeMap;

use crate::error::{SchemaError, TableKind, Violation};
use crate::keys::{
    FIXED_REMOVAL_KEY, HARVEST_DELAY_KEY, INTEGER_SWITCHES, PARAM_KEYS, PLANT_PARAM_KEYS,
    SITE_PARAM_KEYS,
};
use crate::validate::{ValidationCollector, check_key_set};

/// Values above this select fixed-amount harvest removal.
const FIXED_REMOVAL_THRESHOLD: f64 = 0.9;

/// Distance from a whole number still accepted as integral.
const INTEGRAL_TOLERANCE: f64 = 1e-5;

/// Flat mapping of parameter name to value.
///
/// Construction is unchecked; [`validate_params`] enforces the schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationParameters {
    values: BTreeMap<String, f64>,
}

impl SimulationParameters {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(key.into(), value)
    }

    /// Sets `key`, builder style.
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key)
    }

    /// Returns the value of `key`.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Number of parameters present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parameter names in lexical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The plant subset of the parameters present.
    pub fn plant(&self) -> BTreeMap<&'static str, f64> {
        self.subset(PLANT_PARAM_KEYS)
    }

    /// The site subset of the parameters present.
    pub fn site(&self) -> BTreeMap<&'static str, f64> {
        self.subset(SITE_PARAM_KEYS)
    }

    fn subset(&self, keys: &[&'static str]) -> BTreeMap<&'static str, f64> {
        keys.iter()
            .filter_map(|&k| self.get(k).map(|v| (k, v)))
            .collect()
    }

    /// Whether harvests remove a fixed amount rather than cutting to a
    /// target.
    pub fn fixed_removal(&self) -> bool {
        self.get(FIXED_REMOVAL_KEY)
            .is_some_and(|v| v > FIXED_REMOVAL_THRESHOLD)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SimulationParameters {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn is_integral(value: f64) -> bool {
    (value - value.round()).abs() <= INTEGRAL_TOLERANCE
}

/// Validates a parameter mapping against the fixed schema.
///
/// Checks, in order: exact key set; no NaN values; integer switches are
/// whole numbers; the reseed-to-harvest delay is at least one and
/// effectively integral.
///
/// # Errors
///
/// Returns [`SchemaError::Invalid`] listing every failed check.
pub fn validate_params(params: &SimulationParameters) -> Result<(), SchemaError> {
    let mut c = ValidationCollector::new(TableKind::Parameters);

    check_key_set(&mut c, params.keys(), PARAM_KEYS);
    c.checkpoint()?;

    for (key, value) in &params.values {
        if value.is_nan() {
            c.push(Violation::UndefinedParameter { key: key.clone() });
        }
    }
    c.checkpoint()?;

    for &key in INTEGER_SWITCHES {
        if let Some(value) = params.get(key)
            && value.fract() != 0.0
        {
            c.push(Violation::SwitchNotIntegral {
                key: key.to_string(),
                value,
            });
        }
    }

    if let Some(delay) = params.get(HARVEST_DELAY_KEY) {
        if delay < 1.0 {
            c.push(Violation::HarvestDelayTooShort { value: delay });
        }
        if !is_integral(delay) {
            c.push(Violation::HarvestDelayNotIntegral { value: delay });
        }
    }

    c.finish()
}
