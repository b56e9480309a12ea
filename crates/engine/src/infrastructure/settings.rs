//! Engine settings.
//!
//! Settings come from the environment with per-field defaults. An invalid
//! value never fails startup: it is logged and the default is used.
//!
//! Supported environment variables:
//! - `IRONPATH_ROUTE_PATH`, `IRONPATH_FACTS_PATH`, `IRONPATH_REGISTRY_PATH`: document locations
//! - `IRONPATH_MAX_STEPS`: plan length cap (default 10)
//! - `IRONPATH_SIMULATION`: enable catch-up simulation (default false)
//! - `IRONPATH_CATCH_UP_DELTA`: max levels per catch-up step, 0 for unbounded (default 5)

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ROUTE_PATH_VAR: &str = "IRONPATH_ROUTE_PATH";
pub const FACTS_PATH_VAR: &str = "IRONPATH_FACTS_PATH";
pub const REGISTRY_PATH_VAR: &str = "IRONPATH_REGISTRY_PATH";
pub const MAX_STEPS_VAR: &str = "IRONPATH_MAX_STEPS";
pub const SIMULATION_VAR: &str = "IRONPATH_SIMULATION";
pub const CATCH_UP_DELTA_VAR: &str = "IRONPATH_CATCH_UP_DELTA";

pub const DEFAULT_MAX_STEPS: usize = 10;
pub const DEFAULT_CATCH_UP_DELTA: u32 = 5;

/// Errors that can occur while reading settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl SettingsError {
    pub fn invalid(var: &'static str, value: impl ToString, reason: impl ToString) -> Self {
        Self::InvalidValue {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// The opt-in forward simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationSettings {
    pub enabled: bool,
    /// Max levels a single catch-up step may cover; 0 means unbounded
    pub max_level_delta_per_step: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            max_level_delta_per_step: DEFAULT_CATCH_UP_DELTA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineSettings {
    pub route_path: Option<PathBuf>,
    pub facts_path: Option<PathBuf>,
    pub registry_path: Option<PathBuf>,
    pub max_steps: usize,
    pub simulation: SimulationSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            route_path: None,
            facts_path: None,
            registry_path: None,
            max_steps: DEFAULT_MAX_STEPS,
            simulation: SimulationSettings::default(),
        }
    }
}

impl EngineSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        Self {
            route_path: path(ROUTE_PATH_VAR),
            facts_path: path(FACTS_PATH_VAR),
            registry_path: path(REGISTRY_PATH_VAR),
            max_steps: or_default(
                parse_var::<usize>(&lookup, MAX_STEPS_VAR),
                defaults.max_steps,
            ),
            simulation: SimulationSettings {
                enabled: or_default(
                    parse_flag(&lookup, SIMULATION_VAR),
                    defaults.simulation.enabled,
                ),
                max_level_delta_per_step: or_default(
                    parse_var::<u32>(&lookup, CATCH_UP_DELTA_VAR),
                    defaults.simulation.max_level_delta_per_step,
                ),
            },
        }
    }
}

fn or_default<T: std::fmt::Debug>(parsed: Result<Option<T>, SettingsError>, default: T) -> T {
    match parsed {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(error = %e, default = ?default, "Ignoring invalid setting");
            default
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, SettingsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| SettingsError::invalid(var, &raw, e))
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<bool>, SettingsError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(SettingsError::invalid(var, &raw, "expected true or false")),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn when_nothing_is_set_then_defaults_apply() {
        let settings = EngineSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.max_steps, 10);
        assert!(!settings.simulation.enabled);
        assert_eq!(settings.simulation.max_level_delta_per_step, 5);
    }

    #[test]
    fn when_values_are_set_then_they_are_used() {
        let settings = EngineSettings::from_lookup(lookup(&[
            (ROUTE_PATH_VAR, "/data/route.json"),
            (FACTS_PATH_VAR, "  "),
            (MAX_STEPS_VAR, " 25 "),
            (SIMULATION_VAR, "Yes"),
            (CATCH_UP_DELTA_VAR, "0"),
        ]));

        assert_eq!(settings.route_path, Some(PathBuf::from("/data/route.json")));
        assert_eq!(settings.facts_path, None);
        assert_eq!(settings.max_steps, 25);
        assert!(settings.simulation.enabled);
        assert_eq!(settings.simulation.max_level_delta_per_step, 0);
    }

    #[test]
    fn when_values_are_invalid_then_defaults_apply() {
        let settings = EngineSettings::from_lookup(lookup(&[
            (MAX_STEPS_VAR, "-3"),
            (SIMULATION_VAR, "maybe"),
            (CATCH_UP_DELTA_VAR, "five"),
        ]));

        assert_eq!(settings.max_steps, DEFAULT_MAX_STEPS);
        assert!(!settings.simulation.enabled);
        assert_eq!(settings.simulation.max_level_delta_per_step, DEFAULT_CATCH_UP_DELTA);
    }

    #[test]
    fn invalid_flag_reports_the_variable() {
        let err = parse_flag(&lookup(&[(SIMULATION_VAR, "maybe")]), SIMULATION_VAR)
            .expect_err("invalid");
        assert_eq!(
            err,
            SettingsError::invalid(SIMULATION_VAR, "maybe", "expected true or false")
        );
    }

    #[test]
    fn settings_deserialize_with_partial_fields() {
        let settings: EngineSettings =
            serde_json::from_str(r#"{"maxSteps": 3, "simulation": {"enabled": true}}"#)
                .expect("settings");
        assert_eq!(settings.max_steps, 3);
        assert!(settings.simulation.enabled);
        assert_eq!(settings.simulation.max_level_delta_per_step, DEFAULT_CATCH_UP_DELTA);
    }
}
