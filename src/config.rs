use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::{
    error::{env_var_error, Error},
    external::Permission,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub tick: Duration,
    pub aspect_ratio: f64,
    pub drift_max: f64,
    pub permission: Permission,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            tick: Duration::from_millis(5000),
            aspect_ratio: 0.5,
            drift_max: 0.0005,
            permission: Permission::Granted,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            listen_addr: var_or("COURIER_LISTEN_ADDR", defaults.listen_addr)?,
            tick: Duration::from_millis(var_or(
                "COURIER_TICK_MS",
                defaults.tick.as_millis() as u64,
            )?),
            aspect_ratio: var_or("COURIER_ASPECT_RATIO", defaults.aspect_ratio)?,
            drift_max: var_or("COURIER_DRIFT_MAX", defaults.drift_max)?,
            permission: var_or("COURIER_LOCATION_PERMISSION", defaults.permission)?,
        };

        config.validate()?;

        Ok(config)
    }

    /// Rejects values the drift feed cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.tick.is_zero() {
            return Err(env_var_error("COURIER_TICK_MS"));
        }

        if !self.drift_max.is_finite() || self.drift_max < 0.0 {
            return Err(env_var_error("COURIER_DRIFT_MAX"));
        }

        Ok(())
    }
}

fn var_or<T: FromStr>(key: &str, default: T) -> Result<T, Error> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| env_var_error(key)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_fall_back() {
        assert_eq!(var_or("COURIER_TEST_UNSET_VARIABLE", 42u64).unwrap(), 42);
    }

    #[test]
    fn parses_present_variables() {
        env::set_var("COURIER_TEST_TICK", " 250 ");
        assert_eq!(var_or("COURIER_TEST_TICK", 0u64).unwrap(), 250);

        env::set_var("COURIER_TEST_PERMISSION", "denied");
        assert_eq!(
            var_or("COURIER_TEST_PERMISSION", Permission::Granted).unwrap(),
            Permission::Denied
        );
    }

    #[test]
    fn malformed_variable_is_env_error() {
        env::set_var("COURIER_TEST_RATIO", "wide");

        let err = var_or("COURIER_TEST_RATIO", 0.5f64).unwrap_err();
        assert_eq!(err.code, 1);
    }

    #[test]
    fn zero_tick_is_rejected() {
        let config = Config {
            tick: Duration::from_millis(0),
            ..Config::default()
        };

        assert_eq!(config.validate().unwrap_err().code, 1);
    }

    #[test]
    fn non_finite_or_negative_drift_is_rejected() {
        for drift_max in [f64::INFINITY, f64::NAN, -0.0005] {
            let config = Config {
                drift_max,
                ..Config::default()
            };

            assert_eq!(config.validate().unwrap_err().code, 1);
        }

        let still = Config {
            drift_max: 0.0,
            ..Config::default()
        };
        assert!(still.validate().is_ok());
    }

    #[test]
    fn defaults_match_reference_cadence() {
        let config = Config::default();

        assert_eq!(config.tick, Duration::from_millis(5000));
        assert_eq!(config.drift_max, 0.0005);
        assert!(config.validate().is_ok());
    }
}
