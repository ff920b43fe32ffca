use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::transport::{ALPHA_UNIT_ID, DEFAULT_POLL_DELAY, DEFAULT_TRIES};
use crate::ModbusError;

pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Settings for one RS485 link to a controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Serial device path.
    pub port: String,
    pub baud_rate: u32,
    pub unit_id: u8,
    /// Polls per response byte before giving up.
    pub tries: u32,
    pub poll_delay_ms: u64,
    /// Quiet time before every request. Some controllers drop requests
    /// that follow the previous answer too closely; 80 ms is enough for
    /// those.
    pub inter_request_delay_ms: u64,
    /// First two characters of the inverter serial number, `AL` or `AE`.
    pub serial_number_prefix: String,
    /// Drive RTS high while transmitting.
    pub rts_direction: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            port: "/dev/ttyUSB0".to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            unit_id: ALPHA_UNIT_ID,
            tries: DEFAULT_TRIES,
            poll_delay_ms: DEFAULT_POLL_DELAY.as_millis() as u64,
            inter_request_delay_ms: 0,
            serial_number_prefix: "AL".to_string(),
            rts_direction: false,
        }
    }
}

impl LinkConfig {
    /// Prefix of the environment variables that override file settings,
    /// e.g. `ALPHA_BAUD_RATE`.
    pub const ENV_PREFIX: &'static str = "ALPHA_";

    /// Defaults, then the TOML file at `path` if one is given, then the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ModbusError> {
        let mut figment = Figment::from(Serialized::defaults(LinkConfig::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ModbusError::ConfigFileMissing(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(Self::ENV_PREFIX)).extract()?)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ModbusError> {
        Ok(Figment::from(Serialized::defaults(LinkConfig::default()))
            .merge(Toml::string(toml))
            .extract()?)
    }

    pub fn poll_delay(&self) -> Duration {
        Duration::from_millis(self.poll_delay_ms)
    }

    pub fn inter_request_delay(&self) -> Duration {
        Duration::from_millis(self.inter_request_delay_ms)
    }
}
