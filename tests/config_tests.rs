use std::io::Write;
use std::path::Path;
use std::time::Duration;

use alpha_modbus_protocol::{LinkConfig, ModbusError, RegisterHandler, ScriptedChannel};
use figment::Jail;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LinkConfig::default();

        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.unit_id, 0x55);
        assert_eq!(config.tries, 8);
        assert_eq!(config.poll_delay(), Duration::from_millis(50));
        assert_eq!(config.inter_request_delay(), Duration::ZERO);
        assert_eq!(config.serial_number_prefix, "AL");
        assert!(!config.rts_direction);
    }

    #[test]
    fn test_from_toml_str_keeps_unset_defaults() {
        let config = LinkConfig::from_toml_str(
            r#"
            port = "/dev/ttyAMA0"
            inter_request_delay_ms = 80
            serial_number_prefix = "AE"
            "#,
        )
        .unwrap();

        assert_eq!(config.port, "/dev/ttyAMA0");
        assert_eq!(config.inter_request_delay(), Duration::from_millis(80));
        assert_eq!(config.serial_number_prefix, "AE");
        assert_eq!(config.baud_rate, 9600);
    }

    #[test]
    fn test_from_toml_str_rejects_bad_types() {
        let result = LinkConfig::from_toml_str("baud_rate = \"fast\"");
        assert!(matches!(result, Err(ModbusError::Config(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "baud_rate = 19200\ntries = 4").unwrap();

        let config = LinkConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.baud_rate, 19200);
        assert_eq!(config.tries, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let result = LinkConfig::load(Some(Path::new("/nonexistent/alpha.toml")));
        assert!(matches!(result, Err(ModbusError::ConfigFileMissing(_))));
    }

    #[test]
    fn test_environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("alpha.toml", "baud_rate = 19200\nunit_id = 1")?;
            jail.set_env("ALPHA_BAUD_RATE", "115200");

            let config = LinkConfig::load(Some(Path::new("alpha.toml")))
                .map_err(|err| err.to_string())?;

            assert_eq!(config.baud_rate, 115200);
            assert_eq!(config.unit_id, 1);
            Ok(())
        });
    }

    #[test]
    fn test_handler_from_config() {
        let config = LinkConfig {
            unit_id: 0x01,
            serial_number_prefix: "AE".to_string(),
            ..LinkConfig::default()
        };

        let handler = RegisterHandler::from_config(ScriptedChannel::new(), &config).unwrap();

        assert_eq!(handler.transport().unit_id(), 0x01);
        assert_eq!(handler.serial_number_prefix(), "AE");
    }

    #[test]
    fn test_handler_from_config_rejects_zero_tries() {
        let config = LinkConfig {
            tries: 0,
            ..LinkConfig::default()
        };

        let result = RegisterHandler::from_config(ScriptedChannel::new(), &config);
        assert!(matches!(result, Err(ModbusError::InvalidTries(0))));
    }
}
