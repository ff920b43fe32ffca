// lib.rs

pub mod catalog;
pub mod channel;
pub mod config;
pub mod crc;
mod handler;
pub mod lookup;
mod request;
#[cfg(feature = "serial")]
mod serial;
mod status;
mod transport;
pub mod value;

use std::path::PathBuf;

pub use catalog::{DataType, Derivation, Format, RegisterDescriptor, Source};
pub use channel::{Channel, Direction, ScriptedChannel};
pub use config::LinkConfig;
pub use handler::{Reading, RegisterHandler};
pub use request::{Request, RequestError, WordWidth};
#[cfg(feature = "serial")]
pub use serial::SerialChannel;
pub use status::Status;
pub use transport::{Exchange, FrameTransport, FrameTransportBuilder, ALPHA_UNIT_ID};
pub use value::Value;

#[derive(Debug, thiserror::Error)]
pub enum ModbusError {
    #[error("Channel not set")]
    ChannelMissing,

    #[error("Invalid poll tries: {0}, expected at least 1")]
    InvalidTries(u32),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Channel I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serial")]
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("Config file not found: {}", .0.display())]
    ConfigFileMissing(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}
