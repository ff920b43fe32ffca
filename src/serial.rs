use std::fmt;
use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, DataBits, Parity, SerialPort, StopBits};
use tracing::debug;

use crate::channel::{Channel, Direction};

/// How long a single byte read may block once `bytes_available` said yes.
const READ_TIMEOUT: Duration = Duration::from_millis(100);

/// RS485 channel over a local serial device, 8N1.
///
/// Adapters with automatic direction control need nothing else. Boards that
/// wire the driver-enable pin to RTS get it toggled around each transmission
/// when `rts_direction` is set.
pub struct SerialChannel {
    port: Box<dyn SerialPort>,
    rts_direction: bool,
}

impl SerialChannel {
    pub fn open(
        path: &str,
        baud_rate: u32,
        rts_direction: bool,
    ) -> Result<Self, serialport::Error> {
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(READ_TIMEOUT)
            .open()?;
        debug!("Opened {path} at {baud_rate} baud");

        Ok(SerialChannel { port, rts_direction })
    }
}

impl fmt::Debug for SerialChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialChannel")
            .field("port", &self.port.name())
            .field("baud_rate", &self.port.baud_rate().ok())
            .field("rts_direction", &self.rts_direction)
            .finish()
    }
}

impl Channel for SerialChannel {
    fn set_direction(&mut self, direction: Direction) -> io::Result<()> {
        if self.rts_direction {
            self.port
                .write_request_to_send(direction == Direction::Transmit)?;
        }
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.port.write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.port.flush()
    }

    fn bytes_available(&mut self) -> io::Result<usize> {
        Ok(self.port.bytes_to_read()? as usize)
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.port.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn discard_input(&mut self) -> io::Result<()> {
        Ok(self.port.clear(ClearBuffer::Input)?)
    }

    fn set_baud_rate(&mut self, baud_rate: u32) -> io::Result<()> {
        self.port.flush()?;
        Ok(self.port.set_baud_rate(baud_rate)?)
    }
}
