use std::io;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::channel::{Channel, Direction};
use crate::config::LinkConfig;
use crate::crc;
use crate::request::{
    Request, READ_HOLDING_REGISTERS, WRITE_MULTIPLE_REGISTERS, WRITE_SINGLE_REGISTER,
};
use crate::status::Status;
use crate::ModbusError;

pub const ALPHA_UNIT_ID: u8 = 0x55;
pub const DEFAULT_TRIES: u32 = 8;
pub const DEFAULT_POLL_DELAY: Duration = Duration::from_millis(50);

/// Unit id, function code, one error byte and the CRC.
pub const MIN_RESPONSE_LEN: usize = 5;
/// Echo of address plus value/count, and the CRC.
pub const WRITE_ACK_LEN: usize = 8;

/// Everything one request/response exchange produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exchange {
    pub status: Status,
    /// Function code echoed by the controller, once one arrived.
    pub function_code: Option<u8>,
    /// Data bytes with unit id, function code, byte count and CRC stripped.
    /// For a slave error this is the one- or two-byte error code.
    pub payload: Vec<u8>,
    /// Every byte accepted into the response, CRC included.
    pub frame: Vec<u8>,
}

impl Exchange {
    fn failed(status: Status, function_code: Option<u8>, frame: Vec<u8>) -> Self {
        Exchange {
            status,
            function_code,
            payload: Vec::new(),
            frame,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Error code of a slave error response, in either of its two widths.
    pub fn error_code(&self) -> Option<u16> {
        if self.status != Status::SlaveError {
            return None;
        }
        match self.payload.as_slice() {
            [code] => Some(*code as u16),
            [hi, lo] => Some(u16::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }
}

pub struct FrameTransportBuilder<C> {
    channel: Option<C>,
    unit_id: u8,
    tries: u32,
    poll_delay: Duration,
    inter_request_delay: Duration,
}

impl<C: Channel> FrameTransportBuilder<C> {
    pub fn channel(mut self, channel: C) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn unit_id(mut self, unit_id: u8) -> Self {
        self.unit_id = unit_id;
        self
    }

    pub fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    pub fn poll_delay(mut self, poll_delay: Duration) -> Self {
        self.poll_delay = poll_delay;
        self
    }

    pub fn inter_request_delay(mut self, delay: Duration) -> Self {
        self.inter_request_delay = delay;
        self
    }

    /// Takes the unit id and timing settings from `config`.
    pub fn config(self, config: &LinkConfig) -> Self {
        self.unit_id(config.unit_id)
            .tries(config.tries)
            .poll_delay(config.poll_delay())
            .inter_request_delay(config.inter_request_delay())
    }

    pub fn build(self) -> Result<FrameTransport<C>, ModbusError> {
        let channel = self.channel.ok_or(ModbusError::ChannelMissing)?;
        if self.tries == 0 {
            return Err(ModbusError::InvalidTries(self.tries));
        }

        Ok(FrameTransport {
            channel,
            unit_id: self.unit_id,
            tries: self.tries,
            poll_delay: self.poll_delay,
            inter_request_delay: self.inter_request_delay,
        })
    }
}

/// Owns the serial channel and runs one blocking exchange per call.
pub struct FrameTransport<C> {
    channel: C,
    unit_id: u8,
    tries: u32,
    poll_delay: Duration,
    inter_request_delay: Duration,
}

impl<C: Channel> FrameTransport<C> {
    pub fn builder() -> FrameTransportBuilder<C> {
        FrameTransportBuilder {
            channel: None,
            unit_id: ALPHA_UNIT_ID,
            tries: DEFAULT_TRIES,
            poll_delay: DEFAULT_POLL_DELAY,
            inter_request_delay: Duration::ZERO,
        }
    }

    pub fn unit_id(&self) -> u8 {
        self.unit_id
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    pub fn set_baud_rate(&mut self, baud_rate: u32) -> io::Result<()> {
        debug!("Switching channel to {baud_rate} baud");
        self.channel.set_baud_rate(baud_rate)
    }

    /// Frames `request` for the configured unit and runs the exchange.
    pub fn execute(&mut self, request: Request) -> Exchange {
        let mut frame = request.into_frame(self.unit_id);
        self.send_and_receive(&mut frame)
    }

    /// Stamps the CRC into the last two bytes of `frame`, transmits it and
    /// reassembles the reply.
    pub fn send_and_receive(&mut self, frame: &mut [u8]) -> Exchange {
        crc::stamp(frame);

        if !self.inter_request_delay.is_zero() {
            self.channel.pause(self.inter_request_delay);
        }

        trace!("Tx: {:02X?}", frame);
        if let Err(err) = self.transmit(frame) {
            warn!("Transmit failed: {err}");
            return Exchange::failed(Status::NoResponse, None, Vec::new());
        }

        let exchange = self.receive();
        trace!("Rx: {:02X?}", exchange.frame);
        debug!(
            status = exchange.status.as_str(),
            function_code = ?exchange.function_code,
            "Exchange finished with {} payload bytes",
            exchange.payload.len()
        );
        exchange
    }

    fn transmit(&mut self, frame: &[u8]) -> io::Result<()> {
        self.channel.discard_input()?;
        self.channel.set_direction(Direction::Transmit)?;
        let written = self
            .channel
            .write_all(frame)
            .and_then(|_| self.channel.flush());
        // Back to receive even on failure, or the line stays driven.
        self.channel.set_direction(Direction::Receive)?;
        written
    }

    fn receive(&mut self) -> Exchange {
        let mut frame: Vec<u8> = Vec::with_capacity(WRITE_ACK_LEN);
        let mut expected = MIN_RESPONSE_LEN;
        let mut function_code = None;
        let mut optional_error_byte = false;
        let mut timed_out = false;

        while frame.len() < expected {
            let Some(byte) = self.next_byte() else {
                timed_out = true;
                break;
            };

            match frame.len() {
                0 if byte != self.unit_id => {
                    trace!("Skipping {byte:#04x} while looking for unit id");
                    continue;
                }
                1 => {
                    function_code = Some(byte);
                    match byte {
                        READ_HOLDING_REGISTERS => {}
                        WRITE_SINGLE_REGISTER | WRITE_MULTIPLE_REGISTERS => {
                            expected = WRITE_ACK_LEN
                        }
                        _ => {
                            // Error code may be one or two bytes wide.
                            expected += 1;
                            optional_error_byte = true;
                        }
                    }
                }
                2 if function_code == Some(READ_HOLDING_REGISTERS) => {
                    expected = 3 + byte as usize + 2;
                }
                _ => {}
            }
            frame.push(byte);
        }

        if frame.is_empty() {
            return Exchange::failed(Status::NoResponse, None, frame);
        }

        if timed_out {
            let short_error_form = optional_error_byte && frame.len() == expected - 1;
            if !short_error_form {
                debug!("Response stopped after {} of {expected} bytes", frame.len());
                return Exchange::failed(Status::ResponseTooShort, function_code, frame);
            }
        }

        if frame.len() < MIN_RESPONSE_LEN {
            return Exchange::failed(Status::ResponseTooShort, function_code, frame);
        }

        if !crc::validate(&frame) {
            return Exchange::failed(Status::InvalidFrame, function_code, frame);
        }

        let (status, header) = match function_code {
            Some(READ_HOLDING_REGISTERS) => (Status::ReadDataRegisterSuccess, 3),
            Some(WRITE_SINGLE_REGISTER) => (Status::WriteSingleRegisterSuccess, 2),
            Some(WRITE_MULTIPLE_REGISTERS) => (Status::WriteDataRegisterSuccess, 2),
            _ => (Status::SlaveError, 2),
        };
        let payload = frame[header..frame.len() - 2].to_vec();

        Exchange {
            status,
            function_code,
            payload,
            frame,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        if !self.wait_for_data() {
            return None;
        }
        match self.channel.read_byte() {
            Ok(byte) => Some(byte),
            Err(err) => {
                warn!("Read failed: {err}");
                None
            }
        }
    }

    /// Polls `tries` times, pausing `poll_delay` after each miss.
    fn wait_for_data(&mut self) -> bool {
        for _ in 0..self.tries {
            if self.data_ready() {
                return true;
            }
            self.channel.pause(self.poll_delay);
        }
        if self.data_ready() {
            return true;
        }
        trace!("Timed out waiting for response byte");
        false
    }

    fn data_ready(&mut self) -> bool {
        match self.channel.bytes_available() {
            Ok(count) => count > 0,
            Err(err) => {
                warn!("Polling channel failed: {err}");
                false
            }
        }
    }
}
