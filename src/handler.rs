use tracing::{debug, info, warn};

use crate::catalog::{
    self, Derivation, Format, RegisterDescriptor, Source, BATTERY_POWER,
    GRID_ACTIVE_POWER_A, GRID_TOTAL_ACTIVE_POWER, GRID_VOLTAGE_A, GRID_VOLTAGE_MULTIPLIER,
    PV_METER_TOTAL_ACTIVE_POWER, PV_STRING_POWER, SERIAL_NUMBER,
};
use crate::channel::Channel;
use crate::config::LinkConfig;
use crate::lookup::{self, BitTable};
use crate::request::{Request, RequestError, WordWidth};
use crate::status::Status;
use crate::transport::{Exchange, FrameTransport};
use crate::value::{self, Value};
use crate::ModbusError;

/// Result of reading one logical register.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub id: u16,
    /// `None` only when the id is not in the catalog.
    pub descriptor: Option<&'static RegisterDescriptor>,
    pub status: Status,
    pub value: Option<Value>,
    pub formatted: Option<String>,
    /// Data bytes the value was decoded from. For derived registers these
    /// are the big-endian bytes of the computed value.
    pub payload: Vec<u8>,
}

impl Reading {
    fn failed(id: u16, descriptor: Option<&'static RegisterDescriptor>, status: Status) -> Self {
        Reading {
            id,
            descriptor,
            status,
            value: None,
            formatted: None,
            payload: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn name(&self) -> Option<&'static str> {
        self.descriptor.map(|descriptor| descriptor.name)
    }
}

/// Reads catalog registers by id and forwards raw reads and writes.
///
/// Holds no state between calls apart from the serial-number prefix that
/// picks the system fault table.
pub struct RegisterHandler<C> {
    transport: FrameTransport<C>,
    serial_number_prefix: String,
}

impl<C: Channel> RegisterHandler<C> {
    pub fn new(transport: FrameTransport<C>) -> Self {
        RegisterHandler {
            transport,
            serial_number_prefix: "AL".to_string(),
        }
    }

    pub fn from_config(channel: C, config: &LinkConfig) -> Result<Self, ModbusError> {
        let transport = FrameTransport::builder()
            .channel(channel)
            .config(config)
            .build()?;
        let mut handler = Self::new(transport);
        handler.set_serial_number_prefix(&config.serial_number_prefix);
        Ok(handler)
    }

    pub fn transport(&self) -> &FrameTransport<C> {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut FrameTransport<C> {
        &mut self.transport
    }

    pub fn into_transport(self) -> FrameTransport<C> {
        self.transport
    }

    pub fn serial_number_prefix(&self) -> &str {
        &self.serial_number_prefix
    }

    /// Keeps the first two characters of `prefix`.
    pub fn set_serial_number_prefix(&mut self, prefix: &str) {
        self.serial_number_prefix = prefix.chars().take(2).collect();
    }

    /// Reads the inverter serial number and adopts its first two characters
    /// as the prefix.
    pub fn detect_serial_number_prefix(&mut self) -> Status {
        let reading = self.read_handled(SERIAL_NUMBER);
        if let Some(Value::Text(serial)) = &reading.value {
            if serial.chars().count() >= 2 {
                self.set_serial_number_prefix(serial);
                info!("Serial number prefix is {}", self.serial_number_prefix);
            }
        }
        reading.status
    }

    pub fn set_baud_rate(&mut self, baud_rate: u32) -> Result<(), ModbusError> {
        Ok(self.transport.set_baud_rate(baud_rate)?)
    }

    fn system_fault_table(&self) -> Option<BitTable> {
        match self.serial_number_prefix.as_str() {
            "AL" => Some(lookup::SYSTEM_FAULT_AL),
            "AE" => Some(lookup::SYSTEM_FAULT_AE),
            _ => None,
        }
    }

    /// Reads logical register `id` and formats it for display.
    pub fn read_handled(&mut self, id: u16) -> Reading {
        let Some(descriptor) = catalog::lookup(id) else {
            debug!("Register {id:#06x} is not handled");
            return Reading::failed(id, None, Status::NotHandledRegister);
        };

        let decoded = match descriptor.source {
            Source::Register(address) => self.read_physical(descriptor, address),
            Source::Derived(derivation) => self.derive(derivation),
        };

        match decoded {
            Ok((value, payload)) => {
                let formatted = value::render(
                    &descriptor.format,
                    &value,
                    &payload,
                    self.system_fault_table(),
                );
                Reading {
                    id,
                    descriptor: Some(descriptor),
                    status: Status::ReadDataRegisterSuccess,
                    value: Some(value),
                    formatted: Some(formatted),
                    payload,
                }
            }
            Err(status) => {
                debug!("Reading {} failed: {status}", descriptor.name);
                Reading::failed(id, Some(descriptor), status)
            }
        }
    }

    /// Reads every catalog register in id order.
    pub fn read_all_handled(&mut self) -> Vec<Reading> {
        catalog::iter()
            .map(|descriptor| self.read_handled(descriptor.id))
            .collect()
    }

    pub fn read_raw(&mut self, address: u16, count: u16) -> Result<Exchange, RequestError> {
        let request = Request::read_holding(address, count)?;
        Ok(self.transport.execute(request))
    }

    pub fn write_raw_single(&mut self, address: u16, value: u16) -> Exchange {
        self.transport.execute(Request::write_single(address, value))
    }

    /// Writes `value` with a multi-register write. A single word carries the
    /// low 16 bits; two words carry the high word first.
    pub fn write_raw_data(
        &mut self,
        address: u16,
        value: u32,
        width: WordWidth,
    ) -> Result<Exchange, RequestError> {
        let request = Request::write_data(address, value, width)?;
        Ok(self.transport.execute(request))
    }

    fn read_physical(
        &mut self,
        descriptor: &RegisterDescriptor,
        address: u16,
    ) -> Result<(Value, Vec<u8>), Status> {
        let payload = self.read_words(address, descriptor.count)?;

        let value = match descriptor.format {
            Format::DateTime => {
                Value::Text(value::format_date_time(&payload).ok_or(Status::ResponseTooShort)?)
            }
            _ => Value::decode(descriptor.data_type, &payload).ok_or(Status::ResponseTooShort)?,
        };
        Ok((value, payload))
    }

    /// One read-holding exchange; anything but a complete read answer is
    /// returned as the failing status.
    fn read_words(&mut self, address: u16, count: u16) -> Result<Vec<u8>, Status> {
        let request = Request::read_holding(address, count).map_err(|err| {
            warn!("Cannot read {address:#06x}: {err}");
            Status::NotHandledRegister
        })?;

        let exchange = self.transport.execute(request);
        if exchange.status != Status::ReadDataRegisterSuccess {
            return Err(exchange.status);
        }
        if exchange.payload.len() < count as usize * 2 {
            return Err(Status::ResponseTooShort);
        }
        Ok(exchange.payload)
    }

    fn read_u16(&mut self, address: u16) -> Result<u16, Status> {
        let payload = self.read_words(address, 1)?;
        Ok(u16::from_be_bytes([payload[0], payload[1]]))
    }

    fn read_i16(&mut self, address: u16) -> Result<i16, Status> {
        Ok(self.read_u16(address)? as i16)
    }

    fn read_i32(&mut self, address: u16) -> Result<i32, Status> {
        let payload = self.read_words(address, 2)?;
        Ok(i32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]))
    }

    fn derive(&mut self, derivation: Derivation) -> Result<(Value, Vec<u8>), Status> {
        let value = match derivation {
            Derivation::TotalSolarPower => Value::I32(self.solar_power()?),
            Derivation::Load => Value::I32(self.load()?),
            Derivation::GridCurrentA => Value::I16(self.grid_current_a()?),
        };
        let payload = match value {
            Value::I32(v) => v.to_be_bytes().to_vec(),
            Value::I16(v) => v.to_be_bytes().to_vec(),
            _ => Vec::new(),
        };
        Ok((value, payload))
    }

    /// PV meter (AC coupled) plus the six strings (hybrid); whichever the
    /// installation lacks reads zero.
    fn solar_power(&mut self) -> Result<i32, Status> {
        let mut total = self.read_i32(PV_METER_TOTAL_ACTIVE_POWER)?;
        for address in PV_STRING_POWER {
            total = total.saturating_add(self.read_i32(address)?);
        }
        Ok(total)
    }

    /// Solar plus grid import and battery discharge. Exporting and charging
    /// are negative, so they reduce the load.
    fn load(&mut self) -> Result<i32, Status> {
        let solar = self.solar_power()?;
        let grid = self.read_i32(GRID_TOTAL_ACTIVE_POWER)?;
        let battery = self.read_i16(BATTERY_POWER)? as i32;
        Ok(solar.saturating_add(grid).saturating_add(battery))
    }

    /// I = P / V in whole volts, zero while the voltage reads zero.
    fn grid_current_a(&mut self) -> Result<i16, Status> {
        let power = self.read_i32(GRID_ACTIVE_POWER_A)?;
        let raw_voltage = self.read_u16(GRID_VOLTAGE_A)?;
        let voltage = (raw_voltage as f64 * GRID_VOLTAGE_MULTIPLIER) as i32;
        if voltage == 0 {
            return Ok(0);
        }
        Ok((power / voltage) as i16)
    }
}

