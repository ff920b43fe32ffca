//! Register catalog of the AlphaESS controller.
//!
//! Every logical register the handler understands has exactly one entry in
//! [`CATALOG`], sorted by id. Physical registers use their wire address as
//! their id. Derived readings sit at the top of the id space, where the
//! controller has no registers.

use crate::lookup::{self, BitTable, CodeTable};

// Documented as 1 V/bit, reads 2421 for 242.1 V.
pub const GRID_VOLTAGE_MULTIPLIER: f64 = 0.1;
// Documented as 0.001 V/bit, reads 334 for 3.34 V.
pub const CELL_VOLTAGE_MULTIPLIER: f64 = 0.01;
// Documented as 0.1 degree/bit, reads 2720 for 27.2 degrees.
pub const INVERTER_TEMP_MULTIPLIER: f64 = 0.01;
// Documented as 0.1 kWh/bit, reads 308695 for 3086 kWh.
pub const TOTAL_ENERGY_MULTIPLIER: f64 = 0.01;
// Measured closer to 0.396.
pub const DISPATCH_SOC_MULTIPLIER: f64 = 0.4;

pub const GRID_VOLTAGE_A: u16 = 0x0014;
pub const GRID_ACTIVE_POWER_A: u16 = 0x001B;
pub const GRID_TOTAL_ACTIVE_POWER: u16 = 0x0021;
pub const PV_METER_TOTAL_ACTIVE_POWER: u16 = 0x00A1;
pub const BATTERY_POWER: u16 = 0x0126;
pub const PV_STRING_POWER: [u16; 6] = [0x041F, 0x0423, 0x0427, 0x042B, 0x042F, 0x0433];
pub const SERIAL_NUMBER: u16 = 0x064A;
pub const SYSTEM_TIME: u16 = 0x0740;
pub const SYSTEM_FAULT: u16 = 0x08D4;

pub const DERIVED_TOTAL_SOLAR_POWER: u16 = 0xFFFC;
pub const DERIVED_GRID_CURRENT_A: u16 = 0xFFFD;
pub const DERIVED_LOAD: u16 = 0xFFFE;
pub const SYSTEM_DATE_TIME: u16 = 0xFFFF;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DataType {
    U16,
    I16,
    U32,
    I32,
    Text,
}

/// How a decoded value becomes display text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Format {
    Plain,
    /// Multiply by the factor, keep as many decimals as the factor has.
    Scaled(f64),
    Lookup(CodeTable),
    /// Describe the lowest set bit only.
    LowestBit(BitTable),
    /// Lowest set bit, from the table matching the serial-number prefix.
    SystemFault,
    Ipv4,
    Text,
    /// Six bytes `YY MM DD HH mm ss`.
    DateTime,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Derivation {
    /// House load from PV, grid and battery power.
    Load,
    /// Phase A grid current from phase A power and voltage.
    GridCurrentA,
    /// PV meter plus all six inverter strings.
    TotalSolarPower,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Register(u16),
    Derived(Derivation),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegisterDescriptor {
    pub id: u16,
    pub name: &'static str,
    pub source: Source,
    /// Width in 16-bit words.
    pub count: u16,
    pub data_type: DataType,
    pub format: Format,
}

impl RegisterDescriptor {
    /// Whether display text comes from a table rather than the number itself.
    pub fn has_lookup(&self) -> bool {
        matches!(
            self.format,
            Format::Lookup(_) | Format::LowestBit(_) | Format::SystemFault | Format::Ipv4
        )
    }

    /// True when the id is not simply the wire address.
    pub fn is_virtual(&self) -> bool {
        !matches!(self.source, Source::Register(address) if address == self.id)
    }

    pub fn address(&self) -> Option<u16> {
        match self.source {
            Source::Register(address) => Some(address),
            Source::Derived(_) => None,
        }
    }
}

pub fn lookup(id: u16) -> Option<&'static RegisterDescriptor> {
    CATALOG
        .binary_search_by_key(&id, |descriptor| descriptor.id)
        .ok()
        .map(|index| &CATALOG[index])
}

/// Case-insensitive lookup by register name.
pub fn by_name(name: &str) -> Option<&'static RegisterDescriptor> {
    CATALOG
        .iter()
        .find(|descriptor| descriptor.name.eq_ignore_ascii_case(name))
}

pub fn iter() -> impl Iterator<Item = &'static RegisterDescriptor> {
    CATALOG.iter()
}

const fn physical(
    address: u16,
    name: &'static str,
    count: u16,
    data_type: DataType,
    format: Format,
) -> RegisterDescriptor {
    RegisterDescriptor {
        id: address,
        name,
        source: Source::Register(address),
        count,
        data_type,
        format,
    }
}

const fn word(address: u16, name: &'static str, format: Format) -> RegisterDescriptor {
    physical(address, name, 1, DataType::U16, format)
}

const fn signed_word(address: u16, name: &'static str, format: Format) -> RegisterDescriptor {
    physical(address, name, 1, DataType::I16, format)
}

const fn long(address: u16, name: &'static str, format: Format) -> RegisterDescriptor {
    physical(address, name, 2, DataType::U32, format)
}

const fn signed_long(address: u16, name: &'static str, format: Format) -> RegisterDescriptor {
    physical(address, name, 2, DataType::I32, format)
}

const fn text(address: u16, name: &'static str, count: u16) -> RegisterDescriptor {
    physical(address, name, count, DataType::Text, Format::Text)
}

const fn derived(
    id: u16,
    name: &'static str,
    derivation: Derivation,
    count: u16,
    data_type: DataType,
) -> RegisterDescriptor {
    RegisterDescriptor {
        id,
        name,
        source: Source::Derived(derivation),
        count,
        data_type,
        format: Format::Plain,
    }
}

#[rustfmt::skip]
pub static CATALOG: &[RegisterDescriptor] = &[
    // Grid meter
    word(0x0000, "REG_GRID_METER_RW_GRID_METER_CT_ENABLE", Format::Plain),
    word(0x0001, "REG_GRID_METER_RW_GRID_METER_CT_RATE", Format::Plain),
    long(0x0010, "REG_GRID_METER_R_TOTAL_ENERGY_FEED_TO_GRID_1", Format::Scaled(0.01)),
    long(0x0012, "REG_GRID_METER_R_TOTAL_ENERGY_CONSUMED_FROM_GRID_1", Format::Scaled(0.01)),
    word(GRID_VOLTAGE_A, "REG_GRID_METER_R_VOLTAGE_OF_A_PHASE", Format::Scaled(GRID_VOLTAGE_MULTIPLIER)),
    word(0x0015, "REG_GRID_METER_R_VOLTAGE_OF_B_PHASE", Format::Scaled(GRID_VOLTAGE_MULTIPLIER)),
    word(0x0016, "REG_GRID_METER_R_VOLTAGE_OF_C_PHASE", Format::Scaled(GRID_VOLTAGE_MULTIPLIER)),
    signed_word(0x0017, "REG_GRID_METER_R_CURRENT_OF_A_PHASE", Format::Scaled(0.1)),
    signed_word(0x0018, "REG_GRID_METER_R_CURRENT_OF_B_PHASE", Format::Scaled(0.1)),
    signed_word(0x0019, "REG_GRID_METER_R_CURRENT_OF_C_PHASE", Format::Scaled(0.1)),
    word(0x001A, "REG_GRID_METER_R_FREQUENCY", Format::Scaled(0.01)),
    signed_long(GRID_ACTIVE_POWER_A, "REG_GRID_METER_R_ACTIVE_POWER_OF_A_PHASE_1", Format::Plain),
    signed_long(0x001D, "REG_GRID_METER_R_ACTIVE_POWER_OF_B_PHASE_1", Format::Plain),
    signed_long(0x001F, "REG_GRID_METER_R_ACTIVE_POWER_OF_C_PHASE_1", Format::Plain),
    signed_long(GRID_TOTAL_ACTIVE_POWER, "REG_GRID_METER_R_TOTAL_ACTIVE_POWER_1", Format::Plain),
    signed_long(0x0023, "REG_GRID_METER_R_REACTIVE_POWER_OF_A_PHASE_1", Format::Plain),
    signed_long(0x0025, "REG_GRID_METER_R_REACTIVE_POWER_OF_B_PHASE_1", Format::Plain),
    signed_long(0x0027, "REG_GRID_METER_R_REACTIVE_POWER_OF_C_PHASE_1", Format::Plain),
    signed_long(0x0029, "REG_GRID_METER_R_TOTAL_REACTIVE_POWER_1", Format::Plain),
    signed_long(0x002B, "REG_GRID_METER_R_APPARENT_POWER_OF_A_PHASE_1", Format::Plain),
    signed_long(0x002D, "REG_GRID_METER_R_APPARENT_POWER_OF_B_PHASE_1", Format::Plain),
    signed_long(0x002F, "REG_GRID_METER_R_APPARENT_POWER_OF_C_PHASE_1", Format::Plain),
    signed_long(0x0031, "REG_GRID_METER_R_TOTAL_APPARENT_POWER_1", Format::Plain),
    signed_word(0x0033, "REG_GRID_METER_R_POWER_FACTOR_OF_A_PHASE", Format::Scaled(0.01)),
    signed_word(0x0034, "REG_GRID_METER_R_POWER_FACTOR_OF_B_PHASE", Format::Scaled(0.01)),
    signed_word(0x0035, "REG_GRID_METER_R_POWER_FACTOR_OF_C_PHASE", Format::Scaled(0.01)),
    signed_word(0x0036, "REG_GRID_METER_R_TOTAL_POWER_FACTOR", Format::Scaled(0.01)),

    // PV meter
    word(0x0080, "REG_PV_METER_RW_PV_METER_CT_ENABLE", Format::Plain),
    word(0x0081, "REG_PV_METER_RW_PV_METER_CT_RATE", Format::Plain),
    long(0x0090, "REG_PV_METER_R_TOTAL_ENERGY_FEED_TO_GRID_1", Format::Scaled(0.01)),
    long(0x0092, "REG_PV_METER_R_TOTAL_ENERGY_CONSUMED_FROM_GRID_1", Format::Scaled(0.01)),
    word(0x0094, "REG_PV_METER_R_VOLTAGE_OF_A_PHASE", Format::Scaled(GRID_VOLTAGE_MULTIPLIER)),
    word(0x0095, "REG_PV_METER_R_VOLTAGE_OF_B_PHASE", Format::Scaled(GRID_VOLTAGE_MULTIPLIER)),
    word(0x0096, "REG_PV_METER_R_VOLTAGE_OF_C_PHASE", Format::Scaled(GRID_VOLTAGE_MULTIPLIER)),
    signed_word(0x0097, "REG_PV_METER_R_CURRENT_OF_A_PHASE", Format::Scaled(0.1)),
    signed_word(0x0098, "REG_PV_METER_R_CURRENT_OF_B_PHASE", Format::Scaled(0.1)),
    signed_word(0x0099, "REG_PV_METER_R_CURRENT_OF_C_PHASE", Format::Scaled(0.1)),
    word(0x009A, "REG_PV_METER_R_FREQUENCY", Format::Scaled(0.01)),
    signed_long(0x009B, "REG_PV_METER_R_ACTIVE_POWER_OF_A_PHASE_1", Format::Plain),
    signed_long(0x009D, "REG_PV_METER_R_ACTIVE_POWER_OF_B_PHASE_1", Format::Plain),
    signed_long(0x009F, "REG_PV_METER_R_ACTIVE_POWER_OF_C_PHASE_1", Format::Plain),
    signed_long(PV_METER_TOTAL_ACTIVE_POWER, "REG_PV_METER_R_TOTAL_ACTIVE_POWER_1", Format::Plain),
    signed_long(0x00A3, "REG_PV_METER_R_REACTIVE_POWER_OF_A_PHASE_1", Format::Plain),
    signed_long(0x00A5, "REG_PV_METER_R_REACTIVE_POWER_OF_B_PHASE_1", Format::Plain),
    signed_long(0x00A7, "REG_PV_METER_R_REACTIVE_POWER_OF_C_PHASE_1", Format::Plain),
    signed_long(0x00A9, "REG_PV_METER_R_TOTAL_REACTIVE_POWER_1", Format::Plain),
    signed_long(0x00AB, "REG_PV_METER_R_APPARENT_POWER_OF_A_PHASE_1", Format::Plain),
    signed_long(0x00AD, "REG_PV_METER_R_APPARENT_POWER_OF_B_PHASE_1", Format::Plain),
    signed_long(0x00AF, "REG_PV_METER_R_APPARENT_POWER_OF_C_PHASE_1", Format::Plain),
    signed_long(0x00B1, "REG_PV_METER_R_TOTAL_APPARENT_POWER_1", Format::Plain),
    signed_word(0x00B3, "REG_PV_METER_R_POWER_FACTOR_OF_A_PHASE", Format::Scaled(0.01)),
    signed_word(0x00B4, "REG_PV_METER_R_POWER_FACTOR_OF_B_PHASE", Format::Scaled(0.01)),
    signed_word(0x00B5, "REG_PV_METER_R_POWER_FACTOR_OF_C_PHASE", Format::Scaled(0.01)),
    signed_word(0x00B6, "REG_PV_METER_R_TOTAL_POWER_FACTOR", Format::Scaled(0.01)),

    // Battery
    word(0x0100, "REG_BATTERY_HOME_R_VOLTAGE", Format::Scaled(0.1)),
    signed_word(0x0101, "REG_BATTERY_HOME_R_CURRENT", Format::Scaled(0.1)),
    word(0x0102, "REG_BATTERY_HOME_R_SOC", Format::Scaled(0.1)),
    word(0x0103, "REG_BATTERY_HOME_R_STATUS", Format::Lookup(lookup::BATTERY_STATUS)),
    word(0x0104, "REG_BATTERY_HOME_R_RELAY_STATUS", Format::Lookup(lookup::BATTERY_RELAY_STATUS)),
    word(0x0105, "REG_BATTERY_HOME_R_PACK_ID_OF_MIN_CELL_VOLTAGE", Format::Plain),
    word(0x0106, "REG_BATTERY_HOME_R_CELL_ID_OF_MIN_CELL_VOLTAGE", Format::Plain),
    word(0x0107, "REG_BATTERY_HOME_R_MIN_CELL_VOLTAGE", Format::Scaled(CELL_VOLTAGE_MULTIPLIER)),
    word(0x0108, "REG_BATTERY_HOME_R_PACK_ID_OF_MAX_CELL_VOLTAGE", Format::Plain),
    word(0x0109, "REG_BATTERY_HOME_R_CELL_ID_OF_MAX_CELL_VOLTAGE", Format::Plain),
    word(0x010A, "REG_BATTERY_HOME_R_MAX_CELL_VOLTAGE", Format::Scaled(CELL_VOLTAGE_MULTIPLIER)),
    word(0x010B, "REG_BATTERY_HOME_R_PACK_ID_OF_MIN_CELL_TEMPERATURE", Format::Plain),
    word(0x010C, "REG_BATTERY_HOME_R_CELL_ID_OF_MIN_CELL_TEMPERATURE", Format::Plain),
    signed_word(0x010D, "REG_BATTERY_HOME_R_MIN_CELL_TEMPERATURE", Format::Scaled(0.1)),
    word(0x010E, "REG_BATTERY_HOME_R_PACK_ID_OF_MAX_CELL_TEMPERATURE", Format::Plain),
    word(0x010F, "REG_BATTERY_HOME_R_CELL_ID_OF_MAX_CELL_TEMPERATURE", Format::Plain),
    signed_word(0x0110, "REG_BATTERY_HOME_R_MAX_CELL_TEMPERATURE", Format::Scaled(0.1)),
    word(0x0111, "REG_BATTERY_HOME_R_MAX_CHARGE_CURRENT", Format::Scaled(0.1)),
    word(0x0112, "REG_BATTERY_HOME_R_MAX_DISCHARGE_CURRENT", Format::Scaled(0.1)),
    word(0x0113, "REG_BATTERY_HOME_R_CHARGE_CUT_OFF_VOLTAGE", Format::Scaled(0.1)),
    word(0x0114, "REG_BATTERY_HOME_R_DISCHARGE_CUT_OFF_VOLTAGE", Format::Scaled(0.1)),
    word(0x0115, "REG_BATTERY_HOME_R_BMU_SOFTWARE_VERSION", Format::Plain),
    word(0x0116, "REG_BATTERY_HOME_R_LMU_SOFTWARE_VERSION", Format::Plain),
    word(0x0117, "REG_BATTERY_HOME_R_ISO_SOFTWARE_VERSION", Format::Plain),
    word(0x0118, "REG_BATTERY_HOME_R_BATTERY_NUMBER", Format::Plain),
    word(0x0119, "REG_BATTERY_HOME_R_BATTERY_CAPACITY", Format::Scaled(0.1)),
    word(0x011A, "REG_BATTERY_HOME_R_BATTERY_TYPE", Format::Lookup(lookup::BATTERY_TYPE)),
    word(0x011B, "REG_BATTERY_HOME_R_BATTERY_SOH", Format::Scaled(0.1)),
    long(0x011C, "REG_BATTERY_HOME_R_BATTERY_WARNING_1", Format::Plain),
    long(0x011E, "REG_BATTERY_HOME_R_BATTERY_FAULT_1", Format::LowestBit(lookup::BATTERY_FAULT)),
    long(0x0120, "REG_BATTERY_HOME_R_BATTERY_CHARGE_ENERGY_1", Format::Scaled(0.1)),
    long(0x0122, "REG_BATTERY_HOME_R_BATTERY_DISCHARGE_ENERGY_1", Format::Scaled(0.1)),
    long(0x0124, "REG_BATTERY_HOME_R_BATTERY_ENERGY_CHARGE_FROM_GRID_1", Format::Scaled(0.1)),
    signed_word(BATTERY_POWER, "REG_BATTERY_HOME_R_BATTERY_POWER", Format::Plain),
    word(0x0127, "REG_BATTERY_HOME_R_BATTERY_REMAINING_TIME", Format::Plain),
    word(0x0128, "REG_BATTERY_HOME_R_BATTERY_IMPLEMENTATION_CHARGE_SOC", Format::Scaled(0.1)),
    word(0x0129, "REG_BATTERY_HOME_R_BATTERY_IMPLEMENTATION_DISCHARGE_SOC", Format::Scaled(0.1)),
    word(0x012A, "REG_BATTERY_HOME_R_BATTERY_REMAINING_CHARGE_SOC", Format::Scaled(0.1)),
    word(0x012B, "REG_BATTERY_HOME_R_BATTERY_REMAINING_DISCHARGE_SOC", Format::Scaled(0.1)),
    word(0x012C, "REG_BATTERY_HOME_R_BATTERY_MAX_CHARGE_POWER", Format::Plain),
    word(0x012D, "REG_BATTERY_HOME_R_BATTERY_MAX_DISCHARGE_POWER", Format::Plain),
    word(0x012E, "REG_BATTERY_HOME_RW_BATTERY_MOS_CONTROL", Format::Lookup(lookup::MOS_CONTROL)),
    word(0x012F, "REG_BATTERY_HOME_R_BATTERY_SOC_CALIBRATION", Format::Lookup(lookup::SOC_CALIBRATION)),
    word(0x0130, "REG_BATTERY_HOME_R_BATTERY_SINGLE_CUT_ERROR_CODE", Format::Plain),
    long(0x0131, "REG_BATTERY_HOME_R_BATTERY_FAULT_1_1", Format::Plain),
    long(0x0133, "REG_BATTERY_HOME_R_BATTERY_FAULT_2_1", Format::Plain),
    long(0x0135, "REG_BATTERY_HOME_R_BATTERY_FAULT_3_1", Format::Plain),
    long(0x0137, "REG_BATTERY_HOME_R_BATTERY_FAULT_4_1", Format::Plain),
    long(0x0139, "REG_BATTERY_HOME_R_BATTERY_FAULT_5_1", Format::Plain),
    long(0x013B, "REG_BATTERY_HOME_R_BATTERY_FAULT_6_1", Format::Plain),
    long(0x013D, "REG_BATTERY_HOME_R_BATTERY_WARNING_1_1", Format::Plain),
    long(0x013F, "REG_BATTERY_HOME_R_BATTERY_WARNING_2_1", Format::Plain),
    long(0x0141, "REG_BATTERY_HOME_R_BATTERY_WARNING_3_1", Format::Plain),
    long(0x0143, "REG_BATTERY_HOME_R_BATTERY_WARNING_4_1", Format::Plain),
    long(0x0145, "REG_BATTERY_HOME_R_BATTERY_WARNING_5_1", Format::Plain),
    long(0x0147, "REG_BATTERY_HOME_R_BATTERY_WARNING_6_1", Format::Plain),

    // Inverter
    word(0x0400, "REG_INVERTER_HOME_R_VOLTAGE_L1", Format::Scaled(0.1)),
    word(0x0401, "REG_INVERTER_HOME_R_VOLTAGE_L2", Format::Scaled(0.1)),
    word(0x0402, "REG_INVERTER_HOME_R_VOLTAGE_L3", Format::Scaled(0.1)),
    signed_word(0x0403, "REG_INVERTER_HOME_R_CURRENT_L1", Format::Scaled(0.1)),
    signed_word(0x0404, "REG_INVERTER_HOME_R_CURRENT_L2", Format::Scaled(0.1)),
    signed_word(0x0405, "REG_INVERTER_HOME_R_CURRENT_L3", Format::Scaled(0.1)),
    signed_long(0x0406, "REG_INVERTER_HOME_R_POWER_L1_1", Format::Plain),
    signed_long(0x0408, "REG_INVERTER_HOME_R_POWER_L2_1", Format::Plain),
    signed_long(0x040A, "REG_INVERTER_HOME_R_POWER_L3_1", Format::Plain),
    signed_long(0x040C, "REG_INVERTER_HOME_R_POWER_TOTAL_1", Format::Plain),
    word(0x040E, "REG_INVERTER_HOME_R_BACKUP_VOLTAGE_L1", Format::Scaled(0.1)),
    word(0x040F, "REG_INVERTER_HOME_R_BACKUP_VOLTAGE_L2", Format::Scaled(0.1)),
    word(0x0410, "REG_INVERTER_HOME_R_BACKUP_VOLTAGE_L3", Format::Scaled(0.1)),
    word(0x0411, "REG_INVERTER_HOME_R_BACKUP_CURRENT_L1", Format::Scaled(0.1)),
    word(0x0412, "REG_INVERTER_HOME_R_BACKUP_CURRENT_L2", Format::Scaled(0.1)),
    word(0x0413, "REG_INVERTER_HOME_R_BACKUP_CURRENT_L3", Format::Scaled(0.1)),
    long(0x0414, "REG_INVERTER_HOME_R_BACKUP_POWER_L1_1", Format::Plain),
    long(0x0416, "REG_INVERTER_HOME_R_BACKUP_POWER_L2_1", Format::Plain),
    long(0x0418, "REG_INVERTER_HOME_R_BACKUP_POWER_L3_1", Format::Plain),
    long(0x041A, "REG_INVERTER_HOME_R_BACKUP_POWER_TOTAL_1", Format::Plain),
    word(0x041C, "REG_INVERTER_HOME_R_FREQUENCY", Format::Scaled(0.01)),
    word(0x041D, "REG_INVERTER_HOME_R_PV1_VOLTAGE", Format::Scaled(0.1)),
    word(0x041E, "REG_INVERTER_HOME_R_PV1_CURRENT", Format::Scaled(0.1)),
    long(PV_STRING_POWER[0], "REG_INVERTER_HOME_R_PV1_POWER_1", Format::Plain),
    word(0x0421, "REG_INVERTER_HOME_R_PV2_VOLTAGE", Format::Scaled(0.1)),
    word(0x0422, "REG_INVERTER_HOME_R_PV2_CURRENT", Format::Scaled(0.1)),
    long(PV_STRING_POWER[1], "REG_INVERTER_HOME_R_PV2_POWER_1", Format::Plain),
    word(0x0425, "REG_INVERTER_HOME_R_PV3_VOLTAGE", Format::Scaled(0.1)),
    word(0x0426, "REG_INVERTER_HOME_R_PV3_CURRENT", Format::Scaled(0.1)),
    long(PV_STRING_POWER[2], "REG_INVERTER_HOME_R_PV3_POWER_1", Format::Plain),
    word(0x0429, "REG_INVERTER_HOME_R_PV4_VOLTAGE", Format::Scaled(0.1)),
    word(0x042A, "REG_INVERTER_HOME_R_PV4_CURRENT", Format::Scaled(0.1)),
    long(PV_STRING_POWER[3], "REG_INVERTER_HOME_R_PV4_POWER_1", Format::Plain),
    word(0x042D, "REG_INVERTER_HOME_R_PV5_VOLTAGE", Format::Scaled(0.1)),
    word(0x042E, "REG_INVERTER_HOME_R_PV5_CURRENT", Format::Scaled(0.1)),
    long(PV_STRING_POWER[4], "REG_INVERTER_HOME_R_PV5_POWER_1", Format::Plain),
    word(0x0431, "REG_INVERTER_HOME_R_PV6_VOLTAGE", Format::Scaled(0.1)),
    word(0x0432, "REG_INVERTER_HOME_R_PV6_CURRENT", Format::Scaled(0.1)),
    long(PV_STRING_POWER[5], "REG_INVERTER_HOME_R_PV6_POWER_1", Format::Plain),
    word(0x0435, "REG_INVERTER_HOME_R_INVERTER_TEMP", Format::Scaled(INVERTER_TEMP_MULTIPLIER)),
    long(0x0436, "REG_INVERTER_HOME_R_INVERTER_WARNING_1_1", Format::Plain),
    long(0x0438, "REG_INVERTER_HOME_R_INVERTER_WARNING_2_1", Format::Plain),
    long(0x043A, "REG_INVERTER_HOME_R_INVERTER_FAULT_1_1", Format::Plain),
    long(0x043C, "REG_INVERTER_HOME_R_INVERTER_FAULT_2_1", Format::Plain),
    long(0x043E, "REG_INVERTER_HOME_R_INVERTER_TOTAL_PV_ENERGY_1", Format::Scaled(0.1)),
    word(0x0440, "REG_INVERTER_HOME_R_WORKING_MODE", Format::Lookup(lookup::INVERTER_WORKING_MODE)),

    // Inverter information
    text(0x0640, "REG_INVERTER_INFO_R_MASTER_SOFTWARE_VERSION_1", 5),
    text(0x0645, "REG_INVERTER_INFO_R_SLAVE_SOFTWARE_VERSION_1", 5),
    text(0x064A, "REG_INVERTER_INFO_R_SERIAL_NUMBER_1", 10),

    // System information
    word(SYSTEM_TIME, "REG_SYSTEM_INFO_RW_SYSTEM_TIME_YEAR_MONTH", Format::Plain),
    word(0x0741, "REG_SYSTEM_INFO_RW_SYSTEM_TIME_DAY_HOUR", Format::Plain),
    word(0x0742, "REG_SYSTEM_INFO_RW_SYSTEM_TIME_MINUTE_SECOND", Format::Plain),
    text(0x0743, "REG_SYSTEM_INFO_R_EMS_SN_BYTE_1_2", 8),
    word(0x074B, "REG_SYSTEM_INFO_R_EMS_VERSION_HIGH", Format::Plain),
    word(0x074C, "REG_SYSTEM_INFO_R_EMS_VERSION_MIDDLE", Format::Plain),
    word(0x074D, "REG_SYSTEM_INFO_R_EMS_VERSION_LOW", Format::Plain),
    word(0x074E, "REG_SYSTEM_INFO_R_PROTOCOL_VERSION", Format::Plain),

    // System configuration
    word(0x0800, "REG_SYSTEM_CONFIG_RW_MAX_FEED_INTO_GRID_PERCENT", Format::Plain),
    long(0x0801, "REG_SYSTEM_CONFIG_RW_PV_CAPACITY_STORAGE_1", Format::Plain),
    long(0x0803, "REG_SYSTEM_CONFIG_RW_PV_CAPACITY_OF_GRID_INVERTER_1", Format::Plain),
    word(0x0805, "REG_SYSTEM_CONFIG_RW_SYSTEM_MODE", Format::Lookup(lookup::SYSTEM_MODE)),
    word(0x0806, "REG_SYSTEM_CONFIG_RW_METER_CT_SELECT", Format::Lookup(lookup::METER_CT_SELECT)),
    word(0x0807, "REG_SYSTEM_CONFIG_RW_BATTERY_READY", Format::Lookup(lookup::BATTERY_READY)),
    word(0x0808, "REG_SYSTEM_CONFIG_RW_IP_METHOD", Format::Lookup(lookup::IP_METHOD)),
    long(0x0809, "REG_SYSTEM_CONFIG_RW_LOCAL_IP_1", Format::Ipv4),
    long(0x080B, "REG_SYSTEM_CONFIG_RW_SUBNET_MASK_1", Format::Ipv4),
    long(0x080D, "REG_SYSTEM_CONFIG_RW_GATEWAY_1", Format::Ipv4),
    word(0x080F, "REG_SYSTEM_CONFIG_RW_MODBUS_ADDRESS", Format::Plain),
    word(0x0810, "REG_SYSTEM_CONFIG_RW_MODBUS_BAUD_RATE", Format::Lookup(lookup::MODBUS_BAUD_RATE)),

    // Timing
    word(0x084F, "REG_TIMING_RW_TIME_PERIOD_CONTROL_FLAG", Format::Lookup(lookup::TIME_PERIOD_CONTROL)),
    word(0x0850, "REG_TIMING_RW_UPS_RESERVE_SOC", Format::Plain),
    word(0x0851, "REG_TIMING_RW_TIME_DISCHARGE_START_TIME_1", Format::Plain),
    word(0x0852, "REG_TIMING_RW_TIME_DISCHARGE_STOP_TIME_1", Format::Plain),
    word(0x0853, "REG_TIMING_RW_TIME_DISCHARGE_START_TIME_2", Format::Plain),
    word(0x0854, "REG_TIMING_RW_TIME_DISCHARGE_STOP_TIME_2", Format::Plain),
    word(0x0855, "REG_TIMING_RW_CHARGE_CUT_SOC", Format::Plain),
    word(0x0856, "REG_TIMING_RW_TIME_CHARGE_START_TIME_1", Format::Plain),
    word(0x0857, "REG_TIMING_RW_TIME_CHARGE_STOP_TIME_1", Format::Plain),
    word(0x0858, "REG_TIMING_RW_TIME_CHARGE_START_TIME_2", Format::Plain),
    word(0x0859, "REG_TIMING_RW_TIME_CHARGE_STOP_TIME_2", Format::Plain),

    // Dispatch
    word(0x0880, "REG_DISPATCH_RW_DISPATCH_START", Format::Lookup(lookup::DISPATCH_START)),
    signed_long(0x0881, "REG_DISPATCH_RW_ACTIVE_POWER_1", Format::Plain),
    signed_long(0x0883, "REG_DISPATCH_RW_REACTIVE_POWER_1", Format::Plain),
    word(0x0885, "REG_DISPATCH_RW_DISPATCH_MODE", Format::Lookup(lookup::DISPATCH_MODE)),
    word(0x0886, "REG_DISPATCH_RW_DISPATCH_SOC", Format::Scaled(DISPATCH_SOC_MULTIPLIER)),
    long(0x0887, "REG_DISPATCH_RW_DISPATCH_TIME_1", Format::Plain),

    // Auxiliary inputs
    word(0x08C0, "REG_AUXILIARY_R_EMS_DI0", Format::Plain),
    word(0x08C1, "REG_AUXILIARY_R_EMS_DI1", Format::Plain),

    // System operation
    long(0x08D0, "REG_SYSTEM_OP_R_PV_INVERTER_ENERGY_1", Format::Scaled(TOTAL_ENERGY_MULTIPLIER)),
    long(0x08D2, "REG_SYSTEM_OP_R_SYSTEM_TOTAL_PV_ENERGY_1", Format::Scaled(TOTAL_ENERGY_MULTIPLIER)),
    long(SYSTEM_FAULT, "REG_SYSTEM_OP_R_SYSTEM_FAULT_1", Format::SystemFault),

    // Safety
    word(0x1000, "REG_SAFETY_TEST_RW_GRID_REGULATION", Format::Lookup(lookup::GRID_REGULATION)),

    // Derived readings
    derived(
        DERIVED_TOTAL_SOLAR_POWER,
        "REG_CUSTOM_TOTAL_SOLAR_POWER",
        Derivation::TotalSolarPower,
        2,
        DataType::I32,
    ),
    derived(
        DERIVED_GRID_CURRENT_A,
        "REG_CUSTOM_GRID_CURRENT_A_PHASE",
        Derivation::GridCurrentA,
        1,
        DataType::I16,
    ),
    derived(DERIVED_LOAD, "REG_CUSTOM_LOAD", Derivation::Load, 2, DataType::I32),
    RegisterDescriptor {
        id: SYSTEM_DATE_TIME,
        name: "REG_CUSTOM_SYSTEM_DATE_TIME",
        source: Source::Register(SYSTEM_TIME),
        count: 3,
        data_type: DataType::Text,
        format: Format::DateTime,
    },
];
