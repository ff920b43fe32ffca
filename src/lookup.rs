//! Description tables for enumerated and bit-field registers.

/// Code-to-description table for an enumerated register.
pub type CodeTable = &'static [(u32, &'static str)];

/// Per-bit descriptions, index 0 being the least significant bit.
pub type BitTable = &'static [&'static str];

pub const UNKNOWN: &str = "Unknown";

pub fn describe(table: CodeTable, code: u32) -> &'static str {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, description)| *description)
        .unwrap_or(UNKNOWN)
}

/// Description of the lowest set bit of `bits`, or an empty string when no
/// bit is set. Bits past the end of the table are `Unknown`.
pub fn describe_lowest_bit(table: BitTable, bits: u32) -> &'static str {
    if bits == 0 {
        return "";
    }
    let bit = bits.trailing_zeros() as usize;
    table.get(bit).copied().unwrap_or(UNKNOWN)
}

pub const BATTERY_STATUS: CodeTable = &[
    (0, "Charge (0) / Discharge (0)"),
    (1, "Charge (0) / Discharge (1)"),
    (256, "Charge (1) / Discharge (0)"),
    (257, "Charge (1) / Discharge (1)"),
    (512, "Charge (2) / Discharge (0)"),
    (513, "Charge (2) / Discharge (1)"),
];

pub const BATTERY_RELAY_STATUS: CodeTable = &[
    (0, "Charge and discharge relays are disconnected"),
    (1, "Only the discharge relay is closed"),
    (2, "Only the charging relay is closed"),
    (3, "Charge and discharge relays are closed"),
];

pub const BATTERY_TYPE: CodeTable = &[
    (2, "M4860"),
    (3, "M48100"),
    (13, "48112-P"),
    (16, "Smile5-BAT"),
    (24, "M4856-P"),
    (27, "Smile-BAT-10.3P"),
    (30, "Smile-BAT-10.1P"),
    (33, "Smile-BAT-5.8P"),
    (34, "Smile-BAT-JP"),
    (35, "Smile-BAT-13.7P"),
];

pub const BATTERY_FAULT: BitTable = &[
    "",
    "",
    "Cell Temp Difference",
    "Balancer Fault",
    "Charge Over Current",
    "Balancer Mos Fault",
    "Discharge Over Current",
    "Pole Over Temp",
    "Cell Over Volts",
    "Cell Volt Difference",
    "Discharge Low Temp",
    "Low Volt Shutdown",
    "Cell Low Volts",
    "ISO Comm Fault",
    "LMU SN Repeat",
    "BMU SN Repeat",
    "IR Fault",
    "LMU Comm Fault",
    "Cell Over Temp",
    "BMU Comm Fault",
    "INV Comm Fault",
    "Charge Low Temp",
    "TOPBMU Comm Fault",
    "Volt Detect Fault",
    "Wire Harness Fault",
    "Cluster Cut Fault",
    "Relay Fault",
    "LMU ID Repeat",
    "LMU ID Discontinuous",
    "Current Sensor Fault",
    "",
    "Temp Sensor Fault",
];

pub const MOS_CONTROL: CodeTable = &[(0, "Open"), (1, "Close")];

pub const SOC_CALIBRATION: CodeTable = &[(0, "Disable"), (1, "Enable")];

pub const INVERTER_WORKING_MODE: CodeTable = &[
    (0, "Wait Mode"),
    (1, "Online Mode"),
    (2, "UPS Mode"),
    (3, "Bypass Mode"),
    (4, "Error Mode"),
    (5, "DC Mode"),
    (6, "Self Test Mode"),
    (7, "Check Mode"),
    (8, "Update Master Mode"),
    (9, "Update Slave Mode"),
    (10, "Update ARM Mode"),
];

pub const SYSTEM_MODE: CodeTable = &[(1, "AC mode"), (2, "DC mode"), (3, "Hybrid mode")];

pub const METER_CT_SELECT: CodeTable = &[
    (0, "Grid&PV use CT"),
    (1, "Grid use CT, PV use Meter"),
    (2, "Grid use meter, PV use CT"),
    (3, "Grid&PV use meter"),
];

pub const BATTERY_READY: CodeTable = &[(0, "Off"), (1, "On")];

pub const IP_METHOD: CodeTable = &[(0, "DHCP"), (1, "STATIC")];

pub const MODBUS_BAUD_RATE: CodeTable = &[
    (0, "9600"),
    (1, "115200 (Only household)"),
    (2, "256000 (Only household)"),
    (3, "19200 (Only industry)"),
];

pub const TIME_PERIOD_CONTROL: CodeTable = &[
    (0, "Disable Time period control"),
    (1, "Enable charge Time period control"),
    (2, "Enable discharge Time period control"),
    (3, "Enable Time period control"),
];

pub const DISPATCH_START: CodeTable = &[(1, "Start"), (0, "Stop")];

pub const DISPATCH_MODE: CodeTable = &[
    (1, "The battery is only charged via PV"),
    (2, "State of charge control"),
    (3, "Load Following"),
    (4, "Maximize Output"),
    (5, "Normal mode"),
    (6, "Optimise consumption"),
    (7, "Maximise consumption"),
    (8, "ECO Mode"),
    (9, "FCAS-Mode"),
    (10, "PV power setting"),
];

/// System faults reported by units whose serial number starts with `AL`.
pub const SYSTEM_FAULT_AL: BitTable = &[
    "Network Card_Fault",
    "Rtc_Fault",
    "E2prom_Fault",
    "INV_Comms_Error",
    "Grid_Meter_Lost",
    "PV_Meter_Lost",
    "BMS_Lost",
    "UPS_Battery_Volt_Low",
    "Backup_Overload",
    "INV_Slave_Lost",
    "INV_Master_Lost",
    "Parallel_Comm_Error",
    "Parallel_Mode_Differ",
    "Flash_Fault",
    "SDRAM error",
    "Extension CAN error",
    "inv type not specified",
];

/// System faults reported by units whose serial number starts with `AE`.
pub const SYSTEM_FAULT_AE: BitTable = &[
    "Inverter disconnected",
    "Net meter separately",
    "Battery disconnected",
    "System not set",
    "PV meter disconnected",
    "Counter not set",
    "Incorrect connection direction of the PV meter",
    "SD not inserted or SD write error",
    "RTC error",
    "SDRAM error",
    "MMC-Error (CH376)",
    "Network card error",
    "Extension CAN Error (MCP2515)",
    "DRED error",
    "Android LCD separated",
    "STS_Lost",
    "STS_Fault",
    "PV_INV_Lost:n",
    "DG_PV_Conflict",
    "PV_INV_Fault:n",
    "AirConFault",
    "Fire_Fault",
    "FireControllerErr",
    "GC_Fault",
    "AirConLost",
    "OverCurr",
    "PcsModeFault",
    "BatEnergyLow",
];

pub const GRID_REGULATION: CodeTable = &[
    (0, "VDE0126"),
    (1, "ARN4105/11.18"),
    (2, "AS4777.2"),
    (3, "G83_2"),
    (4, "C10/C11"),
    (5, "TOR D4"),
    (6, "EN50438_NL"),
    (7, "EN50438_DK"),
    (8, "CEB"),
    (9, "CEI-021"),
    (10, "NRS097-2-1"),
    (11, "VDE0126_GREECE"),
    (12, "UTE_C15_712"),
    (13, "IEC61727"),
    (14, "G59_3"),
    (15, "RD1699"),
    (16, "G99"),
    (17, "Philippines_60HZ"),
    (18, "Tahiti_60HZ"),
    (19, "AS4777.2-SA"),
    (20, "G98"),
    (21, "EN50549"),
    (22, "PEA"),
    (23, "MEA"),
    (24, "BISI"),
    (25, "JET-GR Series"),
    (26, "JET-GR Series"),
    (27, "Taiwan"),
    (28, "DEFAULT_50HZ"),
    (29, "DEFAULT_60HZ"),
    (30, "WAREHOUSE"),
    (31, "AS4777.2-NZ"),
    (32, "Korea"),
    (33, "G98/G99-IE"),
    (34, "34EN50549-PL"),
    (35, "UL 1741"),
    (36, "UL1741-Rule 21"),
    (37, "UL1741-Hawaiian"),
];

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
