use std::fmt;

use crate::catalog::{DataType, Format};
use crate::lookup::{self, MONTHS, UNKNOWN};

/// Scaled values never show more decimals than this.
const MAX_DECIMALS: usize = 2;

/// One decoded register value, typed by its catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    Text(String),
}

impl Value {
    /// Reassembles `payload` as `data_type`, most significant byte first.
    /// Returns `None` when the payload is too short for the type.
    pub fn decode(data_type: DataType, payload: &[u8]) -> Option<Value> {
        let value = match data_type {
            DataType::U16 => Value::U16(u16::from_be_bytes(first(payload)?)),
            DataType::I16 => Value::I16(i16::from_be_bytes(first(payload)?)),
            DataType::U32 => Value::U32(u32::from_be_bytes(first(payload)?)),
            DataType::I32 => Value::I32(i32::from_be_bytes(first(payload)?)),
            DataType::Text => Value::Text(text(payload)),
        };
        Some(value)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::U16(v) => Some(v as i64),
            Value::I16(v) => Some(v as i64),
            Value::U32(v) => Some(v as i64),
            Value::I32(v) => Some(v as i64),
            Value::Text(_) => None,
        }
    }

    /// Raw bit pattern, as used for table and bit-field lookups.
    pub fn bits(&self) -> Option<u32> {
        match *self {
            Value::U16(v) => Some(v as u32),
            Value::I16(v) => Some(v as u16 as u32),
            Value::U32(v) => Some(v),
            Value::I32(v) => Some(v as u32),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U16(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

fn first<const N: usize>(payload: &[u8]) -> Option<[u8; N]> {
    payload.get(..N)?.try_into().ok()
}

/// Character registers are NUL padded.
fn text(payload: &[u8]) -> String {
    let end = payload
        .iter()
        .rposition(|&byte| byte != 0)
        .map_or(0, |last| last + 1);
    String::from_utf8_lossy(&payload[..end]).into_owned()
}

/// Renders `value` for display.
///
/// `payload` is consulted by the formats that work on bytes rather than the
/// number (IPv4, date/time). `system_faults` is the bit table picked by the
/// serial-number prefix, `None` when the prefix is not recognised.
pub fn render(
    format: &Format,
    value: &Value,
    payload: &[u8],
    system_faults: Option<lookup::BitTable>,
) -> String {
    match format {
        Format::Plain | Format::Text => value.to_string(),
        Format::Scaled(scale) => match value.as_i64() {
            Some(raw) => format_scaled(raw, *scale),
            None => value.to_string(),
        },
        Format::Lookup(table) => match value.bits() {
            Some(code) => lookup::describe(*table, code).to_string(),
            None => UNKNOWN.to_string(),
        },
        Format::LowestBit(table) => match value.bits() {
            Some(bits) => lookup::describe_lowest_bit(*table, bits).to_string(),
            None => UNKNOWN.to_string(),
        },
        Format::SystemFault => match (system_faults, value.bits()) {
            (Some(table), Some(bits)) => lookup::describe_lowest_bit(table, bits).to_string(),
            _ => UNKNOWN.to_string(),
        },
        Format::Ipv4 => match payload {
            [a, b, c, d, ..] => format!("{a}.{b}.{c}.{d}"),
            _ => value.to_string(),
        },
        Format::DateTime => format_date_time(payload).unwrap_or_else(|| value.to_string()),
    }
}

pub fn format_scaled(raw: i64, scale: f64) -> String {
    format!("{:.*}", decimals(scale), raw as f64 * scale)
}

fn decimals(scale: f64) -> usize {
    let mut shifted = scale;
    let mut decimals = 0;
    while decimals < MAX_DECIMALS && (shifted - shifted.round()).abs() > 1e-9 {
        shifted *= 10.0;
        decimals += 1;
    }
    decimals
}

/// `DD/Mon/20YY HH:MM:SS` from the bytes `YY MM DD HH mm ss`.
pub fn format_date_time(payload: &[u8]) -> Option<String> {
    let [year, month, day, hour, minute, second] = first(payload)?;
    let month = (month as usize)
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index))
        .copied()
        .unwrap_or("???");
    Some(format!(
        "{day:02}/{month}/20{year:02} {hour:02}:{minute:02}:{second:02}"
    ))
}
