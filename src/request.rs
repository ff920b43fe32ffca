use thiserror::Error;

pub const READ_HOLDING_REGISTERS: u8 = 0x03;
pub const WRITE_SINGLE_REGISTER: u8 = 0x06;
pub const WRITE_MULTIPLE_REGISTERS: u8 = 0x10;

/// Largest register count a single read may ask for.
pub const MAX_READ_COUNT: usize = 125;
/// Largest register count a single multi-write may carry.
pub const MAX_WRITE_COUNT: usize = 123;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid register count: {0}, expected 1..={1}")]
    InvalidCount(usize, usize),

    #[error("Invalid range: {0:#06x} + {1} > 65536")]
    RangeOverflow(u16, usize),
}

/// Number of 16-bit words a raw data write spans.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WordWidth {
    Single,
    Double,
}

impl WordWidth {
    pub fn words(self) -> usize {
        match self {
            WordWidth::Single => 1,
            WordWidth::Double => 2,
        }
    }
}

impl TryFrom<u16> for WordWidth {
    type Error = RequestError;

    fn try_from(count: u16) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(WordWidth::Single),
            2 => Ok(WordWidth::Double),
            other => Err(RequestError::InvalidCount(other as usize, 2)),
        }
    }
}

/// One outgoing request PDU (function code onwards, no unit id, no CRC).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pdu: Vec<u8>,
}

impl Request {
    pub fn read_holding(address: u16, count: u16) -> Result<Self, RequestError> {
        check_range(address, count as usize, MAX_READ_COUNT)?;

        let mut msg: [u8; 5] = [0; 5];
        msg[0] = READ_HOLDING_REGISTERS;
        msg[1] = (address >> 8) as u8;
        msg[2] = address as u8;
        msg[3] = (count >> 8) as u8;
        msg[4] = count as u8;
        Ok(Request { pdu: Vec::from(msg) })
    }

    pub fn write_single(address: u16, value: u16) -> Self {
        let [value_hi, value_lo] = value.to_be_bytes();
        Request {
            pdu: vec![
                WRITE_SINGLE_REGISTER,
                (address >> 8) as u8,
                address as u8,
                value_hi,
                value_lo,
            ],
        }
    }

    pub fn write_multiple(address: u16, words: &[u16]) -> Result<Self, RequestError> {
        check_range(address, words.len(), MAX_WRITE_COUNT)?;

        let mut pdu = Vec::with_capacity(6 + words.len() * 2);
        pdu.push(WRITE_MULTIPLE_REGISTERS);
        pdu.push((address >> 8) as u8);
        pdu.push(address as u8);
        pdu.push((words.len() >> 8) as u8);
        pdu.push(words.len() as u8);
        pdu.push((words.len() * 2) as u8);
        for word in words {
            pdu.extend_from_slice(&word.to_be_bytes());
        }
        Ok(Request { pdu })
    }

    /// Splits `value` into the words of a raw data write, high word first.
    pub fn write_data(address: u16, value: u32, width: WordWidth) -> Result<Self, RequestError> {
        match width {
            WordWidth::Single => Self::write_multiple(address, &[value as u16]),
            WordWidth::Double => {
                Self::write_multiple(address, &[(value >> 16) as u16, value as u16])
            }
        }
    }

    pub fn function_code(&self) -> u8 {
        self.pdu[0]
    }

    pub fn pdu(&self) -> &[u8] {
        &self.pdu
    }

    /// Full RTU frame with two zeroed CRC bytes, ready to be stamped.
    pub fn into_frame(self, unit_id: u8) -> Vec<u8> {
        let mut frame = Vec::with_capacity(1 + self.pdu.len() + 2);
        frame.push(unit_id);
        frame.extend(&self.pdu);
        frame.extend([0, 0]);
        frame
    }
}

fn check_range(address: u16, count: usize, max: usize) -> Result<(), RequestError> {
    if count == 0 || count > max {
        return Err(RequestError::InvalidCount(count, max));
    }
    if address as usize + count > 0x1_0000 {
        return Err(RequestError::RangeOverflow(address, count));
    }
    Ok(())
}
