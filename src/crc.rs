/// Modbus CRC-16 over `data` (reflected, poly 0xA001, init 0xFFFF).
pub fn compute(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= byte as u16;
        for _ in 0..8 {
            if (crc & 0x0001) != 0 {
                crc = (crc >> 1) ^ 0xA001;
            } else {
                crc >>= 1;
            }
        }
    }
    crc
}

/// Writes the CRC of everything but the last two bytes into the last two
/// bytes, low byte first. Frames shorter than three bytes are left untouched.
pub fn stamp(frame: &mut [u8]) {
    let len = frame.len();
    if len < 3 {
        return;
    }
    let crc = compute(&frame[..len - 2]);
    frame[len - 2] = crc as u8;
    frame[len - 1] = (crc >> 8) as u8;
}

/// Checks the trailing two bytes of `frame` against a fresh CRC.
///
/// Both sides are reassembled in transmission order, i.e. the byte at
/// `len - 2` is taken as the high half, so the comparison is independent of
/// the host's endianness.
pub fn validate(frame: &[u8]) -> bool {
    let len = frame.len();
    if len < 3 {
        return false;
    }
    let received = (frame[len - 2] as u16) << 8 | frame[len - 1] as u16;

    let crc = compute(&frame[..len - 2]);
    let calculated = (crc as u8 as u16) << 8 | (crc >> 8);

    received == calculated
}
