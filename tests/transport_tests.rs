use std::time::Duration;

use alpha_modbus_protocol::{
    crc, Direction, FrameTransport, ModbusError, Request, ScriptedChannel, Status,
};
use tracing_test::traced_test;

/// Appends a valid CRC to `body`.
fn response(body: &[u8]) -> Vec<u8> {
    let mut frame = body.to_vec();
    frame.extend([0, 0]);
    crc::stamp(&mut frame);
    frame
}

fn transport_with(reply: Vec<u8>) -> FrameTransport<ScriptedChannel> {
    let mut channel = ScriptedChannel::new();
    channel.queue_reply(reply);
    FrameTransport::builder().channel(channel).build().unwrap()
}

fn read_request() -> Request {
    Request::read_holding(0x0014, 1).unwrap()
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let transport = FrameTransport::builder()
            .channel(ScriptedChannel::new())
            .build()
            .unwrap();

        assert_eq!(transport.unit_id(), 0x55);
    }

    #[test]
    fn test_builder_missing_channel() {
        let transport = FrameTransport::<ScriptedChannel>::builder().build();
        assert!(matches!(transport, Err(ModbusError::ChannelMissing)));
    }

    #[test]
    fn test_builder_zero_tries() {
        let transport = FrameTransport::builder()
            .channel(ScriptedChannel::new())
            .tries(0)
            .build();
        assert!(matches!(transport, Err(ModbusError::InvalidTries(0))));
    }
}

#[cfg(test)]
mod exchange_tests {
    use super::*;

    #[test]
    fn test_read_request_on_the_wire() {
        let mut transport = transport_with(response(&[0x55, 0x03, 0x02, 0x09, 0x75]));
        transport.execute(read_request());

        let sent = transport.channel().sent();
        assert_eq!(sent.len(), 1);
        // unit, fc, address 0x0014, count 1, CRC low/high
        assert_eq!(sent[0], vec![0x55, 0x03, 0x00, 0x14, 0x00, 0x01, 0xC9, 0xDA]);
    }

    #[test]
    fn test_line_is_turned_around_for_the_reply() {
        let mut transport = transport_with(response(&[0x55, 0x03, 0x02, 0x09, 0x75]));
        transport.execute(read_request());

        assert_eq!(
            transport.channel().directions(),
            &[Direction::Transmit, Direction::Receive]
        );
    }

    #[test]
    fn test_read_success() {
        let mut transport = transport_with(response(&[0x55, 0x03, 0x02, 0x09, 0x75]));
        let exchange = transport.execute(read_request());

        assert_eq!(exchange.status, Status::ReadDataRegisterSuccess);
        assert_eq!(exchange.function_code, Some(0x03));
        assert_eq!(exchange.payload, vec![0x09, 0x75]);
        assert_eq!(exchange.frame.len(), 7);
    }

    #[test]
    fn test_read_success_with_four_data_bytes() {
        // 308695 = 0x0004B5D7
        let mut transport =
            transport_with(response(&[0x55, 0x03, 0x04, 0x00, 0x04, 0xB5, 0xD7]));
        let exchange = transport.execute(Request::read_holding(0x08D2, 2).unwrap());

        assert_eq!(exchange.status, Status::ReadDataRegisterSuccess);
        assert_eq!(exchange.payload, vec![0x00, 0x04, 0xB5, 0xD7]);
    }

    #[test]
    fn test_write_single_ack() {
        let ack = response(&[0x55, 0x06, 0x08, 0x50, 0x00, 0x14]);
        let mut transport = transport_with(ack.clone());
        let exchange = transport.execute(Request::write_single(0x0850, 20));

        assert_eq!(exchange.status, Status::WriteSingleRegisterSuccess);
        assert_eq!(exchange.payload, vec![0x08, 0x50, 0x00, 0x14]);
        assert_eq!(exchange.frame, ack);
    }

    #[test]
    fn test_write_multiple_ack() {
        let mut transport = transport_with(response(&[0x55, 0x10, 0x08, 0x81, 0x00, 0x02]));
        let exchange = transport.execute(Request::write_multiple(0x0881, &[0, 3000]).unwrap());

        assert_eq!(exchange.status, Status::WriteDataRegisterSuccess);
        assert_eq!(exchange.payload, vec![0x08, 0x81, 0x00, 0x02]);
    }

    #[test]
    fn test_resync_after_stray_bytes() {
        let mut reply = vec![0x00, 0xFF, 0x12];
        reply.extend(response(&[0x55, 0x03, 0x02, 0x09, 0x75]));
        let mut transport = transport_with(reply);

        let exchange = transport.execute(read_request());

        assert_eq!(exchange.status, Status::ReadDataRegisterSuccess);
        assert_eq!(exchange.payload, vec![0x09, 0x75]);
        assert_eq!(exchange.frame[0], 0x55);
    }

    #[test]
    fn test_stale_input_is_discarded_before_sending() {
        let mut channel = ScriptedChannel::new();
        channel
            .inject_noise(&[0x55, 0x03, 0x02, 0xDE, 0xAD, 0x00, 0x00])
            .queue_reply(response(&[0x55, 0x03, 0x02, 0x09, 0x75]));
        let mut transport = FrameTransport::builder().channel(channel).build().unwrap();

        let exchange = transport.execute(read_request());

        assert_eq!(exchange.status, Status::ReadDataRegisterSuccess);
        assert_eq!(exchange.payload, vec![0x09, 0x75]);
    }

    #[test]
    fn test_no_response_waits_tries_times_poll_delay() {
        let mut channel = ScriptedChannel::new();
        channel.queue_reply(Vec::new());
        let mut transport = FrameTransport::builder()
            .channel(channel)
            .tries(8)
            .poll_delay(Duration::from_millis(50))
            .build()
            .unwrap();

        let exchange = transport.execute(read_request());

        assert_eq!(exchange.status, Status::NoResponse);
        assert!(exchange.frame.is_empty());
        assert_eq!(transport.channel().elapsed(), Duration::from_millis(400));
    }

    #[test]
    fn test_only_stray_bytes_is_no_response() {
        let mut transport = transport_with(vec![0x00, 0x01, 0x02]);
        let exchange = transport.execute(read_request());

        assert_eq!(exchange.status, Status::NoResponse);
    }

    #[test]
    fn test_truncated_read_is_too_short() {
        // Byte count promises 4 data bytes, line goes quiet after 2
        let mut transport = transport_with(vec![0x55, 0x03, 0x04, 0x00, 0x01]);
        let exchange = transport.execute(Request::read_holding(0x0021, 2).unwrap());

        assert_eq!(exchange.status, Status::ResponseTooShort);
        assert_eq!(exchange.function_code, Some(0x03));
        assert!(exchange.payload.is_empty());
    }

    #[test]
    fn test_reply_below_floor_is_too_short() {
        let mut transport = transport_with(vec![0x55, 0x03]);
        let exchange = transport.execute(read_request());

        assert_eq!(exchange.status, Status::ResponseTooShort);
    }

    #[test]
    fn test_truncated_write_ack_is_too_short() {
        let mut ack = response(&[0x55, 0x06, 0x08, 0x50, 0x00, 0x14]);
        ack.truncate(6);
        let mut transport = transport_with(ack);

        let exchange = transport.execute(Request::write_single(0x0850, 20));
        assert_eq!(exchange.status, Status::ResponseTooShort);
    }

    #[test]
    fn test_flipped_crc_is_invalid_frame() {
        let mut reply = response(&[0x55, 0x03, 0x02, 0x09, 0x75]);
        let last = reply.len() - 1;
        reply[last] ^= 0x01;
        let mut transport = transport_with(reply);

        let exchange = transport.execute(read_request());

        assert_eq!(exchange.status, Status::InvalidFrame);
        assert!(exchange.payload.is_empty());
    }

    #[test]
    fn test_one_byte_slave_error() {
        let mut transport = transport_with(response(&[0x55, 0x83, 0x02]));
        let exchange = transport.execute(read_request());

        assert_eq!(exchange.status, Status::SlaveError);
        assert_eq!(exchange.function_code, Some(0x83));
        assert_eq!(exchange.payload, vec![0x02]);
        assert_eq!(exchange.error_code(), Some(0x02));
        // The optional second error byte was waited for and never came
        assert_eq!(transport.channel().elapsed(), Duration::from_millis(400));
    }

    #[test]
    fn test_two_byte_slave_error() {
        let mut transport = transport_with(response(&[0x55, 0x90, 0x00, 0x04]));
        let exchange = transport.execute(Request::write_single(0x0850, 20));

        assert_eq!(exchange.status, Status::SlaveError);
        assert_eq!(exchange.payload, vec![0x00, 0x04]);
        assert_eq!(exchange.error_code(), Some(0x0004));
        assert_eq!(transport.channel().elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_slave_error_with_bad_crc() {
        let mut reply = response(&[0x55, 0x83, 0x02]);
        reply[2] = 0x03;
        let mut transport = transport_with(reply);

        let exchange = transport.execute(read_request());
        assert_eq!(exchange.status, Status::InvalidFrame);
        assert_eq!(exchange.error_code(), None);
    }

    #[test]
    fn test_failed_write_is_no_response() {
        let mut channel = ScriptedChannel::new();
        channel.fail_writes(true);
        let mut transport = FrameTransport::builder().channel(channel).build().unwrap();

        let exchange = transport.execute(read_request());

        assert_eq!(exchange.status, Status::NoResponse);
        // Line is released even though the write failed
        assert_eq!(
            transport.channel().directions().last(),
            Some(&Direction::Receive)
        );
    }

    #[test]
    fn test_inter_request_delay() {
        let mut channel = ScriptedChannel::new();
        channel.queue_reply(response(&[0x55, 0x03, 0x02, 0x09, 0x75]));
        let mut transport = FrameTransport::builder()
            .channel(channel)
            .inter_request_delay(Duration::from_millis(80))
            .build()
            .unwrap();

        let exchange = transport.execute(read_request());

        assert!(exchange.is_success());
        assert_eq!(transport.channel().elapsed(), Duration::from_millis(80));
    }

    #[test]
    fn test_send_and_receive_stamps_caller_frame() {
        let mut transport = transport_with(response(&[0x55, 0x03, 0x02, 0x09, 0x75]));
        let mut frame = [0x55, 0x03, 0x00, 0x14, 0x00, 0x01, 0x00, 0x00];

        let exchange = transport.send_and_receive(&mut frame);

        assert!(exchange.is_success());
        assert_eq!(&frame[6..], &[0xC9, 0xDA]);
    }

    #[test]
    fn test_consecutive_exchanges_are_independent() {
        let mut channel = ScriptedChannel::new();
        channel
            .queue_reply(vec![0x55, 0x03])
            .queue_reply(response(&[0x55, 0x03, 0x02, 0x09, 0x75]));
        let mut transport = FrameTransport::builder().channel(channel).build().unwrap();

        assert_eq!(transport.execute(read_request()).status, Status::ResponseTooShort);
        assert_eq!(
            transport.execute(read_request()).status,
            Status::ReadDataRegisterSuccess
        );
    }

    #[test]
    fn test_set_baud_rate() {
        let mut transport = transport_with(Vec::new());
        transport.set_baud_rate(115200).unwrap();

        assert_eq!(transport.channel().baud_rate(), Some(115200));
    }

    #[test]
    #[traced_test]
    fn test_frames_are_traced() {
        let mut transport = transport_with(response(&[0x55, 0x03, 0x02, 0x09, 0x75]));
        transport.execute(read_request());

        assert!(logs_contain("Tx: [55, 03, 00, 14, 00, 01, C9, DA]"));
        assert!(logs_contain("Rx: [55, 03, 02, 09, 75"));
    }
}

#[cfg(test)]
mod request_tests {
    use super::*;
    use alpha_modbus_protocol::{RequestError, WordWidth};

    #[test]
    fn test_write_multiple_pdu() {
        let request = Request::write_multiple(0x0881, &[0x0000, 0x0BB8]).unwrap();

        assert_eq!(request.function_code(), 0x10);
        // fc, address, word count, byte count, data
        assert_eq!(
            request.pdu(),
            &[0x10, 0x08, 0x81, 0x00, 0x02, 0x04, 0x00, 0x00, 0x0B, 0xB8]
        );
    }

    #[test]
    fn test_into_frame_reserves_crc() {
        let frame = Request::write_single(0x0850, 20).into_frame(0x55);
        assert_eq!(frame, vec![0x55, 0x06, 0x08, 0x50, 0x00, 0x14, 0x00, 0x00]);
    }

    #[test]
    fn test_write_multiple_limits() {
        assert_eq!(
            Request::write_multiple(0x0000, &[]).unwrap_err(),
            RequestError::InvalidCount(0, 123)
        );
        assert_eq!(
            Request::write_multiple(0x0000, &[0; 124]).unwrap_err(),
            RequestError::InvalidCount(124, 123)
        );
        assert!(Request::read_holding(0xFF83, 125).is_ok());
    }

    #[test]
    fn test_word_width_from_count() {
        assert_eq!(WordWidth::try_from(2u16), Ok(WordWidth::Double));
        assert_eq!(WordWidth::try_from(3u16), Err(RequestError::InvalidCount(3, 2)));
    }
}
