use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Which way the half-duplex line is driven.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Transmit,
    Receive,
}

/// Byte-level access to a half-duplex serial line.
///
/// The transport drives a channel strictly one exchange at a time; an
/// implementation never sees interleaved requests.
pub trait Channel {
    fn set_direction(&mut self, direction: Direction) -> io::Result<()>;

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Blocks until everything written has left the outbound buffer.
    fn flush(&mut self) -> io::Result<()>;

    fn bytes_available(&mut self) -> io::Result<usize>;

    fn read_byte(&mut self) -> io::Result<u8>;

    /// Drops whatever is waiting in the inbound buffer.
    fn discard_input(&mut self) -> io::Result<()>;

    fn set_baud_rate(&mut self, baud_rate: u32) -> io::Result<()>;

    /// Sleeps between polls. Simulated channels override this to keep time
    /// virtual.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<C: Channel + ?Sized> Channel for Box<C> {
    fn set_direction(&mut self, direction: Direction) -> io::Result<()> {
        (**self).set_direction(direction)
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn bytes_available(&mut self) -> io::Result<usize> {
        (**self).bytes_available()
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        (**self).read_byte()
    }

    fn discard_input(&mut self) -> io::Result<()> {
        (**self).discard_input()
    }

    fn set_baud_rate(&mut self, baud_rate: u32) -> io::Result<()> {
        (**self).set_baud_rate(baud_rate)
    }

    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration)
    }
}

/// In-memory channel that answers each transmitted frame with the next
/// queued reply.
///
/// Pauses are accumulated instead of slept, so timeouts cost no wall-clock
/// time and can be measured through [`ScriptedChannel::elapsed`].
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    replies: VecDeque<Vec<u8>>,
    inbound: VecDeque<u8>,
    sent: Vec<Vec<u8>>,
    directions: Vec<Direction>,
    elapsed: Duration,
    baud_rate: Option<u32>,
    fail_writes: bool,
}

impl ScriptedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the bytes delivered after the next transmission. An empty
    /// reply models a silent device.
    pub fn queue_reply(&mut self, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.replies.push_back(bytes.into());
        self
    }

    /// Puts bytes straight into the inbound buffer, as line noise would.
    pub fn inject_noise(&mut self, bytes: &[u8]) -> &mut Self {
        self.inbound.extend(bytes);
        self
    }

    pub fn fail_writes(&mut self, fail: bool) -> &mut Self {
        self.fail_writes = fail;
        self
    }

    /// Every frame written so far, oldest first.
    pub fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn baud_rate(&self) -> Option<u32> {
        self.baud_rate
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Channel for ScriptedChannel {
    fn set_direction(&mut self, direction: Direction) -> io::Result<()> {
        self.directions.push(direction);
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "scripted write failure"));
        }
        self.sent.push(bytes.to_vec());
        if let Some(reply) = self.replies.pop_front() {
            self.inbound.extend(reply);
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn bytes_available(&mut self) -> io::Result<usize> {
        Ok(self.inbound.len())
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        self.inbound
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::WouldBlock, "inbound buffer empty"))
    }

    fn discard_input(&mut self) -> io::Result<()> {
        self.inbound.clear();
        Ok(())
    }

    fn set_baud_rate(&mut self, baud_rate: u32) -> io::Result<()> {
        self.baud_rate = Some(baud_rate);
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.elapsed += duration;
    }
}
