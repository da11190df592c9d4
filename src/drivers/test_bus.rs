//! Scripted I²C bus for driver tests.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use heapless::{Deque, Vec};

#[derive(Debug)]
pub struct Nack;

impl embedded_hal::i2c::Error for Nack {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

/// Answers reads from a queue (`None` = NACK) and records every write.
#[derive(Default)]
pub struct ScriptedBus {
    pub reads: Deque<Option<Vec<u8, 8>>, 16>,
    pub writes: Vec<(u8, Vec<u8, 4>), 64>,
    /// NACK every write.
    pub fail_writes: bool,
}

impl ScriptedBus {
    pub fn with_reads(reads: &[Option<&[u8]>]) -> Self {
        let mut bus = Self::default();
        for r in reads {
            let entry = r.map(|bytes| Vec::from_slice(bytes).unwrap());
            bus.reads.push_back(entry).unwrap();
        }
        bus
    }

    /// Value last written to `register` (two-byte register writes only).
    pub fn register(&self, register: u8) -> Option<u8> {
        self.writes
            .iter()
            .rev()
            .find(|(_, bytes)| bytes.len() == 2 && bytes[0] == register)
            .map(|(_, bytes)| bytes[1])
    }
}

impl ErrorType for ScriptedBus {
    type Error = Nack;
}

impl I2c for ScriptedBus {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Nack> {
        for op in operations {
            match op {
                Operation::Read(buf) => {
                    let data = self.reads.pop_front().flatten().ok_or(Nack)?;
                    buf.copy_from_slice(&data[..buf.len()]);
                }
                Operation::Write(bytes) => {
                    if self.fail_writes {
                        return Err(Nack);
                    }
                    let _ = self.writes.push((address, Vec::from_slice(bytes).map_err(|_| Nack)?));
                }
            }
        }
        Ok(())
    }
}
