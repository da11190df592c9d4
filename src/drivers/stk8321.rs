//! STK8321 3-axis accelerometer.

use embedded_hal::i2c::I2c;

use crate::error::{Device, Error};
use crate::input::AccelSample;

const REG_CHIP_ID: u8 = 0x00;
const REG_DATA: u8 = 0x02;

/// The datasheet lists 0x21; parts on the badge answer 0x23.
const CHIP_ID: u8 = 0x23;

/// Any-motion interrupt on INT1, all axes, push-pull active high.
const MOTION_INTERRUPT_SETUP: [(u8, u8); 8] = [
    (0x27, 0x00), // slope threshold high
    (0x28, 0x14), // slope threshold low
    (0x20, 0x05), // INT1 active high, push-pull
    (0x21, 0x03), // latch for 1 s
    (0x16, 0x07), // any-motion on x, y, z
    (0x2A, 0x04), // enable any-motion
    (0x19, 0x05), // INT1 <- significant + any motion
    (0x1A, 0x00), // INT1 <- nothing else
];

pub struct Stk8321<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Stk8321<I2C> {
    /// Probe the chip id.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error> {
        let mut this = Self { i2c, address };
        let id = this
            .read_register(REG_CHIP_ID)
            .map_err(|e| e.absent(Device::Accelerometer))?;
        if id != CHIP_ID {
            return Err(Error::BadChipId(id));
        }
        Ok(this)
    }

    pub fn enable_motion_interrupt(&mut self) -> Result<(), Error> {
        for (register, value) in MOTION_INTERRUPT_SETUP {
            self.i2c
                .write(self.address, &[register, value])
                .map_err(|_| Error::Bus)?;
        }
        Ok(())
    }

    pub fn read(&mut self) -> Result<AccelSample, Error> {
        let mut raw = [0u8; 6];
        self.i2c
            .write_read(self.address, &[REG_DATA], &mut raw)
            .map_err(|_| Error::Bus)?;
        Ok(AccelSample {
            x: axis(raw[0], raw[1]),
            y: axis(raw[2], raw[3]),
            z: axis(raw[4], raw[5]),
        })
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut value)
            .map_err(|_| Error::Bus)?;
        Ok(value[0])
    }
}

/// 12-bit two's complement, left-justified across the low/high byte pair.
fn axis(lo: u8, hi: u8) -> i16 {
    let raw = (u16::from(lo) >> 4) | (u16::from(hi) << 4);
    // Shift the 12-bit sign bit into bit 15, then back.
    ((raw << 4) as i16) >> 4
}
