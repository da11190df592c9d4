//! I²C joystick with push button.
//!
//! Each read returns a 6-byte register block (see [`JoystickFrame`]). The
//! driver keeps the last good reading so a glitched transaction doesn't make
//! the cursor jump or the button appear released.

use embedded_hal::i2c::I2c;

use crate::error::{Device, Error};
use crate::input::{JoystickFrame, RawSample};

pub struct Joystick<I2C> {
    i2c: I2C,
    address: u8,
    last: JoystickFrame,
}

impl<I2C: I2c> Joystick<I2C> {
    /// Probe the joystick with one read.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error> {
        let mut this = Self {
            i2c,
            address,
            last: JoystickFrame { x: 0, y: 0, button: 1 },
        };
        this.last = this
            .read_frame()
            .map_err(|e| e.absent(Device::Joystick))?;
        Ok(this)
    }

    pub fn read_frame(&mut self) -> Result<JoystickFrame, Error> {
        let mut buf = [0u8; JoystickFrame::LEN];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(|_| Error::Bus)?;
        JoystickFrame::from_bytes(&buf).ok_or(Error::Bus)
    }

    /// Current position and button, falling back to the last good reading.
    pub fn sample(&mut self, now_ms: u64) -> RawSample {
        match self.read_frame() {
            Ok(frame) => self.last = frame,
            Err(e) => debug!("Joystick: read failed ({}), reusing last sample", e),
        }
        RawSample::from_joystick(self.last, now_ms)
    }
}
