//! IS31FL3218 18-channel LED driver.
//!
//! PWM values are staged in registers `0x01..=0x12` and only take effect
//! after a write to the update register. The badge has LEDs on the first
//! twelve channels.

use embedded_hal::i2c::I2c;

use crate::config::LED_COUNT;
use crate::error::{Device, Error};
use crate::platform::LedBar;

const REG_SHUTDOWN: u8 = 0x00;
const REG_PWM_BASE: u8 = 0x01;
const REG_LED_CONTROL: u8 = 0x13;
const REG_UPDATE: u8 = 0x16;
const REG_RESET: u8 = 0x17;

pub const CHANNELS: usize = 18;

pub struct Is31fl3218<I2C> {
    i2c: I2C,
    address: u8,
    count: usize,
}

impl<I2C: I2c> Is31fl3218<I2C> {
    /// Reset and enable the controller with the first `LED_COUNT` channels on.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error> {
        let mut this = Self {
            i2c,
            address,
            count: LED_COUNT,
        };
        this.write(REG_RESET, 0)
            .map_err(|e| e.absent(Device::LedDriver))?;
        this.set_enabled(true)?;

        let mut channels = [false; CHANNELS];
        channels[..LED_COUNT].fill(true);
        this.enable_channels(&channels)?;
        Ok(this)
    }

    /// Software shutdown control.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), Error> {
        self.write(REG_SHUTDOWN, enabled as u8)
    }

    /// Per-channel output enable, six channels per control register.
    pub fn enable_channels(&mut self, enabled: &[bool; CHANNELS]) -> Result<(), Error> {
        for (group, chunk) in enabled.chunks(6).enumerate() {
            let bits = chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (bit, on)| acc | ((*on as u8) << bit));
            self.write(REG_LED_CONTROL + group as u8, bits)?;
        }
        Ok(())
    }

    /// Stage a brightness for one channel. The chip takes 0..=31 here, so
    /// the 8-bit value is scaled down.
    pub fn set_pwm(&mut self, channel: usize, brightness: u8) -> Result<(), Error> {
        if channel >= CHANNELS {
            return Ok(());
        }
        self.write(REG_PWM_BASE + channel as u8, brightness / 8)
    }

    /// Latch all staged PWM values.
    pub fn update(&mut self) -> Result<(), Error> {
        self.write(REG_UPDATE, 0)
    }

    fn write(&mut self, register: u8, value: u8) -> Result<(), Error> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(|_| Error::Bus)
    }
}

impl<I2C: I2c> LedBar for Is31fl3218<I2C> {
    fn len(&self) -> usize {
        self.count
    }

    fn set_led(&mut self, index: usize, brightness: u8) {
        if index >= self.count {
            return;
        }
        if let Err(e) = self.set_pwm(index, brightness) {
            warn!("LED {}: {}", index, e);
        }
    }

    fn refresh(&mut self) {
        if let Err(e) = self.update() {
            warn!("LED refresh: {}", e);
        }
    }
}
