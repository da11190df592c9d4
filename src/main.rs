//! Badge firmware entry point (RP2040).
//!
//! Brings up the shared I²C bus and the ST7735 panel, probes the optional
//! peripherals, shows Eyes until a long press, then runs the main menu
//! forever. A peripheral that doesn't
//! answer at boot stays disabled for the session; the badge keeps working
//! without it.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, SPI0};
use embassy_rp::spi::{self, Spi};
use embassy_time::{block_for, Delay, Duration, Instant};
use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7735s;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use badge::apps;
use badge::config::{
    ACCEL_ADDR, DISPLAY_COL_OFFSET, DISPLAY_HEIGHT, DISPLAY_ROW_OFFSET, DISPLAY_SPI_FREQUENCY_HZ,
    DISPLAY_WIDTH, I2C_FREQUENCY_HZ, JOYSTICK_ADDR, LED_DRIVER_ADDR,
};
use badge::drivers::{Is31fl3218, Joystick, Stk8321};
use badge::input::{AccelSample, RawSample};
use badge::platform::{LedBar, Platform};
use badge::ui::{display, Frame};

type I2cBus = I2c<'static, I2C0, i2c::Blocking>;
type SharedI2c = RefCellDevice<'static, I2cBus>;
type SpiBus = Spi<'static, SPI0, spi::Blocking>;
type Panel = mipidsi::Display<
    SpiInterface<'static, ExclusiveDevice<SpiBus, Output<'static>, NoDelay>, Output<'static>>,
    ST7735s,
    Output<'static>,
>;

static I2C_BUS: StaticCell<RefCell<I2cBus>> = StaticCell::new();
static DISPLAY_BUF: StaticCell<[u8; 512]> = StaticCell::new();

/// The real badge behind [`Platform`].
struct Badge {
    joystick: Option<Joystick<SharedI2c>>,
    leds: Option<Is31fl3218<SharedI2c>>,
    accel: Option<Stk8321<SharedI2c>>,
    panel: Option<Panel>,
    rng: SmallRng,
}

impl Platform for Badge {
    type Rng = SmallRng;

    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn wait_ms(&mut self, ms: u64) {
        block_for(Duration::from_millis(ms));
    }

    fn sample_input(&mut self) -> Option<RawSample> {
        let now = self.now_ms();
        self.joystick.as_mut().map(|joystick| joystick.sample(now))
    }

    fn sample_accelerometer(&mut self) -> Option<AccelSample> {
        let accel = self.accel.as_mut()?;
        match accel.read() {
            Ok(sample) => Some(sample),
            Err(e) => {
                warn!("Accelerometer: read failed: {}", e);
                None
            }
        }
    }

    fn render(&mut self, frame: &Frame<'_>) {
        if let Some(panel) = self.panel.as_mut() {
            if display::draw(panel, frame).is_err() {
                warn!("Display: draw failed");
            }
        }
    }

    fn leds(&mut self) -> Option<&mut dyn LedBar> {
        self.leds.as_mut().map(|leds| leds as &mut dyn LedBar)
    }

    fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

/// Report a missing device and carry on without it.
fn optional<T>(result: Result<T, badge::error::Error>) -> Option<T> {
    match result {
        Ok(device) => Some(device),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Badge starting");

    // ═══════════════════════════════════════════════════════════════════
    // I²C peripherals (SDA GP16, SCL GP17)
    // ═══════════════════════════════════════════════════════════════════
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let bus = I2C_BUS.init(RefCell::new(I2c::new_blocking(
        p.I2C0, p.PIN_17, p.PIN_16, i2c_config,
    )));

    let mut joystick = optional(Joystick::new(RefCellDevice::new(bus), JOYSTICK_ADDR));
    let leds = optional(Is31fl3218::new(RefCellDevice::new(bus), LED_DRIVER_ADDR));
    let mut accel = optional(Stk8321::new(RefCellDevice::new(bus), ACCEL_ADDR));
    if let Some(accel) = accel.as_mut() {
        if let Err(e) = accel.enable_motion_interrupt() {
            warn!("Accelerometer: motion interrupt setup failed: {}", e);
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // ST7735 panel (SCK GP2, MOSI GP3, DC GP5, RST GP6, CS GP7, BL GP8)
    // ═══════════════════════════════════════════════════════════════════
    let mut spi_config = spi::Config::default();
    spi_config.frequency = DISPLAY_SPI_FREQUENCY_HZ;
    let spi_bus = Spi::new_blocking_txonly(p.SPI0, p.PIN_2, p.PIN_3, spi_config);
    let dc = Output::new(p.PIN_5, Level::Low);
    let rst = Output::new(p.PIN_6, Level::High);
    let cs = Output::new(p.PIN_7, Level::High);
    let _backlight = Output::new(p.PIN_8, Level::High);

    let panel = match ExclusiveDevice::new_no_delay(spi_bus, cs) {
        Ok(spi_device) => {
            let di = SpiInterface::new(spi_device, dc, DISPLAY_BUF.init([0u8; 512]));
            // Panel is 80x160 portrait; rotated to 160x80 landscape.
            let built = Builder::new(ST7735s, di)
                .reset_pin(rst)
                .display_size(DISPLAY_HEIGHT as u16, DISPLAY_WIDTH as u16)
                .display_offset(DISPLAY_COL_OFFSET, DISPLAY_ROW_OFFSET)
                .invert_colors(ColorInversion::Inverted)
                .orientation(Orientation::new().rotate(Rotation::Deg90))
                .init(&mut Delay);
            match built {
                Ok(panel) => Some(panel),
                Err(_) => {
                    warn!("Display: init failed");
                    None
                }
            }
        }
        Err(_) => {
            warn!("Display: SPI device setup failed");
            None
        }
    };

    // ═══════════════════════════════════════════════════════════════════
    // Random seed: boot ticks mixed with the first sensor readings
    // ═══════════════════════════════════════════════════════════════════
    let mut seed = Instant::now().as_ticks();
    if let Some(sample) = joystick.as_mut().map(|j| j.sample(0)) {
        seed ^= ((sample.x as u64) << 32) ^ (sample.y as u64 & 0xFFFF_FFFF);
    }
    if let Some(Ok(sample)) = accel.as_mut().map(|a| a.read()) {
        seed ^= (sample.x as u16 as u64) << 48
            | (sample.y as u16 as u64) << 16
            | sample.z as u16 as u64;
    }

    let mut badge = Badge {
        joystick,
        leds,
        accel,
        panel,
        rng: SmallRng::seed_from_u64(seed),
    };

    if let Some(leds) = badge.leds() {
        leds.fill(0);
        leds.refresh();
    }

    let mut menu = match apps::main_menu() {
        Ok(menu) => menu,
        Err(e) => defmt::panic!("Main menu: {}", e),
    };
    info!("Badge ready");

    apps::boot(&mut badge, &mut menu);
    loop {
        menu.run(&mut badge, apps::launch);
    }
}
