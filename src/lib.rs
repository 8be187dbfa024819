//! Platform-agnostic LIS2DH12 accelerometer driver which talks to the device
//! over I2C or SPI via [embedded-hal] and implements the
//! [`Accelerometer` trait][trait] from the `accelerometer` crate.
//!
//! On construction the device is rebooted and configured for 400 Hz,
//! high-resolution, block data update and ±4 g. Data rate and full scale are
//! read from and written to the device on every access, nothing is cached.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal
//! [trait]: https://docs.rs/accelerometer/latest/accelerometer/trait.Accelerometer.html
//!

#![deny(missing_docs)]
#![no_std]
#![forbid(unsafe_code)]

pub mod interface;
mod reg;

pub use accelerometer::vector::{F32x3, I16x3};
pub use accelerometer::{Accelerometer, Error, ErrorKind, RawAccelerometer};
use cast::u16;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;
use num_traits::FromPrimitive;

pub use crate::interface::i2c::{I2cInterface, SlaveAddr};
pub use crate::interface::spi::SpiInterface;
pub use crate::interface::RegisterBus;
use crate::reg::*;
pub use crate::reg::{FullScale, Odr, STANDARD_GRAVITY};

/// Reboot completes in 5 ms, rounded up
pub const BOOT_DELAY_MS: u32 = 10;

/// Acceleration along X, Y, Z in m/s²
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelerationSample {
    /// X axis
    pub x: f32,
    /// Y axis
    pub y: f32,
    /// Z axis
    pub z: f32,
}

/// Data status structure,
/// decoded from STATUS_REG register
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataStatus {
    /// ZYXOR bit
    pub zyxor: bool,
    /// (XOR, YOR, ZOR) bits
    pub xyzor: (bool, bool, bool),
    /// ZYXDA bit
    pub zyxda: bool,
    /// (XDA, YDA, ZDA) bits
    pub xyzda: (bool, bool, bool),
}

/// `LIS2DH12` driver
pub struct Lis2dh12<BUS> {
    /// The register transport
    bus: BUS,
}

impl<I2C> Lis2dh12<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Create a new `LIS2DH12` driver from the given `I2C` peripheral
    pub fn new_i2c<D: DelayNs>(
        i2c: I2C,
        addr: SlaveAddr,
        delay: &mut D,
    ) -> Result<Self, Error<I2C::Error>> {
        Self::new(I2cInterface::new(i2c, addr), delay)
    }

    /// Destroy driver instance, return `I2C` bus instance
    pub fn destroy_i2c(self) -> I2C {
        self.bus.destroy()
    }
}

impl<SPI> Lis2dh12<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Create a new `LIS2DH12` driver from the given `SPI` device
    pub fn new_spi<D: DelayNs>(spi: SPI, delay: &mut D) -> Result<Self, Error<SPI::Error>> {
        Self::new(SpiInterface::new(spi), delay)
    }

    /// Destroy driver instance, return `SPI` device instance
    pub fn destroy_spi(self) -> SPI {
        self.bus.destroy()
    }
}

impl<BUS, E> Lis2dh12<BUS>
where
    BUS: RegisterBus<Error = E>,
    E: core::fmt::Debug,
{
    /// Create a new `LIS2DH12` driver on the given register transport.
    ///
    /// Checks `WHO_AM_I`, reboots the memory content, waits for the reboot
    /// to finish and applies the default configuration: all axes enabled,
    /// 400 Hz, high-resolution, block data update, ±4 g.
    /// A wrong device ID fails with [`ErrorKind::Device`] before anything
    /// is written.
    pub fn new<D: DelayNs>(bus: BUS, delay: &mut D) -> Result<Self, Error<E>> {
        let mut dev = Self { bus };

        // Ensure we have the correct device ID
        let id = dev.get_device_id()?;
        if id != DEVICE_ID {
            #[cfg(feature = "log")]
            log::debug!("LIS2DH12 not found, WHO_AM_I = {:#04x}", id);
            ErrorKind::Device.err()?;
        }

        dev.write_reg(Register::CTRL_REG5, BOOT)?;
        delay.delay_ms(BOOT_DELAY_MS);

        dev.write_reg(Register::CTRL_REG1, CTRL_REG1_INIT)?;
        dev.set_data_rate(Odr::Hz400)?;
        dev.write_reg(Register::CTRL_REG4, CTRL_REG4_INIT)?;
        dev.set_range(FullScale::G4)?;

        #[cfg(feature = "log")]
        log::debug!("LIS2DH12 ready: 400 Hz, high-resolution, BDU, ±4 g");

        Ok(dev)
    }

    /// Destroy driver instance, return the register transport
    pub fn destroy(self) -> BUS {
        self.bus
    }

    /// `WHO_AM_I` register
    pub fn get_device_id(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(Register::WHO_AM_I).map_err(Into::into)
    }

    /// Data rate selection,
    /// `CTRL_REG1`: `ODR`
    pub fn set_data_rate(&mut self, odr: Odr) -> Result<(), Error<E>> {
        self.modify_reg(Register::CTRL_REG1, |v| {
            (v & !ODR_MASK) | (odr.bits() << 4)
        })?;
        Ok(())
    }

    /// Data rate,
    /// `CTRL_REG1`: `ODR`.
    ///
    /// Besides bus errors this is the one other failure: a reserved `ODR`
    /// code (`0b1010`..=`0b1111`) read back from the device fails with
    /// [`ErrorKind::Mode`].
    pub fn get_data_rate(&mut self) -> Result<Odr, Error<E>> {
        let creg1 = self.read_reg(Register::CTRL_REG1)?;
        decode_odr(creg1)
    }

    /// Full-scale selection,
    /// `CTRL_REG4`: `FS`
    pub fn set_range(&mut self, fs: FullScale) -> Result<(), Error<E>> {
        self.modify_reg(Register::CTRL_REG4, |v| (v & !FS_MASK) | (fs.bits() << 4))?;
        Ok(())
    }

    /// Full-scale,
    /// `CTRL_REG4`: `FS`
    pub fn get_range(&mut self) -> Result<FullScale, Error<E>> {
        let creg4 = self.read_reg(Register::CTRL_REG4)?;
        Ok(FullScale::from_bits(creg4 >> 4))
    }

    /// Acceleration in m/s², scaled by the full-scale read from the device
    pub fn acceleration(&mut self) -> Result<AccelerationSample, Error<E>> {
        let fs = self.get_range()?;
        let raw = self.read_out()?;

        Ok(AccelerationSample {
            x: fs.convert_out_i16tof32(raw.x) * STANDARD_GRAVITY,
            y: fs.convert_out_i16tof32(raw.y) * STANDARD_GRAVITY,
            z: fs.convert_out_i16tof32(raw.z) * STANDARD_GRAVITY,
        })
    }

    /// In boot,
    /// `CTRL_REG5`: `BOOT`
    pub fn in_boot(&mut self) -> Result<bool, Error<E>> {
        let reg = self.read_reg(Register::CTRL_REG5)?;
        Ok((reg & BOOT) != 0)
    }

    /// Data status,
    /// `STATUS_REG`: as
    /// DataStatus {zyxor: `ZYXOR`, xyzor: (`XOR`, `YOR`, `ZOR`), zyxda: `ZYXDA`, xyzda: (`XDA`, `YDA`, `ZDA`)}
    pub fn get_status(&mut self) -> Result<DataStatus, Error<E>> {
        let reg = self.read_reg(Register::STATUS_REG)?;
        Ok(DataStatus {
            zyxor: (reg & ZYXOR) != 0,
            xyzor: ((reg & XOR) != 0, (reg & YOR) != 0, (reg & ZOR) != 0),
            zyxda: (reg & ZYXDA) != 0,
            xyzda: ((reg & XDA) != 0, (reg & YDA) != 0, (reg & ZDA) != 0),
        })
    }

    /// `OUT_X_L` .. `OUT_Z_H` in one auto-increment burst
    fn read_out(&mut self) -> Result<I16x3, E> {
        let mut buf = [0u8; 6];
        self.read_regs(Register::OUT_X_L, &mut buf)?;

        Ok(I16x3::new(
            (u16(buf[0]) + (u16(buf[1]) << 8)) as i16,
            (u16(buf[2]) + (u16(buf[3]) << 8)) as i16,
            (u16(buf[4]) + (u16(buf[5]) << 8)) as i16,
        ))
    }

    #[inline]
    fn read_reg(&mut self, reg: Register) -> Result<u8, E> {
        let mut buf = [0u8];
        self.bus.read_register(reg.addr(), &mut buf)?;
        Ok(buf[0])
    }

    #[inline]
    fn read_regs(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), E> {
        self.bus.read_register(reg.addr() | I2C_SUB_MULTI, buffer)
    }

    #[inline]
    fn write_reg(&mut self, reg: Register, val: u8) -> Result<(), E> {
        self.bus.write_register_byte(reg.addr(), val)
    }

    #[inline]
    fn modify_reg<F>(&mut self, reg: Register, f: F) -> Result<(), E>
    where
        F: FnOnce(u8) -> u8,
    {
        let r = self.read_reg(reg)?;
        self.write_reg(reg, f(r))?;
        Ok(())
    }
}

/// `ODR` field of a `CTRL_REG1` value
fn decode_odr<E: core::fmt::Debug>(creg1: u8) -> Result<Odr, Error<E>> {
    Odr::from_u8((creg1 >> 4) & 0x0F).ok_or_else(|| Error::new(ErrorKind::Mode))
}

impl<BUS, E> RawAccelerometer<I16x3> for Lis2dh12<BUS>
where
    BUS: RegisterBus<Error = E>,
    E: core::fmt::Debug,
{
    type Error = E;

    /// Get acceleration reading from the accelerometer
    fn accel_raw(&mut self) -> Result<I16x3, Error<E>> {
        self.read_out().map_err(Into::into)
    }
}

impl<BUS, E> Accelerometer for Lis2dh12<BUS>
where
    BUS: RegisterBus<Error = E>,
    E: core::fmt::Debug,
{
    type Error = E;

    /// Get normalized ±g reading from the accelerometer
    fn accel_norm(&mut self) -> Result<F32x3, Error<E>> {
        let fs = self.get_range()?;
        let acc_raw = self.read_out()?;

        Ok(F32x3::new(
            fs.convert_out_i16tof32(acc_raw.x),
            fs.convert_out_i16tof32(acc_raw.y),
            fs.convert_out_i16tof32(acc_raw.z),
        ))
    }

    /// Get sample rate of accelerometer in Hz,
    /// a reserved `ODR` code fails with [`ErrorKind::Mode`]
    fn sample_rate(&mut self) -> Result<f32, Error<Self::Error>> {
        let creg1 = self.read_reg(Register::CTRL_REG1)?;
        let odr = decode_odr::<E>(creg1)?;
        Ok(odr.hz(creg1 & LPen != 0))
    }
}
