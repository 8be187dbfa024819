//! I²C interface built on `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::RegisterBus;
use crate::reg::I2C_SAD;

/// Possible slave addresses
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlaveAddr {
    /// Default slave address
    Default,
    /// Alternative slave address providing bit value for `SA0`
    Alternative(bool),
}

impl SlaveAddr {
    pub(crate) fn addr(self) -> u8 {
        match self {
            SlaveAddr::Default => I2C_SAD,
            SlaveAddr::Alternative(sa0) => I2C_SAD | sa0 as u8,
        }
    }
}

/// I²C transport for the driver
pub struct I2cInterface<I2C> {
    /// The concrete I²C device implementation
    i2c: I2C,
    /// The I²C device slave address
    addr: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Wraps an I²C bus talking to the device at `addr`
    pub fn new(i2c: I2C, addr: SlaveAddr) -> Self {
        Self {
            i2c,
            addr: addr.addr(),
        }
    }

    /// Destroy interface, return `I2C` bus instance
    pub fn destroy(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterBus for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    #[inline]
    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.addr, &[register], buf)
    }

    #[inline]
    fn write_register_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.addr, &[register, value])
    }
}
