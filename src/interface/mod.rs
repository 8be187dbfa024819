//! Bus interface abstraction for the LIS2DH12 driver.

use core::fmt::Debug;

pub mod i2c;
pub mod spi;

/// Byte-level register access required by the driver.
///
/// Every call is one atomic bus transaction: no other bus user may interleave
/// between the register address and the data that follows it.
pub trait RegisterBus {
    /// Error type produced by the concrete bus implementation.
    type Error: Debug;

    /// Reads `buf.len()` bytes starting at `register`.
    ///
    /// Bit 7 of `register` requests address auto-increment for burst reads.
    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes a single register.
    fn write_register_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read_register(register, buf)
    }

    fn write_register_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_register_byte(register, value)
    }
}
