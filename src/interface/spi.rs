//! SPI interface built on `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::RegisterBus;
use crate::reg::I2C_SUB_MULTI;

const SPI_READ: u8 = 0b1000_0000;
const SPI_MS: u8 = 0b0100_0000;
const SPI_ADDR_MASK: u8 = 0b0011_1111;

/// SPI transport for the driver
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Wraps an SPI device, chip select is handled by `SPI`
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Destroy interface, return `SPI` device instance
    pub fn destroy(self) -> SPI {
        self.spi
    }

    /// Command byte: `RW` bit, `MS` bit, then the 6-bit register address.
    /// The register auto-increment flag maps onto `MS`.
    fn command_byte(register: u8, read: bool, multi: bool) -> u8 {
        let mut command = register & SPI_ADDR_MASK;
        if read {
            command |= SPI_READ;
        }
        if multi || register & I2C_SUB_MULTI != 0 {
            command |= SPI_MS;
        }
        command
    }
}

impl<SPI> RegisterBus for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, true, buf.len() > 1)];
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi.transaction(&mut operations)
    }

    fn write_register_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.spi
            .write(&[Self::command_byte(register, false, false), value])
    }
}
