#![allow(dead_code)]

pub use lis2dh12_regs::{Lis2dh12, SlaveAddr};

use embedded_hal::delay::DelayNs;
use embedded_hal_mock as hal;
pub use hal::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0b001_1000;

pub fn trans_who_am_i() -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0b0011_0011])
}

/// Bus traffic of a successful construction,
/// with the given register contents read back during the two RMW steps
pub fn trans_init(ctrl_reg1: u8, ctrl_reg4: u8) -> Vec<I2cTrans> {
    vec![
        trans_who_am_i(),
        // write CTRL_REG5: BOOT
        I2cTrans::write(DEV_ADDR, vec![0x24, 0x80]),
        // write CTRL_REG1: Xen, Yen, Zen
        I2cTrans::write(DEV_ADDR, vec![0x20, 0x07]),
        // read CTRL_REG1
        I2cTrans::write_read(DEV_ADDR, vec![0x20], vec![ctrl_reg1]),
        // write CTRL_REG1: ODR = 400 Hz
        I2cTrans::write(DEV_ADDR, vec![0x20, (ctrl_reg1 & 0x0F) | 0b0111_0000]),
        // write CTRL_REG4: BDU, HR
        I2cTrans::write(DEV_ADDR, vec![0x23, 0x88]),
        // read CTRL_REG4
        I2cTrans::write_read(DEV_ADDR, vec![0x23], vec![ctrl_reg4]),
        // write CTRL_REG4: FS = ±4 g
        I2cTrans::write(DEV_ADDR, vec![0x23, (ctrl_reg4 & !0x30) | 0b0001_0000]),
    ]
}

/// Accumulates requested delays instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }
}

pub fn new_dev(trans: &[I2cTrans]) -> (Lis2dh12<lis2dh12_regs::I2cInterface<I2cMock>>, I2cMock) {
    let mock = I2cMock::new(trans);
    let dev = Lis2dh12::new_i2c(mock.clone(), SlaveAddr::Default, &mut RecordingDelay::default())
        .unwrap();
    (dev, mock)
}
