#![allow(non_upper_case_globals)]

use cast::f32;
use num_derive::FromPrimitive;

/// I2C slave address
pub const I2C_SAD: u8 = 0b001_1000;

/// Register address flag requesting address auto-increment on multi-byte reads
pub const I2C_SUB_MULTI: u8 = 0b1000_0000;

/// Standard gravity used for the g to m/s² conversion
pub const STANDARD_GRAVITY: f32 = 9.806;

/// Register mapping
#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    WHO_AM_I = 0x0F,
    TEMP_CFG_REG = 0x1F,
    CTRL_REG1 = 0x20,
    CTRL_REG4 = 0x23,
    CTRL_REG5 = 0x24,
    STATUS_REG = 0x27,
    OUT_X_L = 0x28,
}

impl Register {
    /// Get register address
    pub fn addr(self) -> u8 {
        self as u8
    }
}

// === WHO_AM_I (0Fh) ===

/// WHO_AM_I device identification register
pub const DEVICE_ID: u8 = 0b0011_0011;

// === CTRL_REG1 (20h) ===

pub const ODR_MASK: u8 = 0b1111_0000;

/// Output Data Rate
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Odr {
    /// Power-down mode
    PowerDown = 0b0000,
    /// 1 Hz
    Hz1 = 0b0001,
    /// 10 Hz
    Hz10 = 0b0010,
    /// 25 Hz
    Hz25 = 0b0011,
    /// 50 Hz
    Hz50 = 0b0100,
    /// 100 Hz
    Hz100 = 0b0101,
    /// 200 Hz
    Hz200 = 0b0110,
    /// 400 Hz
    Hz400 = 0b0111,
    /// Low-power mode (1.620 kHz)
    LowPower1620Hz = 0b1000,
    /// High-resolution / Normal (1.344 kHz),
    /// Low-power (5.376 kHz), selected by `LPen`
    Hz1344 = 0b1001,
}

impl Odr {
    /// Low-power 5.376 kHz, same code as [`Odr::Hz1344`]
    pub const LOW_POWER_5376_HZ: Odr = Odr::Hz1344;

    pub(crate) fn bits(self) -> u8 {
        self as u8
    }

    /// Sampling frequency in Hz, `low_power` reflects the `LPen` bit
    pub(crate) fn hz(self, low_power: bool) -> f32 {
        match self {
            Odr::PowerDown => 0.0,
            Odr::Hz1 => 1.0,
            Odr::Hz10 => 10.0,
            Odr::Hz25 => 25.0,
            Odr::Hz50 => 50.0,
            Odr::Hz100 => 100.0,
            Odr::Hz200 => 200.0,
            Odr::Hz400 => 400.0,
            Odr::LowPower1620Hz => 1620.0,
            Odr::Hz1344 if low_power => 5376.0,
            Odr::Hz1344 => 1344.0,
        }
    }
}

pub const LPen: u8 = 0b0000_1000;
pub const Zen: u8 = 0b0000_0100;
pub const Yen: u8 = 0b0000_0010;
pub const Xen: u8 = 0b0000_0001;

/// All axes enabled, normal mode
pub const CTRL_REG1_INIT: u8 = Xen | Yen | Zen;

// === CTRL_REG4 (23h) ===

pub const BDU: u8 = 0b1000_0000;

pub const FS_MASK: u8 = 0b0011_0000;

/// Full-scale selection
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScale {
    /// ±2 g
    G2 = 0b00,
    /// ±4 g
    G4 = 0b01,
    /// ±8 g
    G8 = 0b10,
    /// ±16 g
    G16 = 0b11,
}

impl FullScale {
    pub(crate) fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes the two low bits, higher bits are ignored
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::G2,
            0b01 => Self::G4,
            0b10 => Self::G8,
            _ => Self::G16,
        }
    }

    /// Counts per g at this full scale
    pub fn divisor(self) -> u16 {
        match self {
            Self::G2 => 16380,
            Self::G4 => 8190,
            Self::G8 => 4096,
            Self::G16 => 1365,
        }
    }

    pub(crate) fn convert_out_i16tof32(self, val: i16) -> f32 {
        f32(val) / f32(self.divisor())
    }
}

pub const HR: u8 = 0b0000_1000;

/// High-resolution output and block data update
pub const CTRL_REG4_INIT: u8 = BDU | HR;

// === CTRL_REG5 (24h) ===

pub const BOOT: u8 = 0b1000_0000;

// === STATUS_REG (27h) ===

pub const ZYXOR: u8 = 0b1000_0000;
pub const ZOR: u8 = 0b0100_0000;
pub const YOR: u8 = 0b0010_0000;
pub const XOR: u8 = 0b0001_0000;
pub const ZYXDA: u8 = 0b0000_1000;
pub const ZDA: u8 = 0b0000_0100;
pub const YDA: u8 = 0b0000_0010;
pub const XDA: u8 = 0b0000_0001;
