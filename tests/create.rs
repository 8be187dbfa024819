mod common;

use common::*;
use embedded_hal::i2c::ErrorKind as I2cErrorKind;
use lis2dh12_regs::ErrorKind;

#[test]
fn create() {
    let trans = trans_init(0b0000_0000, 0b0000_0000);
    let mock = I2cMock::new(&trans);
    let dev = Lis2dh12::new_i2c(mock, SlaveAddr::Default, &mut RecordingDelay::default()).unwrap();
    dev.destroy_i2c().done();
}

#[test]
fn create1() {
    let a = DEV_ADDR | 0b1;
    let trans = [
        // WHO_AM_I on alternative slave address
        I2cTrans::write_read(a, vec![0x0F], vec![0b0011_0011]),
        I2cTrans::write(a, vec![0x24, 0x80]),
        I2cTrans::write(a, vec![0x20, 0x07]),
        I2cTrans::write_read(a, vec![0x20], vec![0x07]),
        I2cTrans::write(a, vec![0x20, 0x77]),
        I2cTrans::write(a, vec![0x23, 0x88]),
        I2cTrans::write_read(a, vec![0x23], vec![0x88]),
        I2cTrans::write(a, vec![0x23, 0x98]),
    ];
    let mock = I2cMock::new(&trans);
    let dev = Lis2dh12::new_i2c(mock, SlaveAddr::Alternative(true), &mut RecordingDelay::default())
        .unwrap();
    dev.destroy_i2c().done();
}

#[test]
fn create_preserves_low_bits_in_rmw() {
    // low nibble of CTRL_REG1 and non-FS bits of CTRL_REG4 read back untouched
    let trans = trans_init(0b1010_1101, 0b1111_1011);
    assert_eq!(trans[4], I2cTrans::write(DEV_ADDR, vec![0x20, 0b0111_1101]));
    assert_eq!(trans[7], I2cTrans::write(DEV_ADDR, vec![0x23, 0b1101_1011]));
    let (_dev, mut mock) = new_dev(&trans);
    mock.done();
}

#[test]
fn create_waits_for_reboot() {
    let trans = trans_init(0x07, 0x88);
    let mut mock = I2cMock::new(&trans);
    let mut delay = RecordingDelay::default();
    let _dev = Lis2dh12::new_i2c(mock.clone(), SlaveAddr::Default, &mut delay).unwrap();
    assert!(delay.total_ns >= 5_000_000);
    assert!(delay.calls >= 1);
    mock.done();
}

#[test]
fn create_wrong_device_id() {
    let trans = [I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x32])];
    let mut mock = I2cMock::new(&trans);
    let mut delay = RecordingDelay::default();
    let err = Lis2dh12::new_i2c(mock.clone(), SlaveAddr::Default, &mut delay)
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Device);
    // nothing written, no reboot wait
    assert_eq!(delay.calls, 0);
    mock.done();
}

#[test]
fn create_bus_error() {
    let trans = [I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x00])
        .with_error(I2cErrorKind::Other)];
    let mut mock = I2cMock::new(&trans);
    let err = Lis2dh12::new_i2c(mock.clone(), SlaveAddr::Default, &mut RecordingDelay::default())
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Bus);
    assert_eq!(err.cause(), Some(&I2cErrorKind::Other));
    mock.done();
}

#[test]
fn dev_id_get() {
    let mut trans = trans_init(0x00, 0x00);
    trans.push(trans_who_am_i());
    let (mut dev, mut mock) = new_dev(&trans);
    let dev_id = dev.get_device_id().unwrap();
    assert_eq!(dev_id, 0b0011_0011);
    mock.done();
}
