/*
    MPU-6050 Driver

    Register level access over a blocking I2C bus. Only the registers the
    sampler needs are touched.
*/

use crate::motion::{MotionSample, MotionSensor};
use embedded_hal::i2c::{self, I2c};

/// AD0 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// WHO_AM_I[6:1]
pub const DEVICE_ID: u8 = 0x34;

mod reg {
    pub const CONFIG: u8 = 0x1A;
    pub const GYRO_CONFIG: u8 = 0x1B;
    pub const ACCEL_CONFIG: u8 = 0x1C;
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    pub const PWR_MGMT_1: u8 = 0x6B;
    pub const WHO_AM_I: u8 = 0x75;
}

// PWR_MGMT_1 with SLEEP cleared
const CLOCK_PLL_XGYRO: u8 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("I2C error {0:?}")]
    I2c(i2c::ErrorKind),
    #[error("Unexpected device id {0:#04x}")]
    UnexpectedId(u8),
}

impl<E: i2c::Error> From<E> for Error {
    fn from(value: E) -> Self {
        Self::I2c(value.kind())
    }
}

/// Digital low-pass filter bandwidth (accelerometer side).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Dlpf {
    Hz260 = 0,
    Hz184 = 1,
    Hz94 = 2,
    Hz44 = 3,
    Hz21 = 4,
    Hz10 = 5,
    #[default]
    Hz5 = 6,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AccelRange {
    #[default]
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum GyroRange {
    #[default]
    Dps250 = 0,
    Dps500 = 1,
    Dps1000 = 2,
    Dps2000 = 3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub dlpf: Dlpf,
    pub accel_range: AccelRange,
    pub gyro_range: GyroRange,
}

pub struct Mpu6050<I2C> {
    i2c: I2C,
    address: u8,
    config: Config,
}

impl<I2C: I2c> Mpu6050<I2C> {
    pub fn new(i2c: I2C, address: u8, config: Config) -> Self {
        Self {
            i2c,
            address,
            config,
        }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Wake the device and apply the ranges and filter of `config`.
    pub fn init(&mut self) -> Result<(), Error> {
        self.write_register(reg::PWR_MGMT_1, CLOCK_PLL_XGYRO)?;
        self.write_register(reg::GYRO_CONFIG, (self.config.gyro_range as u8) << 3)?;
        self.write_register(reg::ACCEL_CONFIG, (self.config.accel_range as u8) << 3)?;
        self.write_register(reg::CONFIG, self.config.dlpf as u8)?;
        Ok(())
    }

    pub fn device_id(&mut self) -> Result<u8, Error> {
        Ok((self.read_register(reg::WHO_AM_I)? >> 1) & 0x3F)
    }

    pub fn test_connection(&mut self) -> Result<(), Error> {
        let id = self.device_id()?;
        if id != DEVICE_ID {
            return Err(Error::UnexpectedId(id));
        }
        Ok(())
    }

    /// Accelerometer, temperature and gyro in one 14 byte burst; the
    /// temperature word is dropped.
    pub fn motion(&mut self) -> Result<MotionSample, Error> {
        let mut buf = [0u8; 14];
        self.i2c
            .write_read(self.address, &[reg::ACCEL_XOUT_H], &mut buf)?;

        let word = |i: usize| i16::from_be_bytes([buf[i], buf[i + 1]]);

        Ok(MotionSample {
            ax: word(0),
            ay: word(2),
            az: word(4),
            gx: word(8),
            gy: word(10),
            gz: word(12),
        })
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error> {
        self.i2c.write(self.address, &[register, value])?;
        Ok(())
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        let mut value = [0u8];
        self.i2c.write_read(self.address, &[register], &mut value)?;
        Ok(value[0])
    }
}

impl<I2C: I2c> MotionSensor for Mpu6050<I2C> {
    type Error = Error;

    fn bring_up(&mut self) -> Result<(), Self::Error> {
        self.init()
    }

    fn self_test(&mut self) -> bool {
        match self.test_connection() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("MPU6050 probe: {}", e);
                false
            }
        }
    }

    fn read_motion(&mut self) -> Result<MotionSample, Self::Error> {
        self.motion()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};
    use std::vec::Vec;

    struct Bus {
        registers: [u8; 128],
        writes: Vec<(u8, u8)>,
        present: bool,
    }

    impl Bus {
        fn new() -> Self {
            let mut registers = [0u8; 128];
            registers[reg::WHO_AM_I as usize] = 0x68;
            Self {
                registers,
                writes: Vec::new(),
                present: true,
            }
        }
    }

    impl ErrorType for Bus {
        type Error = ErrorKind;
    }

    impl I2c for Bus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if !self.present || address != DEFAULT_ADDRESS {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            let mut pointer = 0usize;
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(bytes) => {
                        pointer = bytes[0] as usize;
                        for &b in bytes[1..].iter() {
                            self.registers[pointer] = b;
                            self.writes.push((pointer as u8, b));
                            pointer += 1;
                        }
                    }
                    Operation::Read(buf) => {
                        for b in buf.iter_mut() {
                            *b = self.registers[pointer];
                            pointer += 1;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn init_applies_default_config() {
        let mut mpu = Mpu6050::new(Bus::new(), DEFAULT_ADDRESS, Config::default());
        mpu.init().unwrap();
        let bus = mpu.release();
        assert_eq!(
            bus.writes,
            [
                (reg::PWR_MGMT_1, 0x01),
                (reg::GYRO_CONFIG, 0x00),
                (reg::ACCEL_CONFIG, 0x00),
                (reg::CONFIG, 0x06),
            ]
        );
    }

    #[test]
    fn ranges_are_shifted_into_place() {
        let config = Config {
            dlpf: Dlpf::Hz44,
            accel_range: AccelRange::G8,
            gyro_range: GyroRange::Dps2000,
        };
        let mut mpu = Mpu6050::new(Bus::new(), DEFAULT_ADDRESS, config);
        mpu.init().unwrap();
        let bus = mpu.release();
        assert_eq!(bus.registers[reg::GYRO_CONFIG as usize], 0x18);
        assert_eq!(bus.registers[reg::ACCEL_CONFIG as usize], 0x10);
        assert_eq!(bus.registers[reg::CONFIG as usize], 0x03);
    }

    #[test]
    fn connection_checks_identity() {
        let mut mpu = Mpu6050::new(Bus::new(), DEFAULT_ADDRESS, Config::default());
        assert_eq!(mpu.device_id(), Ok(DEVICE_ID));
        assert!(mpu.self_test());

        let mut bus = Bus::new();
        bus.registers[reg::WHO_AM_I as usize] = 0x70;
        let mut mpu = Mpu6050::new(bus, DEFAULT_ADDRESS, Config::default());
        assert_eq!(mpu.test_connection(), Err(Error::UnexpectedId(0x38)));
        assert!(!mpu.self_test());
    }

    #[test]
    fn missing_device_is_a_bus_error() {
        let mut bus = Bus::new();
        bus.present = false;
        let mut mpu = Mpu6050::new(bus, DEFAULT_ADDRESS, Config::default());
        assert_eq!(
            mpu.init(),
            Err(Error::I2c(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)))
        );
        assert!(!mpu.self_test());
    }

    #[test]
    fn burst_is_big_endian_without_temperature() {
        let mut bus = Bus::new();
        let burst: [u8; 14] = [
            0x00, 0x10, // ax
            0xFF, 0x38, // ay
            0x40, 0x00, // az
            0x12, 0x34, // temperature
            0x80, 0x00, // gx
            0x7F, 0xFF, // gy
            0x00, 0x00, // gz
        ];
        let start = reg::ACCEL_XOUT_H as usize;
        bus.registers[start..start + 14].copy_from_slice(&burst);

        let mut mpu = Mpu6050::new(bus, DEFAULT_ADDRESS, Config::default());
        assert_eq!(
            mpu.read_motion(),
            Ok(MotionSample {
                ax: 16,
                ay: -200,
                az: 16384,
                gx: i16::MIN,
                gy: i16::MAX,
                gz: 0,
            })
        );
    }
}
