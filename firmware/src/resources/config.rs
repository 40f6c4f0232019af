/*
*  Default Firmware Config
*
*  MPU-6050 on I2C0, AD0 low
*  - Accelerometer +-2g, Gyro +-250 dps, DLPF 5Hz
*  - Y acceleration averaged over the last 10 samples
*  - One status line every 20 ms
*/

use super::*;

/* --------------------------- Sampler Config -------------------------- */
pub const FILTER_WINDOW: usize = 10;
pub const SAMPLE_PERIOD_MS: u64 = 20;
pub const SAMPLER_CONFIG: SamplerConfig = SamplerConfig {
    axis: Axis::AccelY,
    button_count: 4, // 2, 3 or 4 depending on the pad
};

/* --------------------------- IMU Config -------------------------- */
pub const IMU_ADDRESS: u8 = mpu6050::DEFAULT_ADDRESS;
pub const IMU_I2C_FREQUENCY: u32 = 400_000;
pub const IMU_CONFIG: mpu6050::Config = mpu6050::Config {
    dlpf: Dlpf::Hz5,
    accel_range: AccelRange::G2,
    gyro_range: GyroRange::Dps250,
};

/* --------------------------- Logging -------------------------- */
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/* --------------------------- USB Communication-------------------------- */
pub const USB_VID: u16 = 0xc0de;
pub const USB_PID: u16 = 0xcafe;
pub const USB_PACKET_SIZE: u16 = 64;
pub const SERIAL_CHANNEL_SIZE: usize = 8;

pub type SerialLine = String<LINE_CAPACITY>;
pub type SerialChannel = Channel<CriticalSectionRawMutex, SerialLine, SERIAL_CHANNEL_SIZE>;

/* --------------------------- Communication Channels-------------------------- */
pub static SERIAL_LINES: StaticCell<SerialChannel> = StaticCell::new();

/* --------------------------- USB Builder-------------------------- */
pub static USB_STATE: StaticCell<State> = StaticCell::new();
pub static CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
pub static BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
pub static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
