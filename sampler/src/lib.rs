#![cfg_attr(not(test), no_std)]

pub mod buttons;
pub mod motion;
pub mod moving_average;
pub mod mpu6050;
pub mod sampler;
pub mod serial;
pub mod status;

pub use buttons::*;
pub use motion::*;
pub use moving_average::*;
pub use sampler::*;
pub use status::*;
