/* 
* Resources Hub
*/

/* --------------------------- Library -------------------------- */
use defmt_rtt as _;
use panic_probe as _;
use assign_resources::assign_resources;
use static_cell::StaticCell;
use heapless::String;
use log::LevelFilter;

use embassy_rp::Peri;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals;
use embassy_rp::usb::InterruptHandler as UsbInterruptHandler;
use embassy_sync::channel::Channel;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_usb::class::cdc_acm::State;

use sampler::Axis;
use sampler::SamplerConfig;
use sampler::LINE_CAPACITY;
use sampler::mpu6050;
use sampler::mpu6050::Dlpf;
use sampler::mpu6050::AccelRange;
use sampler::mpu6050::GyroRange;

/* --------------------------- Declare Modules -------------------------- */
#[macro_use]
pub mod gpio_list;
pub mod config;
pub mod log_bridge;

pub use gpio_list::*;
pub use config::*;
