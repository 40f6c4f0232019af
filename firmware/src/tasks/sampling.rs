/*
* Sampling Loop
*  - one sense, filter, report cycle per tick
*  - the serial queue is never awaited, a full queue drops the line
*/

// Resources
use crate::resources::FILTER_WINDOW;
use crate::resources::SAMPLE_PERIOD_MS;
use crate::resources::SERIAL_CHANNEL_SIZE;
use crate::resources::SerialLine;

// Library
use sampler::Sampler;
use sampler::mpu6050::Mpu6050;
use embassy_rp::gpio::Input;
use embassy_rp::i2c::Blocking;
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::I2C0;
use embassy_sync::channel::Sender;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Ticker;
use embassy_time::Duration;

/* --------------------------- Code -------------------------- */
pub type ImuBus = I2c<'static, I2C0, Blocking>;
pub type PadSampler = Sampler<Mpu6050<ImuBus>, Input<'static>, FILTER_WINDOW>;
pub type SerialSender = Sender<'static, CriticalSectionRawMutex, SerialLine, SERIAL_CHANNEL_SIZE>;

pub async fn run_sampler(mut sampler: PadSampler, lines: SerialSender) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));
    let mut dropped: u32 = 0;

    loop {
        let status = sampler.step();

        if lines.try_send(status.to_line()).is_err() {
            dropped = dropped.wrapping_add(1);
            // about once every 10 s while nobody listens
            if dropped % 500 == 1 {
                log::debug!("serial queue full, {} lines dropped", dropped);
            }
        }

        ticker.next().await;
    }
}
