/*
    Sampler

    Init and self test happen in `start`, so a `Sampler` only ever exists in
    the running state. `step` is one sense-filter-report cycle without the
    wait; pacing belongs to the caller.
*/

use crate::buttons::ButtonBank;
use crate::motion::{Axis, MotionSample, MotionSensor};
use crate::moving_average::MovingAverage;
use crate::status::{BootReport, StatusLine};
use embedded_hal::digital::InputPin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    pub axis: Axis,
    /// Buttons wired on the pad, 2 to 4 on the boards built so far.
    pub button_count: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            axis: Axis::AccelY,
            button_count: 4,
        }
    }
}

pub struct Sampler<S, P, const N: usize> {
    sensor: S,
    buttons: ButtonBank<P>,
    filter: MovingAverage<N>,
    config: SamplerConfig,
    last_sample: MotionSample,
    cycles: u32,
}

impl<S: MotionSensor, P: InputPin, const N: usize> Sampler<S, P, N> {
    /// Bring the sensor up, probe it once and hand back the probe result
    /// together with a running sampler. Neither step can stop the start.
    pub fn start(
        mut sensor: S,
        buttons: ButtonBank<P>,
        config: SamplerConfig,
    ) -> (Self, BootReport) {
        if buttons.len() != config.button_count {
            log::warn!(
                "configured for {} buttons, bank holds {}",
                config.button_count,
                buttons.len()
            );
        }

        if let Err(e) = sensor.bring_up() {
            log::warn!("sensor bring-up failed: {:?}", e);
        }

        let report = BootReport::from_self_test(sensor.self_test());
        log::info!(
            "{}, streaming {} with {} buttons, window {}",
            report,
            config.axis.label(),
            buttons.len(),
            N
        );

        let sampler = Self {
            sensor,
            buttons,
            filter: MovingAverage::new(),
            config,
            last_sample: MotionSample::default(),
            cycles: 0,
        };

        (sampler, report)
    }

    /// Read motion and buttons, feed the filter and build the status line.
    /// A failed motion read feeds the previous sample again.
    pub fn step(&mut self) -> StatusLine {
        match self.sensor.read_motion() {
            Ok(sample) => self.last_sample = sample,
            Err(e) => log::debug!("motion read failed, reusing last sample: {:?}", e),
        }

        let buttons = self.buttons.read();
        let average = self.filter.update(self.last_sample.axis(self.config.axis));
        self.cycles = self.cycles.wrapping_add(1);

        StatusLine::new(self.config.axis, average, buttons)
    }

    pub fn average(&self) -> i32 {
        self.filter.average()
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn last_sample(&self) -> MotionSample {
        self.last_sample
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }
}
