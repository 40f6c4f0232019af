/*
    Motion Sample and Sensor Interface
*/

/// One burst of raw readings, in sensor units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionSample {
    pub ax: i16,
    pub ay: i16,
    pub az: i16,
    pub gx: i16,
    pub gy: i16,
    pub gz: i16,
}

impl MotionSample {
    pub fn axis(&self, axis: Axis) -> i16 {
        match axis {
            Axis::AccelX => self.ax,
            Axis::AccelY => self.ay,
            Axis::AccelZ => self.az,
            Axis::GyroX => self.gx,
            Axis::GyroY => self.gy,
            Axis::GyroZ => self.gz,
        }
    }
}

/// The single channel that feeds the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    AccelX,
    #[default]
    AccelY,
    AccelZ,
    GyroX,
    GyroY,
    GyroZ,
}

impl Axis {
    /// Key of the first field in the status line.
    pub const fn label(&self) -> &'static str {
        match self {
            Axis::AccelX => "ax",
            Axis::AccelY => "ay",
            Axis::AccelZ => "az",
            Axis::GyroX => "gx",
            Axis::GyroY => "gy",
            Axis::GyroZ => "gz",
        }
    }
}

/// A six-axis inertial sensor as seen by the sampler.
pub trait MotionSensor {
    type Error: core::fmt::Debug;

    /// Configure the device for streaming. Called once before the self test.
    fn bring_up(&mut self) -> Result<(), Self::Error>;

    /// One-time connectivity probe.
    fn self_test(&mut self) -> bool;

    /// Burst read of all six channels.
    fn read_motion(&mut self) -> Result<MotionSample, Self::Error>;
}

#[cfg(test)]
mod test {
    use super::{Axis, MotionSample};

    #[test]
    fn picks_designated_axis() {
        let sample = MotionSample {
            ax: 1,
            ay: 2,
            az: 3,
            gx: 4,
            gy: 5,
            gz: 6,
        };
        assert_eq!(sample.axis(Axis::AccelY), 2);
        assert_eq!(sample.axis(Axis::GyroZ), 6);
        assert_eq!(Axis::default(), Axis::AccelY);
        assert_eq!(Axis::default().label(), "ay");
    }
}
