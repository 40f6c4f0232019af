/*
    Serial Status Lines

    Status: <axis>:<avg>,button1:<0|1>,...,buttonN:<0|1>\n
    Boot:   one human readable line after the sensor probe
*/

use crate::buttons::{ButtonSnapshot, MAX_BUTTONS};
use crate::motion::Axis;
use core::fmt::{self, Write};
use heapless::String;

// "ay:-32768" + ",button8:1" per line + newline
pub const LINE_CAPACITY: usize = 9 + 10 * MAX_BUTTONS + 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    axis: Axis,
    average: i32,
    buttons: ButtonSnapshot,
}

impl StatusLine {
    /// Averages of `i16` samples stay within `i16`. Anything wider is
    /// clamped so the line always fits `LINE_CAPACITY`.
    pub fn new(axis: Axis, average: i32, buttons: ButtonSnapshot) -> Self {
        Self {
            axis,
            average: average.clamp(i16::MIN as i32, i16::MAX as i32),
            buttons,
        }
    }

    pub fn average(&self) -> i32 {
        self.average
    }

    pub fn buttons(&self) -> &ButtonSnapshot {
        &self.buttons
    }

    /// Newline terminated wire form.
    pub fn write_line<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self)
    }

    pub fn to_line(&self) -> String<LINE_CAPACITY> {
        let mut line = String::new();
        // Sized for the widest average and MAX_BUTTONS fields
        let _ = self.write_line(&mut line);
        line
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.axis.label(), self.average)?;
        for (i, pressed) in self.buttons.iter().enumerate() {
            write!(f, ",button{}:{}", i + 1, pressed as u8)?;
        }
        Ok(())
    }
}

/// Outcome of the one-time sensor probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootReport {
    SensorReady,
    SensorUnreachable,
}

impl BootReport {
    pub fn from_self_test(passed: bool) -> Self {
        if passed {
            Self::SensorReady
        } else {
            Self::SensorUnreachable
        }
    }

    pub fn is_ready(&self) -> bool {
        *self == Self::SensorReady
    }

    pub fn write_line<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self)
    }

    pub fn to_line(&self) -> String<LINE_CAPACITY> {
        let mut line = String::new();
        let _ = self.write_line(&mut line);
        line
    }
}

impl fmt::Display for BootReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorReady => f.write_str("MPU6050 connection successful"),
            Self::SensorUnreachable => f.write_str("MPU6050 connection failed"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_button_line() {
        let line = StatusLine::new(
            Axis::AccelY,
            123,
            ButtonSnapshot::from_slice(&[true, false]),
        );
        assert_eq!(line.to_line().as_str(), "ay:123,button1:1,button2:0\n");
    }

    #[test]
    fn four_button_line_with_negative_average() {
        let line = StatusLine::new(
            Axis::AccelY,
            -1640,
            ButtonSnapshot::from_slice(&[false, false, true, true]),
        );
        assert_eq!(
            line.to_line().as_str(),
            "ay:-1640,button1:0,button2:0,button3:1,button4:1\n"
        );
    }

    #[test]
    fn axis_label_leads() {
        let line = StatusLine::new(Axis::GyroZ, 0, ButtonSnapshot::default());
        assert_eq!(line.to_line().as_str(), "gz:0\n");
    }

    #[test]
    fn widest_line_fits() {
        let line = StatusLine::new(
            Axis::AccelY,
            i16::MIN as i32,
            ButtonSnapshot::from_slice(&[true; MAX_BUTTONS]),
        );
        let text = line.to_line();
        assert_eq!(text.len(), LINE_CAPACITY);
        assert!(text.ends_with(",button8:1\n"));
    }

    #[test]
    fn out_of_range_average_is_clamped() {
        let low = StatusLine::new(
            Axis::AccelY,
            i32::MIN,
            ButtonSnapshot::from_slice(&[true; MAX_BUTTONS]),
        );
        assert_eq!(low.average(), -32768);
        let text = low.to_line();
        assert!(text.starts_with("ay:-32768,button1:1"));
        assert!(text.ends_with(",button8:1\n"));

        let high = StatusLine::new(Axis::GyroY, 1_000_000, ButtonSnapshot::default());
        assert_eq!(high.to_line().as_str(), "gy:32767\n");
    }

    #[test]
    fn boot_lines() {
        assert_eq!(
            BootReport::from_self_test(true).to_line().as_str(),
            "MPU6050 connection successful\n"
        );
        assert_eq!(
            BootReport::from_self_test(false).to_line().as_str(),
            "MPU6050 connection failed\n"
        );
        assert!(!BootReport::SensorUnreachable.is_ready());
    }
}
