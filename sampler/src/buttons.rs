/*
    Button Bank

    Lines are pulled high and a press shorts them to ground, so a low
    level reads as pressed.
*/

use embedded_hal::digital::InputPin;
use heapless::Vec;

pub const MAX_BUTTONS: usize = 8;

/// Logical button states of one cycle, in line order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonSnapshot {
    pressed: Vec<bool, MAX_BUTTONS>,
}

impl ButtonSnapshot {
    /// Anything past `MAX_BUTTONS` is dropped.
    pub fn from_slice(pressed: &[bool]) -> Self {
        let mut snapshot = Self::default();
        for &state in pressed.iter().take(MAX_BUTTONS) {
            let _ = snapshot.pressed.push(state);
        }
        snapshot
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.pressed.iter().copied()
    }
}

pub struct ButtonBank<P> {
    lines: Vec<P, MAX_BUTTONS>,
}

impl<P: InputPin> ButtonBank<P> {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line, handing it back when the bank is full.
    pub fn add(&mut self, line: P) -> Result<(), P> {
        self.lines.push(line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sample every line once. A failed read counts as released.
    pub fn read(&mut self) -> ButtonSnapshot {
        let mut snapshot = ButtonSnapshot::default();

        for (i, line) in self.lines.iter_mut().enumerate() {
            let pressed = match line.is_low() {
                Ok(low) => low,
                Err(e) => {
                    log::debug!("button{} read failed: {:?}", i + 1, e);
                    false
                }
            };
            // Same capacity as `lines`
            let _ = snapshot.pressed.push(pressed);
        }

        snapshot
    }
}

impl<P: InputPin> Default for ButtonBank<P> {
    fn default() -> Self {
        Self::new()
    }
}
