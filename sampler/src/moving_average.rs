/*
    Moving Average Filter
*/

/// Fixed-window mean over the last `N` samples.
///
/// The window starts zero-filled and the mean is always taken over the full
/// window, so the first `N - 1` outputs are pulled towards zero. The running
/// sum is kept incrementally; no update ever walks the buffer.
#[derive(Clone, Debug)]
pub struct MovingAverage<const N: usize> {
    buffer: [i16; N],
    index: usize,
    sum: i32,
}

impl<const N: usize> MovingAverage<N> {
    // Every slot may hold -32768, the sum has to fit in i32.
    const VALID_WINDOW: () = assert!(N > 0 && N <= (i32::MAX / 32_768) as usize);

    pub const fn new() -> Self {
        let () = Self::VALID_WINDOW;
        Self {
            buffer: [0; N],
            index: 0,
            sum: 0,
        }
    }

    /// Replace the oldest sample with `value` and return the new mean,
    /// truncated toward zero.
    pub fn update(&mut self, value: i16) -> i32 {
        self.sum -= self.buffer[self.index] as i32;
        self.buffer[self.index] = value;
        self.sum += value as i32;

        self.index = (self.index + 1) % N;

        self.average()
    }

    pub fn average(&self) -> i32 {
        self.sum / N as i32
    }

    pub fn sum(&self) -> i32 {
        self.sum
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub fn reset(&mut self) {
        self.buffer = [0; N];
        self.index = 0;
        self.sum = 0;
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}
