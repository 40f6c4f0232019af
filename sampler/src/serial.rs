/*
    Serial Packets

    Bulk endpoints end a transfer on a short packet, so a line whose length
    is a multiple of the packet size is followed by an empty one.

    Lines queued while no host listens are out of date once one connects.
    `discard_backlog` drops them so the host starts on the live stream.
*/

/// Pull from `try_receive` until it reports empty, returning the number of
/// discarded items.
pub fn discard_backlog<T, E>(mut try_receive: impl FnMut() -> Result<T, E>) -> usize {
    let mut discarded = 0;
    while try_receive().is_ok() {
        discarded += 1;
    }
    discarded
}

pub struct Packets<'a> {
    bytes: &'a [u8],
    max_packet_size: usize,
    done: bool,
}

impl<'a> Packets<'a> {
    pub fn new(bytes: &'a [u8], max_packet_size: usize) -> Self {
        Self {
            bytes,
            max_packet_size: max_packet_size.max(1),
            done: false,
        }
    }
}

impl<'a> Iterator for Packets<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let n = self.bytes.len().min(self.max_packet_size);
        let (packet, rest) = self.bytes.split_at(n);
        self.bytes = rest;

        if n < self.max_packet_size {
            self.done = true;
        }

        Some(packet)
    }
}
