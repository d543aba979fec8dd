use heapless::{String, Vec};

pub const MAX_LINES: usize = 8;

// N digits, N-1 commas, one newline
pub const RECORD_BUFFER_SIZE: usize = MAX_LINES * 2;

/// One status record: the output bits of every line for one cycle, in
/// configured line order. Built fresh each cycle, encoded, then dropped.
#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusRecord {
    bits: Vec<bool, MAX_LINES>,
}

impl StatusRecord {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn push(&mut self, bit: bool) -> Result<(), ()> {
        self.bits.push(bit).map_err(|_| ())
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn encode(&self) -> String<RECORD_BUFFER_SIZE> {
        let mut out = String::new();
        for (index, bit) in self.bits.iter().enumerate() {
            if index > 0 {
                let _ = out.push(',');
            }
            let _ = out.push(if *bit { '1' } else { '0' });
        }
        let _ = out.push('\n');
        out
    }
}
