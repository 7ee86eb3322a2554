//! the 16-flag diagnostic register served by the return-diagnostic-register sub-function

/**
    ordered set of 16 boolean diagnostic flags, addressed by index 0..=15.

    Flag reads with an index outside the register answer `None` instead of
    failing: the index usually comes straight from a remote master's request
    and must not be able to take the device down. Writes out of range are
    dropped the same way.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticRegister {
    flags: [bool; 16],
}

impl DiagnosticRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// flag at `index`, or `None` when no such flag exists
    pub fn get(&self, index: usize) -> Option<bool> {
        self.flags.get(index).copied()
    }

    /// set the flag at `index`, ignoring indices outside the register
    pub fn set(&mut self, index: usize, value: bool) {
        match self.flags.get_mut(index) {
            Some(flag) => *flag = value,
            None => log::debug!("ignoring write to diagnostic flag {}", index),
        }
    }

    /// every flag back to false
    pub fn reset(&mut self) {
        self.flags = [false; 16];
    }

    /// the whole register in index order
    pub fn as_array(&self) -> [bool; 16] {
        self.flags
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.flags.iter().copied()
    }
}
