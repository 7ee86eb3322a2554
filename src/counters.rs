//! the diagnostic counter bank updated by the transport on every frame event

use bilge::prelude::*;
use core::fmt;

/**
    the nine diagnostic counters a Modbus serial line device maintains.

    The first eight are the standard diagnostic sub-function counters
    (return query data neighbourhood, sub-functions 0x0B..0x12) and contribute
    one bit each to the [CounterBank::summary] byte. [Counter::Event] counts
    communication events and is excluded from the summary.
*/
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Counter {
    /// messages seen on the bus, addressed to this device or not
    BusMessage = 0,
    /// frames with a CRC/LRC failure
    BusCommunicationError = 1,
    /// exception responses returned by this device
    BusExceptionError = 2,
    /// messages addressed to this device
    SlaveMessage = 3,
    /// broadcasts and other messages answered with no response
    SlaveNoResponse = 4,
    /// negative acknowledge exceptions sent
    SlaveNak = 5,
    /// device busy exceptions sent
    SlaveBusy = 6,
    /// characters lost to overrun on the serial line
    BusCharacterOverrun = 7,
    /// communication events recorded in the event log
    Event = 8,
}

impl Counter {
    /// every counter in canonical iteration/wire order
    pub const ALL: [Counter; 9] = [
        Counter::BusMessage,
        Counter::BusCommunicationError,
        Counter::BusExceptionError,
        Counter::SlaveMessage,
        Counter::SlaveNoResponse,
        Counter::SlaveNak,
        Counter::SlaveBusy,
        Counter::BusCharacterOverrun,
        Counter::Event,
    ];

    /// protocol name of the counter
    pub fn name(self) -> &'static str {
        match self {
            Counter::BusMessage => "BusMessage",
            Counter::BusCommunicationError => "BusCommunicationError",
            Counter::BusExceptionError => "BusExceptionError",
            Counter::SlaveMessage => "SlaveMessage",
            Counter::SlaveNoResponse => "SlaveNoResponse",
            Counter::SlaveNak => "SlaveNAK",
            Counter::SlaveBusy => "SlaveBusy",
            Counter::BusCharacterOverrun => "BusCharacterOverrun",
            Counter::Event => "Event",
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/**
    one-byte summary of the eight standard counters, returned by the
    get-communication-event-counter / diagnostic status family of requests.

    Each bit is set iff the matching counter is currently nonzero.
*/
#[bitsize(8)]
#[derive(FromBits, DebugBits, Copy, Clone, Default, Eq, PartialEq)]
pub struct CounterSummary {
    pub bus_message: bool,
    pub bus_communication_error: bool,
    pub bus_exception_error: bool,
    pub slave_message: bool,
    pub slave_no_response: bool,
    pub slave_nak: bool,
    pub slave_busy: bool,
    pub bus_character_overrun: bool,
}

/**
    bank of the nine [Counter] cells, all starting at zero.

    Cells are 16 bit on the wire, so they are `u16` here and wrap modulo
    2^16 on overflow rather than erroring.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CounterBank {
    cells: [u16; 9],
}

impl CounterBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// current value of one counter
    pub fn get(&self, counter: Counter) -> u16 {
        self.cells[counter as usize]
    }

    /// overwrite one counter
    pub fn set(&mut self, counter: Counter, value: u16) {
        self.cells[counter as usize] = value;
    }

    /// bump one counter, wrapping at 0xffff
    pub fn increment(&mut self, counter: Counter) {
        self.add(counter, 1);
    }

    /// bump one counter by an arbitrary amount, wrapping at 0xffff
    pub fn add(&mut self, counter: Counter, amount: u16) {
        let cell = &mut self.cells[counter as usize];
        *cell = cell.wrapping_add(amount);
    }

    /// set every counter back to zero
    pub fn reset(&mut self) {
        log::debug!("resetting diagnostic counters");
        self.cells = [0; 9];
    }

    /// merge a batch of counts into the bank: each supplied value is added to
    /// the counter's current value (wrapping at 0xffff), counters not named
    /// keep their value
    pub fn update(&mut self, values: impl IntoIterator<Item = (Counter, u16)>) {
        for (counter, value) in values {
            self.add(counter, value);
        }
    }

    /**
        summary byte of the eight standard counters, [Counter::Event] excluded.

        `u8::from(bank.summary())` is the exact wire byte, bit 0 for
        [Counter::BusMessage] up to bit 7 for [Counter::BusCharacterOverrun].
    */
    pub fn summary(&self) -> CounterSummary {
        CounterSummary::new(
            self.get(Counter::BusMessage) != 0,
            self.get(Counter::BusCommunicationError) != 0,
            self.get(Counter::BusExceptionError) != 0,
            self.get(Counter::SlaveMessage) != 0,
            self.get(Counter::SlaveNoResponse) != 0,
            self.get(Counter::SlaveNak) != 0,
            self.get(Counter::SlaveBusy) != 0,
            self.get(Counter::BusCharacterOverrun) != 0,
        )
    }

    /// all counters in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Counter, u16)> + '_ {
        Counter::ALL.iter().map(|&counter| (counter, self.get(counter)))
    }
}

impl<'a> IntoIterator for &'a CounterBank {
    type Item = (Counter, u16);
    type IntoIter = core::array::IntoIter<(Counter, u16), 9>;
    fn into_iter(self) -> Self::IntoIter {
        Counter::ALL.map(|counter| (counter, self.get(counter))).into_iter()
    }
}
