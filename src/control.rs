//! the control block, aggregate root the transport layer talks to

use crate::{
    counters::{Counter, CounterBank},
    diagnostics::DiagnosticRegister,
    error::DeviceError,
    events::DeviceEvent,
    identity::DeviceIdentity,
    statistics::PlusStatistics,
};
use core::fmt;
use core::str::FromStr;
use std::sync::{Arc, Mutex};

/// serial transmission modes a device can be switched between.
/// The set is closed; parsing anything else fails and the caller keeps the
/// previously installed mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Ascii,
    Rtu,
    Binary,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ascii => "ASCII",
            Mode::Rtu => "RTU",
            Mode::Binary => "BIN",
        }
    }
}

impl FromStr for Mode {
    type Err = DeviceError;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ASCII" => Ok(Mode::Ascii),
            "RTU" => Ok(Mode::Rtu),
            "BIN" => Ok(Mode::Binary),
            other => Err(DeviceError::UnknownMode(other.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// handle to one control block shared between concurrent transport workers.
/// All mutation goes through the one lock; the block itself is purely
/// synchronous in-memory state, so every critical section is short.
pub type SharedControlBlock = Arc<Mutex<ControlBlock>>;

/// depth of the communication event log mandated by the protocol
pub const EVENT_LOG_DEPTH: usize = 64;

/// default frame delimiter of the ASCII transmission mode
pub const DEFAULT_DELIMITER: char = '\r';

/**
    aggregate owning all the management and diagnostics state of one device:
    counter bank, diagnostic register, event log, Modbus Plus statistics, the
    installed identity, the transmission mode, the listen-only flag and the
    ASCII frame delimiter.

    The application constructs exactly one per device at startup and hands it
    (or a [SharedControlBlock]) to the transport layer; there is no hidden
    process-wide instance, and two constructions yield independent state.
*/
#[derive(Clone, Debug)]
pub struct ControlBlock {
    /// the nine diagnostic counters, updated on every frame event
    pub counters: CounterBank,
    /// the Modbus Plus statistics block
    pub plus: PlusStatistics,
    diagnostic: DiagnosticRegister,
    events: Vec<DeviceEvent>,
    identity: DeviceIdentity,
    mode: Mode,
    listen_only: bool,
    delimiter: char,
}

impl ControlBlock {
    pub fn new() -> Self {
        Self {
            counters: CounterBank::new(),
            plus: PlusStatistics::new(),
            diagnostic: DiagnosticRegister::new(),
            events: Vec::new(),
            identity: DeviceIdentity::default(),
            mode: Mode::default(),
            listen_only: false,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// the well-defined creation point for a block shared between transport workers
    pub fn shared() -> SharedControlBlock {
        Arc::new(Mutex::new(Self::new()))
    }

    /**
        reset the counter bank and the diagnostic register.

        This is the narrow reset of the diagnostics layer (clear-counters
        sub-function); identity, event log and statistics keep their state and
        are cleared through their own operations.
    */
    pub fn reset(&mut self) {
        self.counters.reset();
        self.diagnostic.reset();
    }

    // transmission state

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("switching transmission mode to {}", mode);
        self.mode = mode;
    }

    pub fn listen_only(&self) -> bool {
        self.listen_only
    }

    pub fn set_listen_only(&mut self, listen_only: bool) {
        self.listen_only = listen_only;
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// install a new ASCII frame delimiter
    pub fn set_delimiter(&mut self, delimiter: char) -> Result<(), DeviceError> {
        if !delimiter.is_ascii() {
            return Err(DeviceError::DelimiterNotAscii(delimiter));
        }
        self.delimiter = delimiter;
        Ok(())
    }

    /// install the delimiter from its numeric code point, normalized to the
    /// one-character form
    pub fn set_delimiter_code(&mut self, code: u8) -> Result<(), DeviceError> {
        self.set_delimiter(code as char)
    }

    // diagnostic register

    /// flag at `index`, `None` when no such flag exists
    pub fn get_diagnostic(&self, index: usize) -> Option<bool> {
        self.diagnostic.get(index)
    }

    /// bulk-set diagnostic flags, silently skipping indices outside the register
    pub fn set_diagnostic(&mut self, flags: impl IntoIterator<Item = (usize, bool)>) {
        for (index, value) in flags {
            self.diagnostic.set(index, value);
        }
    }

    /// the whole 16-flag register in index order
    pub fn diagnostic_register(&self) -> [bool; 16] {
        self.diagnostic.as_array()
    }

    /// the register itself
    pub fn diagnostic(&self) -> &DiagnosticRegister {
        &self.diagnostic
    }

    // event log

    /**
        record a communication event.

        The event counter is bumped for every recorded event and keeps its
        value across [Self::clear_events]. The log keeps the newest
        [EVENT_LOG_DEPTH] events, newest first, so [Self::get_events] returns
        the bytes in the order the protocol mandates.
    */
    pub fn add_event(&mut self, event: DeviceEvent) {
        self.events.insert(0, event);
        self.events.truncate(EVENT_LOG_DEPTH);
        self.counters.increment(Counter::Event);
    }

    /// empty the log; the event counter is untouched
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// read-only snapshot of the log, newest event first
    pub fn events(&self) -> &[DeviceEvent] {
        &self.events
    }

    /// concatenated encodings of every stored event, in log order
    pub fn get_events(&self) -> Vec<u8> {
        self.events.iter().map(DeviceEvent::encode).collect()
    }

    // identity

    /// install (or replace) the device identity served to identification requests
    pub fn update_identity(&mut self, identity: DeviceIdentity) {
        self.identity = identity;
    }

    /// the currently installed identity
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }
}

impl Default for ControlBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ControlBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ModbusControl")
    }
}

/// iterating the block iterates its counter bank
impl<'a> IntoIterator for &'a ControlBlock {
    type Item = (Counter, u16);
    type IntoIter = <&'a CounterBank as IntoIterator>::IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        (&self.counters).into_iter()
    }
}
