/*!
    In-process device-management and diagnostics model for a Modbus-family server.

    This crate is the state a serial or TCP server consults to answer device
    identification, diagnostic and statistics queries from a remote master, plus
    the bookkeeping the transport layer feeds as traffic flows: traffic counters,
    the 16-bit diagnostic register, the communication event log, the Modbus Plus
    statistics block and the connection allow-list.

    It performs no I/O and no PDU framing. The transport/dispatch layer owns a
    [ControlBlock] (or a [SharedControlBlock] when serving several peers), calls
    its update operations on every frame event, and embeds the returned byte
    sequences in the outer protocol data unit itself.
*/

mod access;
mod control;
mod counters;
mod diagnostics;
mod error;
mod events;
mod identity;
mod statistics;

pub use crate::access::AccessControl;
pub use crate::control::{ControlBlock, Mode, SharedControlBlock, DEFAULT_DELIMITER, EVENT_LOG_DEPTH};
pub use crate::counters::{Counter, CounterBank, CounterSummary};
pub use crate::diagnostics::DiagnosticRegister;
pub use crate::error::DeviceError;
pub use crate::events::{DeviceEvent, ReceiveConditions, SendConditions};
pub use crate::identity::{device_information, object_id, DeviceIdentity, DeviceInfoCategory};
pub use crate::statistics::{PlusStatistics, StatField, FIELDS, REGISTER_COUNT};
