//! communication event records and their one-byte wire encodings

use bilge::prelude::*;

/**
    condition flags stored with a remote-receive event.

    The encoded byte always carries bit 6 (0x40) as the receive-event marker;
    each flag true at the time the frame was received ORs its bit in.
*/
#[bitsize(8)]
#[derive(FromBits, DebugBits, Copy, Clone, Default, Eq, PartialEq)]
pub struct ReceiveConditions {
    reserved: u1,
    /// the received frame had a parity, CRC or LRC error
    pub communication_error: bool,
    reserved: u1,
    /// characters were lost to overrun while receiving
    pub character_overrun: bool,
    /// the device was in listen-only mode
    pub listen_only: bool,
    /// the frame was a broadcast
    pub broadcast: bool,
    reserved: u2,
}

/**
    condition flags stored with a remote-send event.

    The encoded byte always carries bit 5 (0x20) as the send-event marker.
*/
#[bitsize(8)]
#[derive(FromBits, DebugBits, Copy, Clone, Default, Eq, PartialEq)]
pub struct SendConditions {
    /// a read exception response was returned (exception codes 1-3)
    pub read_exception: bool,
    /// a slave abort exception response was returned (exception code 4)
    pub abort_exception: bool,
    /// a slave busy exception response was returned (exception codes 5-6)
    pub busy_exception: bool,
    /// a negative acknowledge exception response was returned (exception code 7)
    pub nak_exception: bool,
    /// a write timeout occurred while sending
    pub write_timeout: bool,
    reserved: u3,
}

/**
    one record of the communication event log.

    The set of variants is closed and each encodes to exactly one byte, so the
    get-communication-event-log response body is the plain concatenation of
    the stored encodings.
*/
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DeviceEvent {
    /// communication restart; also the neutral base event, encoding 0x00
    Restart,
    /// the device entered listen-only mode, encoding 0x04
    EnteredListenMode,
    /// a frame was received from the remote master
    RemoteReceive(ReceiveConditions),
    /// a response was sent (or suppressed) toward the remote master
    RemoteSend(SendConditions),
}

/// receive-event marker, bit 6
const RECEIVE_MARKER: u8 = 0x40;
/// send-event marker, bit 5
const SEND_MARKER: u8 = 0x20;

impl DeviceEvent {
    /// a receive event with no condition flag set, encoding exactly 0x40
    pub fn remote_receive() -> Self {
        Self::RemoteReceive(ReceiveConditions::default())
    }

    /// a send event with no condition flag set, encoding exactly 0x20
    pub fn remote_send() -> Self {
        Self::RemoteSend(SendConditions::default())
    }

    /// fixed-length wire encoding of the record
    pub fn encode(&self) -> u8 {
        match self {
            Self::Restart => 0x00,
            Self::EnteredListenMode => 0x04,
            Self::RemoteReceive(conditions) => RECEIVE_MARKER | u8::from(*conditions),
            Self::RemoteSend(conditions) => SEND_MARKER | u8::from(*conditions),
        }
    }
}

impl Default for DeviceEvent {
    fn default() -> Self {
        Self::Restart
    }
}
