//! definition of the crate error type

/**
    error reported to the local dispatch layer for conditions it caused itself.

    Anything a misbehaving remote master can trigger is deliberately *not* in
    here: out-of-range diagnostic indices, reserved identity IDs and the like
    are answered with a sentinel (`None`, empty string) or ignored, so that
    bad wire input can never crash the device. Only the trusted caller sees
    hard failures, and only for values it builds itself.
*/
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DeviceError {
    /// a transmission mode name outside the supported set ("ASCII", "RTU", "BIN")
    #[error("unsupported transmission mode: {0:?}")]
    UnknownMode(String),

    /// the frame delimiter must stay a single serial byte
    #[error("delimiter is not an ascii character: {0:?}")]
    DelimiterNotAscii(char),
}
