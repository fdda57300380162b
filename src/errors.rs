use thiserror::Error;

/// Caller contract violations surfaced by the transcript API.
///
/// Every transcript operation is total over well-formed inputs; these
/// variants only cover requests the framing cannot represent. Truncating or
/// wrapping instead would let two distinct messages frame identically.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("message length {len} exceeds the 4-byte length frame")]
    MessageTooLong { len: usize },
    #[error("challenge must request at least one byte")]
    EmptyChallenge,
}
