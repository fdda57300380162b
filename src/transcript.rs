//! Transcript framing: how labels, length metadata and payloads enter the
//! duplex, and how challenge bytes come back out.
//!
//! Every committed value is bound to a semantic label through a fixed
//! three-call sequence (label, 4-byte little-endian length, payload), so a
//! prover/verifier pair that diverges on any field boundary diverges on
//! every later challenge. The length encoding is a wire rule: it must stay
//! bit-exact for transcripts to remain interoperable.

use tracing::trace;

use crate::duplex::{Duplex, OpFlags};
use crate::errors::TranscriptError;
use crate::strobe::Strobe128;

/// Version tag of the transcript scheme itself, absorbed as the duplex
/// domain separator. Fixed for interoperability; never caller-controlled.
pub const PROTOCOL_LABEL: &[u8] = b"Merlin v1.0";

/// Label under which the caller's instance label is committed at
/// initialization.
const DOMAIN_SEP_LABEL: &[u8] = b"dom-sep";

/// Deterministic, domain-separated Fiat-Shamir transcript.
///
/// Wraps an exclusively owned duplex state; every public operation is a
/// transformation of that state, and two transcripts fed the identical call
/// sequence with identical arguments are in identical states. One transcript
/// serves one prover or verifier run; parallel proofs each get their own.
#[derive(Clone)]
pub struct Transcript<D: Duplex = Strobe128> {
    duplex: D,
}

impl Transcript {
    /// Begins a transcript for the protocol instance identified by `label`,
    /// backed by the production STROBE-128 duplex.
    ///
    /// The label is bound through the same framing as any committed message,
    /// so transcripts for different instances share no exploitable prefix.
    /// Empty labels are accepted.
    pub fn new(label: &[u8]) -> Self {
        Self::with_duplex(label)
    }
}

impl<D: Duplex> Transcript<D> {
    /// Begins a transcript over any duplex implementation.
    ///
    /// Panics if `label` cannot be length-framed (longer than `u32::MAX`
    /// bytes), which is unreachable for any real protocol label.
    pub fn with_duplex(label: &[u8]) -> Self {
        let mut transcript = Transcript {
            duplex: D::init(PROTOCOL_LABEL),
        };
        transcript
            .append_message(DOMAIN_SEP_LABEL, label)
            .expect("instance label exceeds the length frame");
        trace!(label_len = label.len(), "transcript initialized");
        transcript
    }

    /// Absorbs structural metadata: a label, or a continuation of one.
    fn meta_absorb(&mut self, data: &[u8], more: bool) {
        self.duplex.operate(OpFlags::meta(more), data);
    }

    /// Absorbs application payload bytes, starting a new logical field.
    fn absorb(&mut self, data: &[u8]) {
        self.duplex.operate(OpFlags::data(), data);
    }

    /// Commits a labeled message.
    ///
    /// The three duplex calls are order-sensitive and not reorderable: the
    /// label declares which field is being committed, the 4-byte
    /// little-endian length is chained onto the same meta field so the
    /// label/length boundary is unambiguous, and the payload then starts a
    /// fresh data field. Messages longer than `u32::MAX` bytes cannot be
    /// framed and are rejected before any state is touched.
    pub fn append_message(&mut self, label: &[u8], message: &[u8]) -> Result<(), TranscriptError> {
        let message_len = u32::try_from(message.len()).map_err(|_| {
            TranscriptError::MessageTooLong {
                len: message.len(),
            }
        })?;
        self.meta_absorb(label, false);
        self.meta_absorb(&message_len.to_le_bytes(), true);
        self.absorb(message);
        Ok(())
    }

    /// Commits a labeled `u64` as its 8-byte little-endian encoding.
    pub fn append_u64(&mut self, label: &[u8], x: u64) {
        self.append_message(label, &x.to_le_bytes())
            .expect("8-byte message always fits the length frame");
    }

    /// Binds secret or witness material into the transcript.
    ///
    /// Key input enters the keyed side of the duplex state: every later
    /// challenge depends on it, and an observer of the public transcript
    /// alone cannot derive those challenges.
    pub fn absorb_key(&mut self, key: &[u8]) {
        self.duplex.operate(OpFlags::key_input(), key);
    }

    /// Extracts `num_bytes` of challenge material.
    ///
    /// The output is an owned buffer of exactly the requested length and is
    /// a deterministic function of every prior operation. Extraction also
    /// ratchets the duplex forward: the same challenge is never producible
    /// twice, and prior state cannot be recovered from the output.
    ///
    /// Challenges are deliberately unlabeled; a consumer that needs a
    /// labeled challenge commits a message first.
    pub fn challenge_bytes(&mut self, num_bytes: usize) -> Result<Vec<u8>, TranscriptError> {
        if num_bytes == 0 {
            return Err(TranscriptError::EmptyChallenge);
        }
        let mut out = vec![0u8; num_bytes];
        self.duplex.operate_output(OpFlags::output(), &mut out);
        trace!(num_bytes, "challenge extracted");
        Ok(out)
    }
}
