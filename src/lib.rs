//! Domain-separated Fiat-Shamir transcripts over a STROBE-128 duplex.
//!
//! A [`Transcript`] keeps a running, deterministic record of the public
//! values exchanged during an interactive proof. Prover and verifier each
//! drive their own transcript through the same sequence of operations and
//! independently derive identical pseudorandom challenges; any divergence in
//! labels, lengths or ordering makes every later challenge differ.
//!
//! Committed values are framed, not concatenated: each message enters the
//! duplex as label, 4-byte little-endian length, then payload, so no two
//! distinct protocol messages can be confused or substituted. Secret
//! witness material can be bound in with [`Transcript::absorb_key`],
//! making challenges unpredictable to observers of the public record.
//!
//! ```
//! use duplex_transcript::Transcript;
//!
//! let mut prover = Transcript::new(b"example protocol");
//! prover.append_message(b"commitment", b"...32 bytes of commitment...").unwrap();
//! let challenge = prover.challenge_bytes(32).unwrap();
//!
//! let mut verifier = Transcript::new(b"example protocol");
//! verifier.append_message(b"commitment", b"...32 bytes of commitment...").unwrap();
//! assert_eq!(challenge, verifier.challenge_bytes(32).unwrap());
//! ```
//!
//! The sponge itself sits behind the [`Duplex`] trait; [`Strobe128`] is the
//! production implementation. A transcript is exclusively owned by one
//! prover or verifier run — concurrent proofs each instantiate their own.

pub mod duplex;
pub mod errors;
pub mod strobe;
pub mod transcript;

pub use duplex::{Duplex, OpFlags};
pub use errors::TranscriptError;
pub use strobe::Strobe128;
pub use transcript::{Transcript, PROTOCOL_LABEL};
