//! STROBE-128 duplex over keccak-f[1600].
//!
//! Implements the lite profile of STROBE v1.0.2 at the 128-bit security
//! level, restricted to the operations the transcript layer drives:
//! associated-data absorption (plain and meta), keyed overwrite, and PRF
//! output. The keccak permutation comes from the `keccak` crate; the state
//! is kept as lanes with explicit little-endian byte indexing so the byte
//! stream is identical on every target.

use keccak::f1600;
use zeroize::Zeroize;

use crate::duplex::{Duplex, OpFlags};

/// Sponge rate in bytes at the 128-bit security level.
const STROBE_R: u8 = 166;

/// Operation produces output for the caller.
const FLAG_I: u8 = 1;
/// Operation moves data between the application and the state.
const FLAG_A: u8 = 1 << 1;
/// Operation engages the cipher side of the state.
const FLAG_C: u8 = 1 << 2;
/// Operation carries framing metadata.
const FLAG_M: u8 = 1 << 4;

#[inline]
fn state_byte(state: &[u64; 25], i: usize) -> u8 {
    (state[i / 8] >> ((i % 8) * 8)) as u8
}

#[inline]
fn xor_state_byte(state: &mut [u64; 25], i: usize, byte: u8) {
    state[i / 8] ^= u64::from(byte) << ((i % 8) * 8);
}

#[inline]
fn set_state_byte(state: &mut [u64; 25], i: usize, byte: u8) {
    let shift = (i % 8) * 8;
    state[i / 8] = (state[i / 8] & !(0xffu64 << shift)) | (u64::from(byte) << shift);
}

/// STROBE-128 duplex state: keccak lanes plus operation bookkeeping.
#[derive(Clone)]
pub struct Strobe128 {
    state: [u64; 25],
    pos: u8,
    pos_begin: u8,
    cur_flags: u8,
}

impl Strobe128 {
    /// Initializes the sponge with the STROBE version frame and absorbs the
    /// protocol label as the first (meta) operation.
    pub fn new(protocol_label: &[u8]) -> Self {
        let mut strobe = Strobe128 {
            state: [0u64; 25],
            pos: 0,
            pos_begin: 0,
            cur_flags: 0,
        };

        let mut frame = [0u8; 18];
        frame[..6].copy_from_slice(&[1, STROBE_R + 2, 1, 0, 1, 96]);
        frame[6..].copy_from_slice(b"STROBEv1.0.2");
        for (i, byte) in frame.iter().enumerate() {
            set_state_byte(&mut strobe.state, i, *byte);
        }
        f1600(&mut strobe.state);

        strobe.begin_op(OpFlags::meta(false));
        strobe.absorb(protocol_label);
        strobe
    }

    /// Pads the current block, runs the permutation, and resets positions.
    fn run_f(&mut self) {
        xor_state_byte(&mut self.state, self.pos as usize, self.pos_begin);
        xor_state_byte(&mut self.state, self.pos as usize + 1, 0x04);
        xor_state_byte(&mut self.state, STROBE_R as usize + 1, 0x80);
        f1600(&mut self.state);
        self.pos = 0;
        self.pos_begin = 0;
    }

    fn absorb(&mut self, data: &[u8]) {
        for byte in data {
            xor_state_byte(&mut self.state, self.pos as usize, *byte);
            self.pos += 1;
            if self.pos == STROBE_R {
                self.run_f();
            }
        }
    }

    fn overwrite(&mut self, data: &[u8]) {
        for byte in data {
            set_state_byte(&mut self.state, self.pos as usize, *byte);
            self.pos += 1;
            if self.pos == STROBE_R {
                self.run_f();
            }
        }
    }

    fn squeeze(&mut self, out: &mut [u8]) {
        for byte in out.iter_mut() {
            *byte = state_byte(&self.state, self.pos as usize);
            set_state_byte(&mut self.state, self.pos as usize, 0);
            self.pos += 1;
            if self.pos == STROBE_R {
                self.run_f();
            }
        }
    }

    /// Starts (or continues) an operation by absorbing its framing bytes.
    fn begin_op(&mut self, flags: OpFlags) {
        let control = control_byte(flags);
        if flags.is_more() {
            assert_eq!(
                self.cur_flags, control,
                "cannot continue an operation with different flags"
            );
            return;
        }

        let old_begin = self.pos_begin;
        self.pos_begin = self.pos + 1;
        self.cur_flags = control;
        self.absorb(&[old_begin, control]);

        // cipher-flagged operations must start on a fresh block
        if control & FLAG_C != 0 && self.pos != 0 {
            self.run_f();
        }
    }
}

fn control_byte(flags: OpFlags) -> u8 {
    let mut control = FLAG_A;
    if flags.is_meta() {
        control |= FLAG_M;
    }
    if flags.is_key() {
        control |= FLAG_C;
    }
    if flags.is_output() {
        control |= FLAG_I;
    }
    control
}

impl Duplex for Strobe128 {
    fn init(domain: &[u8]) -> Self {
        Strobe128::new(domain)
    }

    fn operate(&mut self, flags: OpFlags, data: &[u8]) {
        debug_assert!(!flags.is_output(), "absorbing entry point cannot produce output");
        self.begin_op(flags);
        if flags.is_key() {
            self.overwrite(data);
        } else {
            self.absorb(data);
        }
    }

    fn operate_output(&mut self, flags: OpFlags, out: &mut [u8]) {
        debug_assert!(flags.is_output(), "output entry point requires output flags");
        self.begin_op(flags);
        self.squeeze(out);
    }
}

impl Drop for Strobe128 {
    fn drop(&mut self) {
        self.state.zeroize();
        self.pos.zeroize();
        self.pos_begin.zeroize();
        self.cur_flags.zeroize();
    }
}
