//! The narrow interface between the transcript layer and the underlying
//! sponge/duplex primitive.

/// Flag set for a single duplex operation.
///
/// The four axes mirror the primitive's control word: `meta` marks framing
/// metadata (labels, length prefixes), `more` continues the previous logical
/// field instead of starting a new one, `key` routes data into the keyed
/// side of the state, and `output` requests squeezed bytes. The fields are
/// private and only the combinations below are constructible, so an illegal
/// control word cannot reach the primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpFlags {
    meta: bool,
    more: bool,
    output: bool,
    key: bool,
}

impl OpFlags {
    /// Framing metadata: a label, or a length prefix chained onto one.
    pub const fn meta(more: bool) -> Self {
        OpFlags {
            meta: true,
            more,
            output: false,
            key: false,
        }
    }

    /// Application payload bytes, starting a new logical field.
    pub const fn data() -> Self {
        OpFlags {
            meta: false,
            more: false,
            output: false,
            key: false,
        }
    }

    /// Secret material entering the keyed side of the state.
    pub const fn key_input() -> Self {
        OpFlags {
            meta: false,
            more: false,
            output: false,
            key: true,
        }
    }

    /// Challenge extraction: keyed and output-producing.
    pub const fn output() -> Self {
        OpFlags {
            meta: false,
            more: false,
            output: true,
            key: true,
        }
    }

    pub const fn is_meta(self) -> bool {
        self.meta
    }

    pub const fn is_more(self) -> bool {
        self.more
    }

    pub const fn is_key(self) -> bool {
        self.key
    }

    pub const fn is_output(self) -> bool {
        self.output
    }
}

/// A sponge/duplex primitive the transcript can drive.
///
/// The transcript owns exactly one instance and mutates it through these
/// entry points only; the permutation, padding and rate stay behind this
/// boundary. Splitting absorption from output keeps both call sites
/// borrow-friendly: `operate` must not be called with output-requesting
/// flags, `operate_output` must.
pub trait Duplex: Clone {
    /// Creates a fresh state seeded with a domain-separation string.
    fn init(domain: &[u8]) -> Self;

    /// Runs one absorbing operation over `data`.
    fn operate(&mut self, flags: OpFlags, data: &[u8]);

    /// Runs one output-producing operation, filling `out` from the state.
    fn operate_output(&mut self, flags: OpFlags, out: &mut [u8]);
}
