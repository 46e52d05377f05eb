//! The fixed four-letter nucleotide alphabet used by every motif routine.
//!
//! Matrices are indexed A=0, C=1, G=2, T=3. Consensus calling walks the
//! symbols in the order A, C, T, G instead, see [`Nucleotide::CONSENSUS_ORDER`].

/// A single DNA base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// All symbols in matrix index order.
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Order in which consensus calling visits symbols; the earliest wins ties.
    pub const CONSENSUS_ORDER: [Nucleotide; 4] =
        [Nucleotide::A, Nucleotide::C, Nucleotide::T, Nucleotide::G];

    /// Matrix row for this symbol.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uppercase ASCII byte for this symbol.
    pub const fn to_byte(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::C => b'C',
            Nucleotide::G => b'G',
            Nucleotide::T => b'T',
        }
    }

    /// Parse a byte, accepting either case. Anything outside `ACGT` is `None`.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            _ => None,
        }
    }
}

/// Matrix row for an uppercase base, or `None` for anything else.
#[inline]
pub(crate) fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}
