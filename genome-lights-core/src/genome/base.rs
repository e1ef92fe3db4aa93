use crate::errors::{GenomeError, GenomeResult};

/// One symbol of the genome. Anything outside of ACGT decodes to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
    /// the "none" sentinel. renders black and has no complement
    Unknown,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// case insensitive
    pub const fn from_ascii(x: u8) -> Self {
        match x {
            b'a' | b'A' => Base::A,
            b'c' | b'C' => Base::C,
            b'g' | b'G' => Base::G,
            b't' | b'T' => Base::T,
            _ => Base::Unknown,
        }
    }

    pub const fn as_ascii(self) -> u8 {
        match self {
            Base::A => b'a',
            Base::C => b'c',
            Base::G => b'g',
            Base::T => b't',
            Base::Unknown => b'n',
        }
    }

    /// A pairs with T and C pairs with G.
    pub const fn complement(self) -> Self {
        match self {
            Base::A => Base::T,
            Base::T => Base::A,
            Base::C => Base::G,
            Base::G => Base::C,
            Base::Unknown => Base::Unknown,
        }
    }

    /// A and T form two hydrogen bonds. C and G form three.
    pub const fn is_weak(self) -> bool {
        matches!(self, Base::A | Base::T)
    }

    pub const fn is_strong(self) -> bool {
        matches!(self, Base::C | Base::G)
    }
}

impl From<u8> for Base {
    fn from(x: u8) -> Self {
        Self::from_ascii(x)
    }
}

/// A borrowed, never empty, read-only sequence of ascii bases.
///
/// The host owns the bytes for the life of the program. Nothing here copies them.
#[derive(Debug, Clone, Copy)]
pub struct Genome<'a> {
    bases: &'a [u8],
}

impl<'a> Genome<'a> {
    pub fn new(bases: &'a [u8]) -> GenomeResult<Self> {
        if bases.is_empty() {
            return Err(GenomeError::EmptyGenome);
        }

        Ok(Self { bases })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// `index` must be less than `len`
    pub fn base(&self, index: usize) -> Base {
        Base::from_ascii(self.bases[index])
    }
}
