use derive_more::{Add, AddAssign};

/// Echo identifier newtype.
///
/// Carried in the ICMP echo header and constant for the lifetime of a probing
/// or tunnel session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Ord, PartialOrd)]
pub struct EchoId(pub u16);

/// `Sequence` number newtype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Ord, PartialOrd, Add, AddAssign)]
pub struct Sequence(pub u16);

/// `PayloadSize` newtype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Ord, PartialOrd)]
pub struct PayloadSize(pub u16);

/// `PayloadPattern` newtype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Ord, PartialOrd)]
pub struct PayloadPattern(pub u8);

impl Sequence {
    /// The next sequence number, wrapping at `u16::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_add_assign() {
        let mut seq = Sequence(0);
        seq += Sequence(1);
        seq += Sequence(1);
        assert_eq!(Sequence(2), seq);
    }

    #[test]
    fn test_sequence_next_wraps() {
        assert_eq!(Sequence(1), Sequence(0).next());
        assert_eq!(Sequence(0), Sequence(u16::MAX).next());
    }
}
