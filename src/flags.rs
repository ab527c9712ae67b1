use std::cmp::Ordering;

use bitflags::bitflags;

bitflags! {
    /// The comparison flags register.
    ///
    /// After a compare instruction exactly one of the three composite
    /// patterns is stored. Each pattern sets three bits, so a conditional
    /// jump only has to AND the register with the single flag it tests.
    #[derive(Default)]
    pub struct Flags: u32 {
        const EQUAL            = 0b1;
        const NOT_EQUAL        = 0b10;
        const GREATER          = 0b100;
        const LESS             = 0b1000;
        const GREATER_OR_EQUAL = 0b10000;
        const LESS_OR_EQUAL    = 0b100000;

        const EQUAL_SET = Self::EQUAL.bits
            | Self::GREATER_OR_EQUAL.bits
            | Self::LESS_OR_EQUAL.bits;
        const GREATER_SET = Self::NOT_EQUAL.bits
            | Self::GREATER.bits
            | Self::GREATER_OR_EQUAL.bits;
        const LESS_SET = Self::NOT_EQUAL.bits
            | Self::LESS.bits
            | Self::LESS_OR_EQUAL.bits;
    }
}

impl Flags {
    /// The pattern a compare instruction stores for the given ordering.
    pub fn comparison(ordering: Ordering) -> Flags {
        match ordering {
            Ordering::Less => Flags::LESS_SET,
            Ordering::Equal => Flags::EQUAL_SET,
            Ordering::Greater => Flags::GREATER_SET,
        }
    }
}
