use super::*;

use crate::flags::Flags;

#[test]
fn equal() {
    let executor = run(&[ri!(LC, 0, 5), ri!(CMPI, 0, 5), exit(1)]);

    assert_eq!(executor.flags(), Flags::EQUAL_SET);
}

#[test]
fn comparison_is_unsigned() {
    // -1 is 0xffffffff: greater than 1 in the word ordering
    let executor = run(&[ri!(LC, 0, -1), ri!(CMPI, 0, 1), exit(1)]);

    assert_eq!(executor.flags(), Flags::GREATER_SET);
}

#[test]
fn trichotomy() {
    for &(lhs, rhs) in &[(1, 2), (2, 2), (3, 2)] {
        let executor = run(&[ri!(LC, 0, lhs), ri!(CMPI, 0, rhs), exit(1)]);
        let flags = executor.flags();

        let patterns = [Flags::EQUAL_SET, Flags::GREATER_SET, Flags::LESS_SET];
        assert_eq!(patterns.iter().filter(|&&p| flags == p).count(), 1);
    }
}
