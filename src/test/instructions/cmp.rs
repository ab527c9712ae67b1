use super::*;

use crate::flags::Flags;

#[test]
fn less() {
    let executor = run(&[ri!(LC, 0, 1), ri!(LC, 1, 2), rr!(CMP, 0, 1, 0), exit(2)]);

    assert_eq!(executor.flags(), Flags::LESS_SET);
}

#[test]
fn greater() {
    let executor = run(&[ri!(LC, 0, 2), ri!(LC, 1, 1), rr!(CMP, 0, 1, 0), exit(2)]);

    assert_eq!(executor.flags(), Flags::GREATER_SET);
}

#[test]
fn modifier_shifts_the_right_operand() {
    let executor = run(&[ri!(LC, 0, 5), ri!(LC, 1, 2), rr!(CMP, 0, 1, 3), exit(2)]);

    assert_eq!(executor.flags(), Flags::EQUAL_SET);
}
