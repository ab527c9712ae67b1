use super::*;

const SCRATCH: Address = 0x100;

#[test]
fn writes_through_a_register_address() {
    let executor = run(&[
        ri!(LC, 0, 31),
        ri!(LC, 1, SCRATCH as i32),
        rr!(STORER, 0, 1, 0),
        exit(2),
    ]);

    assert_eq!(executor.memory_word(SCRATCH).unwrap(), 31);
}

#[test]
fn storer2_writes_a_pair() {
    let executor = run(&[
        ri!(LC, 0, 5),
        ri!(LC, 1, 6),
        ri!(LC, 2, SCRATCH as i32),
        rr!(STORER2, 0, 2, 0),
        exit(3),
    ]);

    assert_eq!(executor.memory_word(SCRATCH).unwrap(), 5);
    assert_eq!(executor.memory_word(SCRATCH + 1).unwrap(), 6);
}
