use super::*;

const SCRATCH: Address = 0x100;

#[test]
fn writes_memory() {
    let executor = run(&[ri!(LC, 0, 77), rm!(STORE, 0, SCRATCH), exit(1)]);

    assert_eq!(executor.memory_word(SCRATCH).unwrap(), 77);
}

#[test]
fn store2_writes_a_pair() {
    let executor = run(&[
        ri!(LC, 0, 1),
        ri!(LC, 1, 2),
        rm!(STORE2, 0, SCRATCH),
        exit(2),
    ]);

    assert_eq!(executor.memory_word(SCRATCH).unwrap(), 1);
    assert_eq!(executor.memory_word(SCRATCH + 1).unwrap(), 2);
}
