use super::*;

#[test]
fn basic() {
    let executor = run(&[
        ri!(LC, 0, 0b1100),
        ri!(LC, 1, 0b0011),
        rr!(OR, 0, 1, 0),
        exit(2),
    ]);

    assert_eq!(executor.register(0).unwrap(), 0b1111);
}
