use super::*;

#[test]
fn basic() {
    let executor = run(&[
        ri!(LC, 0, 0b1100),
        ri!(LC, 1, 0b1010),
        rr!(XOR, 0, 1, 0),
        exit(2),
    ]);

    assert_eq!(executor.register(0).unwrap(), 0b0110);
}
