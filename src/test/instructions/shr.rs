use super::*;

#[test]
fn shifts_right() {
    let executor = run(&[
        ri!(LC, 0, 64),
        ri!(LC, 1, 3),
        rr!(SHR, 0, 1, 0),
        exit(2),
    ]);

    assert_eq!(executor.register(0).unwrap(), 8);
}
