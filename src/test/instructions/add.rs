use super::*;

#[test]
fn with_modifier() {
    let executor = run(&[
        ri!(LC, 0, 100),
        ri!(LC, 1, 20),
        rr!(ADD, 0, 1, 3),
        exit(2),
    ]);

    assert_eq!(executor.register(0).unwrap(), 123);
}

#[test]
fn wraps() {
    let executor = run(&[
        ri!(LC, 0, -1),
        ri!(LC, 1, 1),
        rr!(ADD, 0, 1, 0),
        exit(2),
    ]);

    assert_eq!(executor.register(0).unwrap(), 0);
}

#[test]
fn negative_modifier() {
    let executor = run(&[
        ri!(LC, 0, 10),
        ri!(LC, 1, 0),
        rr!(ADD, 0, 1, -4),
        exit(2),
    ]);

    assert_eq!(executor.register(0).unwrap(), 6);
}
