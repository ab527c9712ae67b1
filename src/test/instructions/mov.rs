use super::*;

#[test]
fn applies_the_modifier() {
    let executor = run(&[ri!(LC, 0, 40), rr!(MOV, 1, 0, 2), exit(2)]);

    assert_eq!(executor.register(1).unwrap(), 42);
}

#[test]
fn plain_copy() {
    let executor = run(&[ri!(LC, 0, 7), rr!(MOV, 1, 0, 0), exit(2)]);

    assert_eq!(executor.register(1).unwrap(), 7);
    assert_eq!(executor.register(0).unwrap(), 7);
}
