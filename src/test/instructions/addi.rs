use super::*;

#[test]
fn positive() {
    let executor = run(&[ri!(LC, 0, 5678), ri!(ADDI, 0, 1234), exit(2)]);

    assert_eq!(executor.register(0).unwrap(), 6912);
}

#[test]
fn negative() {
    let executor = run(&[ri!(LC, 0, 16), ri!(ADDI, 0, -4), exit(2)]);

    assert_eq!(executor.register(0).unwrap(), 12);
}

#[test]
fn wraps() {
    let executor = run(&[ri!(LC, 0, -1), ri!(ADDI, 0, 2), exit(2)]);

    assert_eq!(executor.register(0).unwrap(), 1);
}
