use super::*;

#[test]
fn loads_the_immediate() {
    let executor = run(&[ri!(LC, 0, 524287), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 524287);
}

#[test]
fn sign_extends() {
    let executor = run(&[ri!(LC, 0, -1), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 0xffff_ffff);
}
