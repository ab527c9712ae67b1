use super::*;

#[test]
fn flips_every_bit() {
    let executor = run(&[ri!(LC, 0, 0), ri!(NOT, 0, 0), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 0xffff_ffff);
}

#[test]
fn double_negation() {
    let executor = run(&[ri!(LC, 0, 0x5a5a), ri!(NOT, 0, 0), ri!(NOT, 0, 0), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 0x5a5a);
}
