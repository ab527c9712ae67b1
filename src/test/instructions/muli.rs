use super::*;

#[test]
fn basic() {
    let executor = run(&[ri!(LC, 0, 6), ri!(MULI, 0, 7), exit(2)]);

    assert_eq!(executor.register(0).unwrap(), 42);
    assert_eq!(executor.register(1).unwrap(), 0);
}

#[test]
fn high_bits_land_in_the_next_register() {
    let executor = run(&[ri!(LC, 0, -1), ri!(MULI, 0, 4), exit(2)]);

    // 0xffffffff * 4 = 0x3_fffffffc
    assert_eq!(executor.register(0).unwrap(), 0xffff_fffc);
    assert_eq!(executor.register(1).unwrap(), 3);
}
