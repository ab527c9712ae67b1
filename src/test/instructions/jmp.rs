use super::*;

#[test]
fn skips() {
    let executor = run(&[
        ri!(LC, 0, 1),
        j!(JMP, 3),
        ri!(LC, 0, 2), // skipped
        exit(1),
    ]);

    assert_eq!(executor.register(0).unwrap(), 1);
}

#[test]
fn countdown_loop() {
    let executor = run(&[
        ri!(LC, 0, 10),
        ri!(SUBI, 0, 1),
        ri!(CMPI, 0, 0),
        j!(JG, 1),
        exit(1),
    ]);

    assert_eq!(executor.register(0).unwrap(), 0);
}
