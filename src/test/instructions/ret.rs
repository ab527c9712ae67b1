use super::*;

#[test]
fn drops_pushed_arguments() {
    let executor = run_calls(&[
        j!(JMP, 2),
        j!(RET, 0),
        ri!(LC, 0, 11),
        ri!(PUSH, 0, 0),
        ri!(PUSH, 0, 1),
        j!(CALLI, 1),
        exit(7),
    ]);

    // the protocol unwinds past the arguments and the saved frame slot
    assert_eq!(executor.register(14).unwrap(), CALL_STACK + 1);
}

#[test]
fn restores_the_return_address() {
    let executor = run_calls(&[
        j!(JMP, 2),
        j!(RET, 0),
        j!(CALLI, 1),
        ri!(LC, 1, 9),
        exit(2),
    ]);

    assert_eq!(executor.register(1).unwrap(), 9);
}
