use super::*;

#[test]
fn transfers_control_and_deposits_the_return_address() {
    let executor = run_calls(&[
        ri!(LC, 0, 3),
        rr!(CALL, 2, 0, 0),
        exit(5), // skipped: the callee exits on its own
        ri!(LC, 1, 55),
        exit(4),
    ]);

    // the fall-through address of the call instruction at 1
    assert_eq!(executor.register(2).unwrap(), 2);
    assert_eq!(executor.register(1).unwrap(), 55);
}

#[test]
fn callee_reads_arguments_through_the_frame_register() {
    // main pushes one argument, the callee loads it from mem[r13 + 3]:
    // above the frame base sit the saved frame and the return address,
    // then the argument
    let executor = run_calls(&[
        j!(JMP, 4),
        // callee at 1
        rr!(MOV, 1, 13, 3),
        rr!(LOADR, 2, 1, 0),
        j!(RET, 0),
        // main at 4
        ri!(LC, 0, 123),
        ri!(PUSH, 0, 0),
        j!(CALLI, 1),
        exit(3),
    ]);

    assert_eq!(executor.register(2).unwrap(), 123);
}

#[test]
fn callee_address_comes_from_the_modifier_sum() {
    let executor = run_calls(&[
        ri!(LC, 0, 1),
        rr!(CALL, 2, 0, 2), // callee = r0 + 2 = 3
        exit(5),            // skipped
        ri!(LC, 1, 7),
        exit(4),
    ]);

    assert_eq!(executor.register(1).unwrap(), 7);
}
