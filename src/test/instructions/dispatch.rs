use super::*;

#[test]
fn unknown_command_code() {
    // 11 is a hole in the opcode numbering
    let (_, err) = run_err(&[11 << 24]);

    matches::assert_matches!(err, ExecutionError::UnknownCommand(11));
}

#[test]
fn unknown_command_code_high() {
    let (_, err) = run_err(&[0xff00_0000]);

    matches::assert_matches!(err, ExecutionError::UnknownCommand(0xff));
}

#[test]
fn lc_sign_extends() {
    let executor = run(&[ri!(LC, 0, -1), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 0xffff_ffff);
}

#[test]
fn instruction_pointer_increments_before_execution() {
    // storing r15 shows the fall-through address, not the instruction's own
    let executor = run(&[rm!(STORE, 15, 0x200), rm!(LOAD, 0, 0x200), exit(1)]);

    assert_eq!(executor.register(0).unwrap(), 1);
}
