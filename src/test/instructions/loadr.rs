use super::*;

const SCRATCH: Address = 0x100;

#[test]
fn reads_through_a_register_address() {
    let executor = run(&[
        ri!(LC, 0, 99),
        ri!(LC, 1, SCRATCH as i32),
        rr!(STORER, 0, 1, 0),
        rr!(LOADR, 2, 1, 0),
        exit(3),
    ]);

    assert_eq!(executor.register(2).unwrap(), 99);
}

#[test]
fn loadr2_with_modifier() {
    let executor = run(&[
        ri!(LC, 0, 5),
        ri!(LC, 1, 6),
        ri!(LC, 2, SCRATCH as i32),
        rr!(STORER2, 0, 2, 4),
        rr!(LOADR2, 3, 2, 4),
        exit(5),
    ]);

    assert_eq!(executor.register(3).unwrap(), 5);
    assert_eq!(executor.register(4).unwrap(), 6);
}

#[test]
fn address_out_of_memory() {
    let (_, err) = run_err(&[ri!(LC, 0, -1), rr!(LOADR, 1, 0, 0)]);

    matches::assert_matches!(err, ExecutionError::AddressOutOfMemory(_));
}
