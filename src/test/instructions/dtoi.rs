use super::*;

#[test]
fn floors() {
    let mut code = load_double(0, 7);
    code.extend(load_double(2, 2));
    code.extend(vec![rr!(DIVD, 0, 2, 0), rr!(DTOI, 4, 0, 0), exit(5)]);

    let executor = run(&code);

    // 7.0 / 2.0 = 3.5, floored
    assert_eq!(executor.register(4).unwrap(), 3);
}

#[test]
fn overflow() {
    // 0xffffffff converts to the largest word value, which the floor
    // check rejects
    let (_, err) = run_err(&[ri!(LC, 0, -1), rr!(ITOD, 2, 0, 0), rr!(DTOI, 4, 2, 0)]);

    matches::assert_matches!(err, ExecutionError::DtoiOverflow(_));
}

#[test]
fn negative_overflows() {
    let mut code = load_double(0, 0);
    code.extend(load_double(2, 5));
    code.extend(vec![rr!(SUBD, 0, 2, 0), rr!(DTOI, 4, 0, 0)]);

    let (_, err) = run_err(&code);

    matches::assert_matches!(err, ExecutionError::DtoiOverflow(_));
}
