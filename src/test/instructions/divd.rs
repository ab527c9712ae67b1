use super::*;

#[test]
fn fractional_result() {
    let mut code = load_double(0, 7);
    code.extend(load_double(2, 2));
    code.extend(vec![rr!(DIVD, 0, 2, 0), exit(5)]);

    let executor = run(&code);

    assert_eq!(double_register(&executor, 0), 3.5);
}

#[test]
fn division_by_zero() {
    let mut code = load_double(0, 1);
    code.extend(load_double(2, 0));
    code.push(rr!(DIVD, 0, 2, 0));

    let (_, err) = run_err(&code);

    matches::assert_matches!(err, ExecutionError::DivisionByZero);
}
