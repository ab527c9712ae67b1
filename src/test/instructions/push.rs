use super::*;

use crate::executor::Config;

const TOP: Address = (constants::MEMORY_SIZE - 1) as Address;

#[test]
fn stores_at_the_stack_pointer() {
    let executor = run(&[ri!(LC, 0, 23), ri!(PUSH, 0, 2), exit(1)]);

    assert_eq!(executor.memory_word(TOP).unwrap(), 25);
    assert_eq!(executor.register(14).unwrap(), TOP - 1);
}

#[test]
fn overflow_with_a_bounded_stack() {
    let config = Config::new().bound_stack(2);

    let (_, result) = run_config(
        &[
            ri!(LC, 0, 1),
            ri!(PUSH, 0, 0),
            ri!(PUSH, 0, 0),
            ri!(PUSH, 0, 0),
            exit(1),
        ],
        config,
    );

    matches::assert_matches!(
        result.unwrap_err(),
        ExecutionError::StackOverflow { max_size: 2 }
    );
}

#[test]
fn bounded_stack_allows_exactly_the_bound() {
    let config = Config::new().bound_stack(2);

    let (_, result) = run_config(
        &[ri!(PUSH, 0, 0), ri!(PUSH, 0, 0), ri!(LC, 0, 0), exit(0)],
        config,
    );

    assert_eq!(result.unwrap(), 0);
}

#[test]
fn stack_pointer_outside_memory() {
    // plant an absurd stack pointer, then push
    let (_, err) = run_err(&[ri!(LC, 0, -1), rr!(MOV, 14, 0, 0), ri!(PUSH, 0, 0)]);

    matches::assert_matches!(err, ExecutionError::StackPointerOutOfMemory(_));
}
