use super::*;

use crate::executor::Config;

#[test]
fn blocked_register_read() {
    let config = Config::new().block_registers(vec![3]);

    let (_, result) = run_config(&[ri!(LC, 3, 1), exit(0)], config);

    matches::assert_matches!(result.unwrap_err(), ExecutionError::RegisterIsBlocked(3));
}

#[test]
fn blocked_utility_registers_still_allow_jumps() {
    // jumps and the instruction fetch use r15 internally, so blocking the
    // utility registers must not break plain control flow
    let config = Config::new().block_utility_registers();

    let (executor, result) = run_config(
        &[ri!(LC, 0, 1), j!(JMP, 3), exit(1), ri!(ADDI, 0, 1), exit(0)],
        config,
    );

    assert_eq!(result.unwrap(), 2);
    assert_eq!(executor.register(0).unwrap(), 2);
}

#[test]
fn blocked_utility_register_rejects_explicit_writes() {
    let config = Config::new().block_utility_registers();

    let (_, result) = run_config(&[ri!(LC, 14, 10), exit(0)], config);

    matches::assert_matches!(result.unwrap_err(), ExecutionError::RegisterIsBlocked(14));
}

#[test]
fn store_into_blocked_code_segment() {
    let config = Config::new().block_code_segment();

    let (executor, result) = run_config(&[rm!(STORE, 0, 0), exit(0)], config);

    matches::assert_matches!(result.unwrap_err(), ExecutionError::CodeSegmentBlocked(0));

    // the blocked store must not have mutated memory
    assert_eq!(
        executor.memory_word(0).unwrap(),
        rm!(STORE, 0, 0)
    );
}

#[test]
fn load_from_blocked_constants_segment() {
    let config = Config::new().block_constants_segment();

    let mut executor = Executor::new();

    let data = Data {
        entrypoint: 0,
        initial_stack: (constants::MEMORY_SIZE - 1) as Address,
        code: vec![rm!(LOAD, 0, 2), exit(0)],
        constants: vec![7],
    };

    let mut input = std::io::Cursor::new(Vec::new());
    let mut output = Vec::new();
    let mut io = Io {
        input: &mut input,
        output: &mut output,
    };

    let result = executor.execute_with_io(&data, config, &mut io);

    matches::assert_matches!(
        result.unwrap_err(),
        ExecutionError::ConstantsSegmentBlocked(2)
    );
}

#[test]
fn base_config_applies_to_every_run() {
    let mut executor = Executor::with_config(Config::new().block_registers(vec![5]));

    let mut input = std::io::Cursor::new(Vec::new());
    let mut output = Vec::new();
    let mut io = Io {
        input: &mut input,
        output: &mut output,
    };

    let result = executor.execute_with_io(
        &program(&[ri!(LC, 5, 1), exit(0)]),
        Config::default(),
        &mut io,
    );

    matches::assert_matches!(result.unwrap_err(), ExecutionError::RegisterIsBlocked(5));
}
