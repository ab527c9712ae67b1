//! The Karma toolchain binary: assemble sources, run executables,
//! recover assembly from executables.

#[macro_use]
extern crate clap;

use std::path::Path;
use std::process;

use clap::{App, AppSettings, Arg, SubCommand};

use karma::executor::Executor;

fn app() -> App<'static, 'static> {
    app_from_crate!()
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("compile")
                .about("Assembles a source file and everything it includes")
                .arg(
                    Arg::with_name("SRC")
                        .help("The root source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("DST")
                        .help("The executable to write (defaults to the source stem)")
                        .index(2),
                ),
        )
        .subcommand(
            SubCommand::with_name("execute")
                .about("Runs an executable and exits with its return code")
                .arg(
                    Arg::with_name("EXEC")
                        .help("The executable to run")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("disassemble")
                .about("Recovers assembly text from an executable")
                .arg(
                    Arg::with_name("EXEC")
                        .help("The executable to disassemble")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("DST")
                        .help("The text file to write (defaults to the executable stem)")
                        .index(2),
                ),
        )
}

fn main() {
    pretty_env_logger::init();

    let matches = app().get_matches();

    let code = match matches.subcommand() {
        ("compile", Some(matches)) => compile(
            Path::new(matches.value_of("SRC").unwrap()),
            matches.value_of("DST").map(Path::new),
        ),

        ("execute", Some(matches)) => execute(Path::new(matches.value_of("EXEC").unwrap())),

        ("disassemble", Some(matches)) => disassemble(
            Path::new(matches.value_of("EXEC").unwrap()),
            matches.value_of("DST").map(Path::new),
        ),

        _ => unreachable!("a subcommand is required"),
    };

    process::exit(code);
}

fn compile(src: &Path, dst: Option<&Path>) -> i32 {
    match kasm::assemble_to_file(src, dst) {
        Ok(written) => {
            log::info!("compiled {} to {}", src.display(), written.display());
            0
        }
        Err(err) => {
            eprintln!("compiling {} failed: {}", src.display(), err);
            1
        }
    }
}

fn execute(exec: &Path) -> i32 {
    let data = match kexfile::read_file(exec) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("reading {} failed: {}", exec.display(), err);
            return 1;
        }
    };

    match Executor::new().execute(&data) {
        Ok(code) => code as i32,
        Err(err) => {
            eprintln!("executing {} failed: {}", exec.display(), err);
            1
        }
    }
}

fn disassemble(exec: &Path, dst: Option<&Path>) -> i32 {
    match kasm::disassemble_file(exec, dst) {
        Ok(written) => {
            log::info!("disassembled {} to {}", exec.display(), written.display());
            0
        }
        Err(err) => {
            eprintln!("disassembling {} failed: {}", exec.display(), err);
            1
        }
    }
}
