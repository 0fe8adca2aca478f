//! sanim - Command-line tool for decoding sprite sheet exports into animation data

use std::process::ExitCode;

use sheetanim::cli;

fn main() -> ExitCode {
    cli::run()
}
