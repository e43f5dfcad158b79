use std::env::args_os;
use std::process::ExitCode;

use tga_codec::{inspect_tga_file, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    println!("File to process: {}", arguments.input_file().display());
    match inspect_tga_file(&arguments) {
        Ok(inspection) => {
            println!("{}", inspection);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Processing failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
