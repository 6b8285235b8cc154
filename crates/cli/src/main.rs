use std::process::ExitCode;

fn main() -> ExitCode {
    epoch_cli::run()
}
