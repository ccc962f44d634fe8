use std::process::ExitCode;

fn main() -> ExitCode {
    gentables::cli::run()
}
