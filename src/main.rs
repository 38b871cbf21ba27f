use std::process::ExitCode;

fn main() -> ExitCode {
    match viper_launchgen_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
