use std::process::ExitCode;

mod app;
mod commands;

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "win_dwm=debug,dwm_core=debug,dwm_platform=debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .try_init();
}

fn main() -> ExitCode {
    let matches = app::build_cli().get_matches_from(app::normalize_args(std::env::args_os()));
    init_logging(matches.get_flag("verbose"));

    match commands::run_command(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
