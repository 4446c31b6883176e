use std::fs;
use std::process;

use tracing_subscriber::EnvFilter;

use gbuild::cli;
use gbuild::script::{builtins, Interp};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("GBUILD_LOG"))
        .with_writer(std::io::stderr)
        .init();
    builtins::start_clock();

    let args = cli::parse_args();
    let script_name = args.script.display().to_string();

    let source = match fs::read_to_string(&args.script) {
        Ok(s) if !s.is_empty() => s,
        _ => {
            eprintln!("gbuild: fatal error: Can't read {script_name}");
            process::exit(1);
        }
    };

    let status = Interp::with_work_dir(&source, ".")
        .and_then(|mut interp| {
            interp.bind_args(&args.raw_args)?;
            interp.run()
        })
        .unwrap_or_else(|err| {
            if let Some(code) = err.exit_status() {
                process::exit(code);
            }
            eprintln!("{script_name}:{err}");
            process::exit(1);
        });
    process::exit(status);
}
