use std::process::ExitCode;

use env_logger::Env;
use log::info;

use cli::Args;
use diag::{DiagCtx, StderrDiagCtx};
use error::{Error, Result};
use job::Job;

mod cli;
mod diag;
mod emit;
mod error;
mod job;
mod name;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut diag = StderrDiagCtx;

    let args = match Args::try_parse_from(std::env::args_os()) {
        Ok(args) => args,

        Err(e) if !e.use_stderr() => {
            // --help and friends.
            let _ = e.print();
            return ExitCode::SUCCESS;
        }

        Err(e) => {
            let _ = e.print();
            return ExitCode::from(error::WRONG_ARGS);
        }
    };

    match run(&args, &mut diag) {
        Ok(()) => ExitCode::SUCCESS,

        Err(e) => {
            if let Error::WrongArgs { .. } = e {
                eprintln!("{}", Args::usage());
            }

            diag.err(e.to_string());
            e.exit_code()
        }
    }
}

fn run(args: &Args, diag: &mut impl DiagCtx) -> Result {
    args.validate()?;

    for input in &args.inputs {
        let job = Job::plan(args, input, diag);
        let len = job.run()?;

        info!(
            "{} -> {} ({len} bytes)",
            job.input.display(),
            job.output.display()
        );
    }

    Ok(())
}
