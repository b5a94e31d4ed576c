use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::CommandFactory;

use crate::error::{Error, Result};

const USAGE: &str = "bin2go [-name=<name>] [-out=<path>] [-pkg=<name>] <inputfile>
       bin2go [-pkg=<name>] <inputfile>...";

/// Flags that may also be spelled with a single dash, as in `-name=foo`.
const SINGLE_DASH_FLAGS: [&str; 4] = ["name", "out", "pkg", "help"];

#[derive(clap::Parser, Debug)]
#[command(name = "bin2go", override_usage = USAGE)]
#[command(about = "Embed binary files into Go source as byte arrays")]
pub struct Args {
    /// Use this name for the variable instead of one generated based on the input.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Use this filename for output instead of <inputfile>.go.
    #[arg(long, value_name = "PATH", value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub out: Option<PathBuf>,

    /// Use this package name instead of the parent directory of the output.
    #[arg(long, value_name = "NAME")]
    pub pkg: Option<String>,

    /// Binary files to embed.
    #[arg(value_name = "INPUTFILE")]
    pub inputs: Vec<PathBuf>,
}

impl Args {
    pub fn try_parse_from<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Self = clap::Parser::try_parse_from(normalize_flags(args))?;

        // An empty value means the flag was not given.
        args.name = args.name.filter(|name| !name.is_empty());
        args.out = args.out.filter(|out| !out.as_os_str().is_empty());
        args.pkg = args.pkg.filter(|pkg| !pkg.is_empty());

        Ok(args)
    }

    pub fn validate(&self) -> Result {
        if self.inputs.is_empty() {
            return Err(Error::wrong_args("no input files given"));
        }

        if self.inputs.len() > 1 && (self.name.is_some() || self.out.is_some()) {
            return Err(Error::wrong_args(
                "`-name` and `-out` can only be used with a single input file",
            ));
        }

        Ok(())
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

/// Rewrites single-dash long flags (`-out=x`, `-pkg x`) to their double-dash form.
fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut result: Vec<OsString> = args.next().into_iter().collect();
    let mut positional_only = false;

    for arg in args {
        if positional_only {
            result.push(arg);
            continue;
        }

        if arg == "--" {
            positional_only = true;
            result.push(arg);
            continue;
        }

        match arg.to_str() {
            Some(s) if is_single_dash_flag(s) => result.push(format!("-{s}").into()),
            _ => result.push(arg),
        }
    }

    result
}

fn is_single_dash_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };

    if rest.starts_with('-') {
        return false;
    }

    let flag = rest.split_once('=').map_or(rest, |(flag, _)| flag);

    SINGLE_DASH_FLAGS.contains(&flag)
}
