use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::cli::Args;
use crate::diag::DiagCtx;
use crate::error::{Error, Result};
use crate::name::{derive_var_name, is_go_ident};

/// Appended to the input path when no output path is given.
pub const OUTPUT_SUFFIX: &str = ".go";

/// Package used when the output's parent directory has no name.
pub const FALLBACK_PKG: &str = "main";

/// Everything needed to turn one input file into one Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub var_name: String,
    pub output: PathBuf,
    /// Explicit package; derived from the output path when unset.
    pub pkg: Option<String>,
}

impl Job {
    /// Plans the job for `input`.
    ///
    /// Each job resolves its own output path and package; nothing carries over
    /// from previously planned jobs.
    pub fn plan(args: &Args, input: &Path, diag: &mut impl DiagCtx) -> Self {
        let var_name = match &args.name {
            Some(name) => name.clone(),
            None => derive_var_name(input),
        };

        if !is_go_ident(&var_name) {
            diag.warn(format!(
                "`{var_name}` (for `{}`) is not a valid Go identifier",
                input.display()
            ));
        }

        let output = match &args.out {
            Some(out) => out.clone(),
            None => default_output_path(input),
        };

        let job = Self {
            input: input.to_owned(),
            var_name,
            output,
            pkg: args.pkg.clone(),
        };
        debug!("planned {job:?}");

        job
    }

    /// Reads the input and writes the generated source, returning the input size.
    ///
    /// The input is read in full before the output is created, so a failed read
    /// leaves no output behind.
    pub fn run(&self) -> Result<usize> {
        let data = fs::read(&self.input).map_err(|source| Error::Input {
            path: self.input.clone(),
            source,
        })?;

        self.write_output(&data).map_err(|source| Error::Output {
            path: self.output.clone(),
            source,
        })?;

        Ok(data.len())
    }

    pub fn resolve_pkg(&self) -> io::Result<String> {
        match &self.pkg {
            Some(pkg) => Ok(pkg.clone()),
            None => derive_pkg(&self.output),
        }
    }

    fn write_output(&self, data: &[u8]) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.output)?);
        let pkg = self.resolve_pkg()?;
        self.emit(&pkg, data, &mut writer)?;
        writer.flush()
    }
}

pub fn default_output_path(input: &Path) -> PathBuf {
    let mut output = input.as_os_str().to_owned();
    output.push(OUTPUT_SUFFIX);

    output.into()
}

/// Names the package after the directory the output file lives in.
pub fn derive_pkg(output: &Path) -> io::Result<String> {
    let output = clean(&std::path::absolute(output)?);

    Ok(output
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_PKG.to_owned()))
}

fn clean(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}

            Component::ParentDir => {
                result.pop();
            }

            _ => result.push(component),
        }
    }

    result
}
