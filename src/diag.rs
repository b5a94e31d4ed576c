use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct Diag {
    pub level: Level,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warn,
    Err,
}

pub trait DiagCtx {
    fn emit(&mut self, diag: Diag);

    fn warn(&mut self, message: String) {
        self.emit(Diag {
            level: Level::Warn,
            message,
        });
    }

    fn err(&mut self, message: String) {
        self.emit(Diag {
            level: Level::Err,
            message,
        });
    }
}

#[derive(Debug, Clone)]
pub struct StderrDiagCtx;

impl DiagCtx for StderrDiagCtx {
    fn emit(&mut self, diag: Diag) {
        let mut buf = String::new();

        let _ = match diag.level {
            Level::Warn => write!(buf, "warn"),
            Level::Err => write!(buf, "err"),
        };

        let _ = write!(buf, ": {}", diag.message);
        eprintln!("{buf}");
    }
}

/// Collects diagnostics instead of printing them.
#[cfg(test)]
impl DiagCtx for Vec<Diag> {
    fn emit(&mut self, diag: Diag) {
        self.push(diag);
    }
}
