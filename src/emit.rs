use std::io::{self, Write};

use crate::job::Job;

/// Column of the first literal on a line, counting the tab as 8.
const START_COLUMN: usize = 8;

/// Width of `0xHH,` plus the separator after it.
const LITERAL_WIDTH: usize = 6;

/// Lines are broken once the running column reaches this.
const WRAP_COLUMN: usize = 78;

impl Job {
    pub fn emit<W: Write>(&self, pkg: &str, data: &[u8], writer: W) -> io::Result<()> {
        Emitter::new(self, pkg, data, writer).run()
    }
}

struct Emitter<'a, W> {
    job: &'a Job,
    pkg: &'a str,
    data: &'a [u8],
    writer: W,
}

impl<'a, W: Write> Emitter<'a, W> {
    fn new(job: &'a Job, pkg: &'a str, data: &'a [u8], writer: W) -> Self {
        Self {
            job,
            pkg,
            data,
            writer,
        }
    }

    fn run(&mut self) -> io::Result<()> {
        self.emit_package_clause()?;
        self.emit_var_header()?;
        self.emit_bytes()?;
        self.emit_var_footer()?;

        Ok(())
    }

    fn emit_package_clause(&mut self) -> io::Result<()> {
        writeln!(self.writer, "package {}", self.pkg)?;
        writeln!(self.writer)
    }

    fn emit_var_header(&mut self) -> io::Result<()> {
        write!(self.writer, "var {} = [...]byte{{\n\t", self.job.var_name)
    }

    fn emit_bytes(&mut self) -> io::Result<()> {
        let last_idx = self.data.len().saturating_sub(1);
        let mut column = START_COLUMN;

        for (idx, byte) in self.data.iter().enumerate() {
            write!(self.writer, "0x{byte:02x},")?;
            column += LITERAL_WIDTH;

            if idx == last_idx {
                break;
            }

            if column >= WRAP_COLUMN {
                write!(self.writer, "\n\t")?;
                column = START_COLUMN;
            } else {
                write!(self.writer, " ")?;
            }
        }

        Ok(())
    }

    fn emit_var_footer(&mut self) -> io::Result<()> {
        write!(self.writer, "\n}}\n")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn job() -> Job {
        Job {
            input: PathBuf::from("a.bin"),
            var_name: "ABin".into(),
            output: PathBuf::from("a.bin.go"),
            pkg: None,
        }
    }

    fn emit(data: &[u8]) -> String {
        let mut buf = Vec::new();
        job().emit("assets", data, &mut buf).unwrap();

        String::from_utf8(buf).unwrap()
    }

    fn body_lines(source: &str) -> Vec<&str> {
        let start = source.find("{\n").unwrap() + 2;
        let end = source.rfind("\n}").unwrap();

        source[start..end].lines().collect()
    }

    fn decode(source: &str) -> Vec<u8> {
        body_lines(source)
            .into_iter()
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|lit| !lit.is_empty())
            .map(|lit| {
                let hex = lit.strip_prefix("0x").unwrap();
                assert_eq!(hex.len(), 2);
                assert!(hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));

                u8::from_str_radix(hex, 16).unwrap()
            })
            .collect()
    }

    #[test]
    fn three_bytes() {
        assert_eq!(
            emit(&[0x00, 0xff, 0x10]),
            "package assets\n\nvar ABin = [...]byte{\n\t0x00, 0xff, 0x10,\n}\n"
        );
    }

    #[test]
    fn single_byte() {
        assert_eq!(
            emit(&[0x7f]),
            "package assets\n\nvar ABin = [...]byte{\n\t0x7f,\n}\n"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(emit(&[]), "package assets\n\nvar ABin = [...]byte{\n\t\n}\n");
    }

    #[test]
    fn wraps_after_twelve_literals() {
        let source = emit(&[0xab; 13]);
        let lines = body_lines(&source);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("\t{}0xab,", "0xab, ".repeat(11)));
        assert_eq!(lines[1], "\t0xab,");
    }

    #[test]
    fn full_last_line_is_not_followed_by_a_break() {
        let source = emit(&[0x01; 24]);
        let lines = body_lines(&source);

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.matches("0x").count() == 12));
        assert!(source.ends_with("0x01,\n}\n"));
    }

    #[test]
    fn no_trailing_spaces() {
        let source = emit(&(0..=255).collect::<Vec<u8>>());

        assert!(source.lines().all(|line| !line.ends_with(' ')));
    }

    #[test]
    fn lines_stay_narrow() {
        let source = emit(&[0x5a; 1000]);

        for line in body_lines(&source) {
            // The tab counts as 8 columns.
            assert!(line.len() - 1 + 8 < 80, "too wide: {line:?}");
        }
    }

    #[test]
    fn literals_decode_to_the_input() {
        let data: Vec<u8> = (0..=255).chain(0..=255).rev().collect();

        assert_eq!(decode(&emit(&data)), data);
        assert_eq!(decode(&emit(b"x")), b"x");
    }
}
