//! Colored run summaries.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use expo_mocks_gen::CheckStatus;
use termcolor::{Color, ColorSpec, WriteColor};

fn status_line(out: &mut impl WriteColor, label: &str, color: Color, path: &Path) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{label:>10}")?;
    out.reset()?;
    writeln!(out, " {}", path.display())
}

/// One `Generated <path>` line per written file.
pub fn write_generated(out: &mut impl WriteColor, paths: &[PathBuf]) -> io::Result<()> {
    if paths.is_empty() {
        return writeln!(out, "No modules to generate");
    }
    for path in paths {
        status_line(out, "Generated", Color::Green, path)?;
    }
    Ok(())
}

/// Report `--check` results and return how many mocks are out of date.
pub fn write_check(out: &mut impl WriteColor, statuses: &[(PathBuf, CheckStatus)]) -> io::Result<usize> {
    let mut outdated = 0;
    for (path, status) in statuses {
        match status {
            CheckStatus::UpToDate => status_line(out, "Fresh", Color::Green, path)?,
            CheckStatus::Stale => {
                outdated += 1;
                status_line(out, "Stale", Color::Yellow, path)?;
            }
            CheckStatus::Missing => {
                outdated += 1;
                status_line(out, "Missing", Color::Red, path)?;
            }
        }
    }
    if outdated > 0 {
        writeln!(out, "{outdated} mock(s) out of date; run expo-mocks to regenerate")?;
    }
    Ok(outdated)
}

/// `error: <message>` followed by one `caused by:` line per source.
pub fn write_error(out: &mut impl WriteColor, err: &anyhow::Error) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "error")?;
    out.reset()?;
    writeln!(out, ": {err}")?;
    for cause in err.chain().skip(1) {
        writeln!(out, "  caused by: {cause}")?;
    }
    Ok(())
}

/// Like [`write_error`], but falls back to a plain `error: ...` line on
/// `fallback` when `out` cannot be written.
pub fn write_error_or_fallback(
    out: &mut impl WriteColor,
    fallback: &mut impl Write,
    err: &anyhow::Error,
) -> io::Result<()> {
    if write_error(out, err).is_ok() {
        return Ok(());
    }
    writeln!(fallback, "error: {err:#}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl WriteColor for BrokenPipe {
        fn supports_color(&self) -> bool {
            false
        }

        fn set_color(&mut self, _: &ColorSpec) -> io::Result<()> {
            Ok(())
        }

        fn reset(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn text(buffer: Buffer) -> String {
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn generated_lines_are_right_aligned() {
        let mut buffer = Buffer::no_color();
        write_generated(&mut buffer, &[PathBuf::from("mocks/ExampleModule.ts")]).unwrap();
        assert_eq!(text(buffer), " Generated mocks/ExampleModule.ts\n");
    }

    #[test]
    fn empty_generation_is_reported() {
        let mut buffer = Buffer::no_color();
        write_generated(&mut buffer, &[]).unwrap();
        assert_eq!(text(buffer), "No modules to generate\n");
    }

    #[test]
    fn check_counts_outdated_mocks() {
        let mut buffer = Buffer::no_color();
        let outdated = write_check(
            &mut buffer,
            &[
                (PathBuf::from("mocks/A.ts"), CheckStatus::UpToDate),
                (PathBuf::from("mocks/B.ts"), CheckStatus::Stale),
                (PathBuf::from("mocks/C.ts"), CheckStatus::Missing),
            ],
        )
        .unwrap();
        assert_eq!(outdated, 2);
        let out = text(buffer);
        assert!(out.contains("     Fresh mocks/A.ts\n"));
        assert!(out.contains("     Stale mocks/B.ts\n"));
        assert!(out.contains("   Missing mocks/C.ts\n"));
        assert!(out.ends_with("2 mock(s) out of date; run expo-mocks to regenerate\n"));
    }

    #[test]
    fn errors_list_their_causes() {
        let err = anyhow::anyhow!("disk full").context("failed to write mocks/A.ts");
        let mut buffer = Buffer::no_color();
        write_error(&mut buffer, &err).unwrap();
        assert_eq!(
            text(buffer),
            "error: failed to write mocks/A.ts\n  caused by: disk full\n"
        );
    }

    #[test]
    fn unwritable_error_stream_falls_back() {
        let err = anyhow::anyhow!("disk full").context("failed to write mocks/A.ts");
        let mut fallback = Vec::new();
        write_error_or_fallback(&mut BrokenPipe, &mut fallback, &err).unwrap();
        assert_eq!(
            String::from_utf8(fallback).unwrap(),
            "error: failed to write mocks/A.ts: disk full\n"
        );

        let mut buffer = Buffer::no_color();
        let mut fallback = Vec::new();
        write_error_or_fallback(&mut buffer, &mut fallback, &err).unwrap();
        assert!(fallback.is_empty());
        assert!(text(buffer).starts_with("error: failed to write mocks/A.ts\n"));
    }
}
