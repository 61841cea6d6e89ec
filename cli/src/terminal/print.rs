use std::io::{self, Write};

/// Writes result lines to stdout.
///
/// The progress bar is hidden while writing so lines never interleave with it.
pub fn lines(lines: &[String]) -> io::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }

    tracing_indicatif::suspend_tracing_indicatif(|| {
        let mut stdout = io::stdout().lock();
        for line in lines {
            writeln!(stdout, "{line}")?;
        }
        stdout.flush()
    })
}
