use indicatif::ProgressStyle;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Style for the per-scan progress bar: one tick per scanned host.
pub fn style() -> anyhow::Result<ProgressStyle> {
    let style = ProgressStyle::with_template(
        "{spinner:.blue} {msg} {bar:32.green/bright_black} {pos}/{len} hosts ({elapsed})",
    )?
    .tick_strings(TICK_STRINGS)
    .progress_chars("━╸━");
    Ok(style)
}
