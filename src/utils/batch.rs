use log::debug;

/// Split a batch file into `(line number, expression)` pairs.
///
/// Line numbers start at 1. Blank lines and lines starting with `#` are skipped.
pub fn batch_lines(contents: &str) -> Vec<(usize, &str)> {
    let lines: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    debug!("Batch contains {} expressions", lines.len());
    lines
}
