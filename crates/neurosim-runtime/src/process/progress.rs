//! Parsing of CMake/generator progress markers from child output.

/// Build progress extracted from one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildProgress {
    pub current: u64,
    pub total: u64,
}

/// Parse a progress marker such as `[ 50%]` (Makefiles) or `[150/200]` (Ninja).
pub fn parse_build_progress(line: &str) -> Option<BuildProgress> {
    let start = line.find('[')?;
    let end = line[start..].find(']')?;
    let bracket_content = &line[start + 1..start + end];

    if let Some(pct_pos) = bracket_content.find('%') {
        let percent = bracket_content[..pct_pos].trim().parse::<u64>().ok()?;
        return Some(BuildProgress {
            current: percent.min(100),
            total: 100,
        });
    }

    let (current, total) = bracket_content.split_once('/')?;
    let current = current.trim().parse::<u64>().ok()?;
    let total = total.trim().parse::<u64>().ok()?;
    (total > 0).then_some(BuildProgress { current, total })
}

/// Lines worth showing even when child output is otherwise hidden.
pub fn is_notable_line(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.contains("error")
        || lower.contains("warning:")
        || lower.contains("fatal")
        || lower.contains("undefined reference")
        || lower.contains("cannot find")
}
