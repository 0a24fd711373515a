//! Command existence and version extraction.

use std::process::Command;

/// Get the first line of `<cmd> <version_flag>` output.
pub fn get_command_version(cmd: &str, version_flag: &str) -> Option<String> {
    let output = Command::new(cmd).arg(version_flag).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Some tools (older Pythons) print their version to stderr
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    text.lines().next().map(|s| s.trim().to_string())
}

/// Get cmake version.
pub fn get_cmake_version() -> Option<String> {
    // "cmake version 3.28.1" -> "3.28.1"
    parse_cmake_version(&get_command_version("cmake", "--version")?)
}

/// Get python 3 version.
/// Tries `python3` first, then `python` (checking it's Python 3).
pub fn get_python3_version() -> Option<String> {
    ["python3", "python"]
        .into_iter()
        .filter_map(|cmd| get_command_version(cmd, "--version"))
        .find_map(|line| parse_python3_version(&line))
}

/// Get the C compiler version (gcc, or clang behind a gcc alias).
pub fn get_cc_version() -> Option<String> {
    parse_compiler_version(&get_command_version("cc", "--version")?)
}

/// Get the C++ compiler version.
pub fn get_cxx_version() -> Option<String> {
    parse_compiler_version(&get_command_version("c++", "--version")?)
}

fn parse_cmake_version(line: &str) -> Option<String> {
    line.split_whitespace().nth(2).map(str::to_string)
}

fn parse_python3_version(line: &str) -> Option<String> {
    // "Python 3.12.1" -> "3.12.1"
    line.split_whitespace()
        .nth(1)
        .filter(|v| v.starts_with('3'))
        .map(str::to_string)
}

/// Pull a dotted version out of a compiler banner such as
/// `gcc (Ubuntu 13.2.0-4ubuntu3) 13.2.0` or `Apple clang version 15.0.0 (...)`.
fn parse_compiler_version(line: &str) -> Option<String> {
    line.split_whitespace()
        .find(|word| word.starts_with(|c: char| c.is_ascii_digit()) && word.contains('.'))
        .and_then(|word| {
            word.split(|c: char| !(c.is_ascii_digit() || c == '.'))
                .next()
        })
        .map(|version| version.trim_end_matches('.').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cmake_version() {
        assert_eq!(
            parse_cmake_version("cmake version 3.28.1"),
            Some("3.28.1".to_string())
        );
        assert_eq!(parse_cmake_version("cmake"), None);
    }

    #[test]
    fn test_parse_python3_version() {
        assert_eq!(
            parse_python3_version("Python 3.12.1"),
            Some("3.12.1".to_string())
        );
        assert_eq!(parse_python3_version("Python 2.7.18"), None);
    }

    #[test]
    fn test_parse_compiler_version() {
        assert_eq!(
            parse_compiler_version("gcc (Ubuntu 13.2.0-4ubuntu3) 13.2.0"),
            Some("13.2.0".to_string())
        );
        assert_eq!(
            parse_compiler_version("Apple clang version 15.0.0 (clang-1500.1.0.2.5)"),
            Some("15.0.0".to_string())
        );
        assert_eq!(parse_compiler_version("no digits here"), None);
    }

    #[test]
    fn test_missing_command_has_no_version() {
        assert_eq!(
            get_command_version("definitely_not_a_real_command_12345", "--version"),
            None
        );
    }
}
