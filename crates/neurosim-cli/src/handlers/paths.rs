//! Paths command handler.
//!
//! Shows where a setup run will build and provision, in `key = value`
//! form or as JSON.

use std::io::{self, Write};

use anyhow::Context;
use neurosim_core::ProjectPaths;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub fn execute(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let paths = ProjectPaths::resolve(ctx.setup_config(), ctx.os);
    write_paths(&mut io::stdout().lock(), ctx, &paths, json)
}

fn write_paths(
    out: &mut impl Write,
    ctx: &CliContext,
    paths: &ProjectPaths,
    json: bool,
) -> Result<(), CliError> {
    if json {
        let text = serde_json::to_string_pretty(paths).context("encoding paths as JSON")?;
        writeln!(out, "{text}")?;
    } else {
        writeln!(out, "os = {}", ctx.os)?;
        writeln!(out, "{paths}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};
    use crate::parser::Cli;
    use clap::Parser;

    fn render(json: bool) -> String {
        let cli = Cli::parse_from(["neurosim-setup", "paths"]);
        let ctx = bootstrap(CliConfig::from_cli(&cli)).unwrap();
        let paths = ProjectPaths::resolve(ctx.setup_config(), ctx.os);
        let mut out = Vec::new();
        write_paths(&mut out, &ctx, &paths, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn json_lists_pip_and_activate() {
        let value: serde_json::Value = serde_json::from_str(&render(true)).unwrap();
        assert!(value["build_dir"].is_string());
        assert!(value["venv"]["pip"].is_string());
        assert!(value["venv"]["activate"].is_string());
    }

    #[test]
    fn text_form_starts_with_os() {
        let text = render(false);
        assert!(text.starts_with("os = "));
        assert!(text.contains("activate = "));
    }

    #[test]
    fn closed_output_is_an_io_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let cli = Cli::parse_from(["neurosim-setup", "paths"]);
        let ctx = bootstrap(CliConfig::from_cli(&cli)).unwrap();
        let paths = ProjectPaths::resolve(ctx.setup_config(), ctx.os);
        let err = write_paths(&mut Closed, &ctx, &paths, false).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 74);
    }
}
