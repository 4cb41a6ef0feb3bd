//! CLI errors.

use jprint_printer::PrintError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("cannot read {}", path.display())]
    #[diagnostic(code(jprint::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}", path.display())]
    #[diagnostic(code(jprint::io))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    #[diagnostic(code(jprint::config), help("expected {{ \"printer\": {{…}}, \"markup\": {{…}} }}"))]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not a serialized syntax tree", path.display())]
    #[diagnostic(code(jprint::tree))]
    Tree {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to print {}", path.display())]
    #[diagnostic(code(jprint::print))]
    Print {
        path: PathBuf,
        #[source]
        source: PrintError,
    },

    #[error("{failed} of {total} inputs failed")]
    #[diagnostic(code(jprint::failed))]
    Failed { failed: usize, total: usize },
}
