//! Loading serialized trees and rendering them.

use crate::error::CliError;
use jprint_ast::{CompilationUnit, NodeRef};
use jprint_markup::MarkupDecorator;
use jprint_printer::{Printer, PrinterOptions};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Output flavor of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Markup around decorated sub-trees.
    Html,
    /// Undecorated source text.
    Plain,
}

impl Flavor {
    pub fn extension(self) -> &'static str {
        match self {
            Flavor::Html => "html",
            Flavor::Plain => "java",
        }
    }
}

/// Everything one pass needs; shared by all worker threads.
pub struct Renderer {
    options: PrinterOptions,
    decorator: MarkupDecorator,
    flavor: Flavor,
}

impl Renderer {
    pub fn new(options: PrinterOptions, decorator: MarkupDecorator, flavor: Flavor) -> Self {
        Self {
            options,
            decorator,
            flavor,
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Render one tree. Each call owns a fresh printer.
    pub fn render(&self, unit: &CompilationUnit, path: &Path) -> Result<String, CliError> {
        let mut printer = match self.flavor {
            Flavor::Html => Printer::with_decorator(self.options.clone(), &self.decorator),
            Flavor::Plain => Printer::new(self.options.clone()),
        };
        let text = printer
            .print(NodeRef::CompilationUnit(unit))
            .map_err(|source| CliError::Print {
                path: path.to_path_buf(),
                source,
            })?;
        let stats = printer.stats();
        debug!(
            path = %path.display(),
            nodes = stats.nodes,
            orphan_comments = stats.orphan_comments,
            "rendered"
        );
        Ok(text)
    }

    /// Load and render the tree stored at `path`.
    pub fn render_file(&self, path: &Path) -> Result<String, CliError> {
        let unit = load_unit(path)?;
        self.render(&unit, path)
    }

    /// Render every input in parallel, keeping input order in the result.
    pub fn render_all(&self, inputs: &[PathBuf]) -> Vec<Result<String, CliError>> {
        info!(inputs = inputs.len(), flavor = ?self.flavor, "rendering");
        inputs.par_iter().map(|path| self.render_file(path)).collect()
    }
}

pub fn load_unit(path: &Path) -> Result<CompilationUnit, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_unit(&text, path)
}

pub fn parse_unit(text: &str, path: &Path) -> Result<CompilationUnit, CliError> {
    serde_json::from_str(text).map_err(|source| CliError::Tree {
        path: path.to_path_buf(),
        source,
    })
}

/// `<dir>/<input stem>.<ext>`
pub fn output_path(dir: &Path, input: &Path, flavor: Flavor) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".");
    name.push(flavor.extension());
    dir.join(name)
}
