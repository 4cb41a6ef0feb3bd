//! jprint: render serialized Java syntax trees as source text or HTML.
//!
//! Usage:
//!   jprint [options] <TREE.json>...
//!
//! Each input is rendered independently. Without `--out-dir` the results go
//! to stdout in input order.

mod config;
mod error;
mod render;

use clap::Parser as ClapParser;
use config::Config;
use error::CliError;
use jprint_markup::MarkupDecorator;
use render::{output_path, Flavor, Renderer};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(ClapParser, Debug)]
#[command(name = "jprint", version, about = "Pretty-print Java syntax trees with optional HTML markup")]
struct Cli {
    /// Serialized compilation units to render.
    #[arg(value_name = "TREE", required = true)]
    inputs: Vec<PathBuf>,

    /// JSON config with `printer` and `markup` sections.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Indent with N spaces.
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Leave comments out of the output.
    #[arg(long = "no-comments")]
    no_comments: bool,

    /// Emit plain source text without markup.
    #[arg(long)]
    plain: bool,

    /// Write one file per input into DIR.
    #[arg(short = 'o', long = "out-dir", value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jprint=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(width) = cli.indent {
        config.printer = config.printer.with_indent_width(width);
    }
    if cli.no_comments {
        config.printer = config.printer.without_comments();
    }
    let flavor = if cli.plain { Flavor::Plain } else { Flavor::Html };

    let renderer = Renderer::new(config.printer, MarkupDecorator::new(config.markup), flavor);
    let results = renderer.render_all(&cli.inputs);

    let total = results.len();
    let mut failed = 0;
    for (input, result) in cli.inputs.iter().zip(results) {
        let emitted = result.and_then(|text| emit(&text, input, cli.out_dir.as_deref(), renderer.flavor()));
        if let Err(err) = emitted {
            failed += 1;
            error!(path = %input.display(), "render failed");
            eprintln!("{:?}", miette::Report::new(err));
        }
    }

    if failed > 0 {
        return Err(CliError::Failed { failed, total }.into());
    }
    info!(total, "done");
    Ok(())
}

fn emit(text: &str, input: &Path, out_dir: Option<&Path>, flavor: Flavor) -> Result<(), CliError> {
    let Some(dir) = out_dir else {
        let mut stdout = std::io::stdout().lock();
        return stdout.write_all(text.as_bytes()).map_err(|source| CliError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        });
    };
    let path = output_path(dir, input, flavor);
    let write_err = |source| CliError::Write {
        path: path.clone(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;
    std::fs::write(&path, text).map_err(write_err)?;
    info!(path = %path.display(), "wrote");
    Ok(())
}
