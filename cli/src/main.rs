//! mdhwpx CLI - Markdown to HWPX conversion tool

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use mdhwpx::{report, ConvertOptions, PackagingMode};

#[derive(Parser)]
#[command(name = "mdhwpx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert report-style Markdown to HWPX documents", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HWPX file
    #[arg(value_name = "OUTPUT", default_value = "output.hwpx")]
    output: PathBuf,

    /// Print a line-by-line audit report after conversion
    #[arg(long)]
    audit: bool,

    /// Reuse the style header of an existing HWPX container
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// External style catalog JSON
    #[arg(long, value_name = "FILE")]
    styles: Option<PathBuf>,

    /// External style description document
    #[arg(long = "style-guide", value_name = "FILE")]
    style_guide: Option<PathBuf>,

    /// Force all text onto one named font face
    #[arg(long, value_name = "FACE")]
    font: Option<String>,

    /// Print a header-usage report (used vs defined style ids)
    #[arg(long = "header-audit")]
    header_audit: bool,

    /// Content-descriptor packaging mode
    #[arg(long, value_enum, default_value = "direct")]
    packaging: Packaging,

    /// Convert the built-in sample document and verify the pipeline
    #[arg(long = "self-test")]
    self_test: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Packaging {
    /// Header/body paths listed directly in the content descriptor
    Direct,
    /// Manifest-and-spine content descriptor
    Indexed,
}

impl From<Packaging> for PackagingMode {
    fn from(mode: Packaging) -> Self {
        match mode {
            Packaging::Direct => PackagingMode::Direct,
            Packaging::Indexed => PackagingMode::Indexed,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> mdhwpx::Result<()> {
    if cli.self_test {
        let summary = mdhwpx::self_test()?;
        println!("{} {}", "✓".green().bold(), summary);
        return Ok(());
    }

    let Some(input) = cli.input else {
        println!("{}", "Usage: mdhwpx <FILE> [OUTPUT]".yellow());
        println!("       mdhwpx --help for more information");
        return Ok(());
    };

    let mut options = ConvertOptions::new().with_packaging(cli.packaging.into());
    if let Some(path) = cli.template {
        options = options.with_template(path);
    }
    if let Some(path) = cli.styles {
        options = options.with_styles(path);
    }
    if let Some(path) = cli.style_guide {
        options = options.with_style_guide(path);
    }
    if let Some(face) = cli.font {
        options = options.with_font(face);
    }

    log::debug!("converting {} -> {}", input.display(), cli.output.display());
    let result = mdhwpx::convert_file(&input, &cli.output, &options)?;

    println!(
        "{} {} ({} paragraphs, {} lines, {} warnings)",
        "✓".green().bold(),
        cli.output.display().to_string().cyan(),
        result.paragraph_count(),
        result.line_count(),
        result.warning_count()
    );

    if cli.audit {
        println!("\n{}", report::audit_report(&result.conversion.audit));
    }
    if cli.header_audit {
        println!(
            "\n{}",
            report::header_report(&result.conversion.records, &result.header)
        );
    }

    Ok(())
}
