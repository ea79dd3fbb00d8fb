//! resume_pdf - render a résumé JSON file to a one-page PDF.
//!
//! Text fields are passed through the obfuscation cipher keyed by the
//! positional passphrase before layout, so an obfuscated `resume.json` is
//! restored with the passphrase it was produced with.

use clap::Parser;
use resume_pdf::config::RenderConfig;
use resume_pdf::fonts::FontRegistry;
use resume_pdf::resume::Resume;
use std::path::PathBuf;
use std::process::ExitCode;

/// Render a résumé JSON file to PDF.
#[derive(Parser, Debug)]
#[command(name = "resume_pdf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Passphrase for the field obfuscation cipher
    #[arg(default_value = "")]
    passphrase: String,

    /// Résumé JSON input
    #[arg(short, long, default_value = "resume.json")]
    input: PathBuf,

    /// PDF output path
    #[arg(short, long, default_value = "resume.pdf")]
    output: PathBuf,

    /// Directory of AFM files overriding the built-in metrics
    #[arg(long = "afm-dir")]
    afm_dir: Option<PathBuf>,

    /// Footer line printed at the bottom of the page
    #[arg(long)]
    footer: Option<String>,

    /// Obfuscate the input with the passphrase and write it back as JSON
    /// instead of rendering
    #[arg(long)]
    obfuscate_only: bool,
}

fn run(args: &Args) -> resume_pdf::Result<()> {
    let mut resume = Resume::from_file(&args.input)?;
    resume.obfuscate(&args.passphrase)?;

    if args.obfuscate_only {
        std::fs::write(&args.output, resume.to_json()?)?;
        log::info!("wrote obfuscated JSON to {}", args.output.display());
        return Ok(());
    }

    let mut fonts = FontRegistry::with_base14()?;
    if let Some(dir) = &args.afm_dir {
        let loaded = fonts.load_dir(dir)?;
        log::info!("loaded {} AFM files from {}", loaded, dir.display());
    }

    let mut config = RenderConfig::default();
    if let Some(footer) = &args.footer {
        config = config.with_footer(footer.as_str());
    }

    let doc = resume.to_pdf(&fonts, &config)?;
    doc.save(&args.output)?;
    log::info!("wrote {} objects to {}", doc.len(), args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
