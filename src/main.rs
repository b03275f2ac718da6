use clap::{Parser, Subcommand};
use docket::{generate_invoice, InvoiceError, InvoiceSpec};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Render paginated PDF invoices.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an invoice described by a JSON file
    Render {
        /// Invoice JSON
        input: PathBuf,
        /// Where to write the PDF
        #[arg(short, long, default_value = "invoice.pdf")]
        output: PathBuf,
        /// Logo image, overriding the one named in the JSON
        #[arg(long)]
        logo: Option<PathBuf>,
    },
    /// Render the built-in sample invoice
    Demo {
        #[arg(short, long, default_value = "demo.pdf")]
        output: PathBuf,
        /// Number of line items
        #[arg(long, default_value_t = 101)]
        rows: usize,
        #[arg(long)]
        logo: Option<PathBuf>,
    },
}

fn write_pdf(spec: &InvoiceSpec, output: &Path) -> Result<(), InvoiceError> {
    let file = BufWriter::new(File::create(output)?);
    generate_invoice(spec, file)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn main() -> Result<(), InvoiceError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("docket=info")).init();

    let args = Args::parse();
    match args.command {
        Command::Render { input, output, logo } => {
            log::info!("Loading invoice from {}", input.display());
            let mut spec = InvoiceSpec::from_path(&input)?;
            if logo.is_some() {
                spec.logo = logo;
            }
            write_pdf(&spec, &output)
        }
        Command::Demo { output, rows, logo } => {
            let mut spec = InvoiceSpec::demo(rows);
            spec.logo = logo;
            write_pdf(&spec, &output)
        }
    }
}
