mod logger;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pdf_jigs::{JigKind, JigOptions, Unit};
use std::path::{Path, PathBuf};

use logger::StderrLogger;

#[derive(Parser)]
#[command(name = "pjig", about = "Printable rulers and rivet jigs for laser cutting", version)]
struct Cli {
    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Make a ruler for laser cutting
    Ruler {
        /// Height of the ruler in units
        #[arg(short = 'H', long)]
        height: f64,

        /// Width of the ruler in units
        #[arg(short, long)]
        width: u32,

        /// Unit of height and width
        #[arg(short, long, alias = "units", default_value = "in", value_enum)]
        unit: UnitArg,

        /// Directory the PDF is written into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Make rivet hole jigs for the whole size sweep
    Jigs {
        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Make belt loop jigs for the whole size sweep
    BeltJigs {
        #[command(flatten)]
        batch: BatchArgs,
    },
}

#[derive(clap::Args)]
struct BatchArgs {
    /// Directory the PDFs are written into (created if missing)
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// JSON file overriding the default jig geometry
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the pages that would be generated without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    In,
    Inches,
    Cm,
    Centimeters,
}

impl UnitArg {
    /// Spelling used in the output file name
    fn label(self) -> &'static str {
        match self {
            UnitArg::In => "in",
            UnitArg::Inches => "inches",
            UnitArg::Cm => "cm",
            UnitArg::Centimeters => "centimeters",
        }
    }
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::In | UnitArg::Inches => Self::Inch,
            UnitArg::Cm | UnitArg::Centimeters => Self::Centimeter,
        }
    }
}

fn load_options(config: Option<&Path>) -> Result<JigOptions> {
    let options = match config {
        Some(path) => {
            log::info!("loading jig options from {}", path.display());
            JigOptions::load(path)?
        }
        None => JigOptions::default(),
    };
    options.validate()?;
    Ok(options)
}

fn run_jigs(kind: JigKind, batch: BatchArgs) -> Result<()> {
    let options = load_options(batch.config.as_deref())?;

    if batch.dry_run {
        let templates = pdf_jigs::compose_batch(kind, &options)?;
        println!("{}:", kind.title());
        for (size, template) in &templates {
            let (width, height) = template.page_size();
            println!(
                "  {:<6} {} x {} {}  ticks: {:>3}  holes: {:>3}  label: {}",
                size,
                width,
                height,
                options.unit,
                template.tick_count(),
                template.holes.len(),
                template.label_text()
            );
        }
        println!("  {} page(s), nothing written", templates.len());
        return Ok(());
    }

    let report = pdf_jigs::run_batch(kind, &options, &batch.output_dir)?;
    println!(
        "Generated {} {} → {}",
        report.sizes.len(),
        kind.title().to_lowercase(),
        report.combined.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Ruler {
            height,
            width,
            unit,
            output_dir,
        } => {
            let path = pdf_jigs::write_ruler(width, height, unit.into(), unit.label(), &output_dir)?;
            println!("Ruler → {}", path.display());
        }

        Commands::Jigs { batch } => run_jigs(JigKind::Rivet, batch)?,

        Commands::BeltJigs { batch } => run_jigs(JigKind::BeltLoop, batch)?,
    }

    Ok(())
}
