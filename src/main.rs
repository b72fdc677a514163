use clap::{Parser, Subcommand};
use folio::imaging::RustBackend;
use folio::logger::ConsoleLogger;
use folio::{catalog, config, generate, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Lay out artist project folders into a print-ready PDF portfolio")]
#[command(long_about = "\
Lay out artist project folders into a print-ready PDF portfolio

Each subdirectory of the input is a project: a project.json descriptor plus
its images. Projects are ordered by numeric prefix, then by name.

Input structure:

  portfolio/
  ├── config.json                  # Title, author, page size, fonts (optional)
  ├── 010-Night-Walks/             # Project (numbered = explicit order)
  │   ├── project.json             # Title, medium, year, credits, images, layout
  │   ├── 001.jpg
  │   └── 002.jpg
  └── 020-Tidal/
      ├── project.json
      └── hero.png

Page types in a project layout:
  info:    title, medium, year, credits, description, link, images
  gallery: one, two stacked, or a grid of images
  full:    a single image filling the page

Projects without a layout get an info page and then two images per page.

Run 'folio gen-config' to print a config.json with every option.")]
#[command(version)]
struct Cli {
    /// Input directory holding config.json and the project folders
    #[arg(long, default_value = ".", global = true)]
    input: PathBuf,

    /// Config file name, relative to the input directory
    #[arg(long, default_value = "config.json", global = true)]
    config: String,

    /// Print debug logging to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the portfolio PDF
    Build {
        /// Output file (overrides `output` in config.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Scan the input and list projects and images without writing anything
    Check,
    /// Print a stock config.json with all options
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let logger = ConsoleLogger::new(cli.debug).init()?;

    match cli.command {
        Command::Build { output: out } => {
            println!("==> Scanning {}", cli.input.display());
            let portfolio = scan::scan(&cli.input, &cli.config)?;
            let out = out.unwrap_or_else(|| PathBuf::from(&portfolio.config.output));

            println!(
                "==> Laying out {} projects \u{2192} {}",
                portfolio.projects.len(),
                out.display()
            );
            let summary = generate::generate(&portfolio, &out, &RustBackend::new())?;
            output::print_generate_output(&summary);

            match logger.warning_count() {
                0 => println!("==> Build complete: {}", out.display()),
                n => println!(
                    "==> Build complete with {n} warnings: {}",
                    out.display()
                ),
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.input.display());
            let portfolio = scan::scan(&cli.input, &cli.config)?;
            let backend = RustBackend::new();
            let records: Vec<_> = portfolio
                .projects
                .iter()
                .map(|project| {
                    catalog::resolve(
                        project,
                        &portfolio.project_dir(project),
                        portfolio.config.image_border.enabled,
                        &backend,
                    )
                })
                .collect();
            output::print_check_output(&portfolio, &records);
            match logger.warning_count() {
                0 => println!("==> Input is valid"),
                n => println!("==> Found {n} problems"),
            }
        }
        Command::GenConfig => {
            println!("{}", config::stock_config_json());
        }
    }

    Ok(())
}
