use clap::{Parser, Subcommand};
use cw_app::{
    AppError, AppResult, RunReport, RunRequest, case_service, render_convergence_chart,
    result_lines, run, series_csv, summary_lines,
};
use cw_case::Case;
use cw_flow::PipeMaterial;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cw-cli")]
#[command(about = "Darcy friction factor from the Colebrook-White equation (secant method)", long_about = None)]
struct Cli {
    /// Log solver progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a case and print the friction factor
    Solve {
        /// Path to a YAML or JSON case file (reference pipe when omitted)
        case_path: Option<PathBuf>,
        /// Use the catalog roughness of this material instead of epsilon
        #[arg(short, long)]
        material: Option<PipeMaterial>,
        /// Also write the convergence chart (SVG)
        #[arg(long)]
        plot: Option<PathBuf>,
        /// Also write the iterate series as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Validate case file syntax and values
    Validate {
        /// Path to a YAML or JSON case file
        case_path: PathBuf,
    },
    /// Write the reference pipe case to a file
    Init {
        /// Output path (.yaml, .yml or .json)
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Export the iterate sequence as CSV
    ExportSeries {
        /// Path to a YAML or JSON case file (reference pipe when omitted)
        case_path: Option<PathBuf>,
        #[arg(short, long)]
        material: Option<PipeMaterial>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the convergence chart
    Plot {
        /// Path to a YAML or JSON case file (reference pipe when omitted)
        case_path: Option<PathBuf>,
        #[arg(short, long)]
        material: Option<PipeMaterial>,
        /// Output SVG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// List pipe materials and their typical roughness
    Materials,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Solve {
            case_path,
            material,
            plot,
            csv,
        } => cmd_solve(
            case_path.as_deref(),
            material,
            plot.as_deref(),
            csv.as_deref(),
        ),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::ExportSeries {
            case_path,
            material,
            output,
        } => cmd_export_series(case_path.as_deref(), material, output.as_deref()),
        Commands::Plot {
            case_path,
            material,
            output,
        } => cmd_plot(case_path.as_deref(), material, &output),
        Commands::Materials => {
            cmd_materials();
            Ok(())
        }
    };

    if let Err(err) = &result {
        if let Some(hint) = err.hint() {
            eprintln!("hint: {hint}");
        }
    }
    result
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn solve_case(case_path: Option<&Path>, material: Option<PipeMaterial>) -> AppResult<RunReport> {
    let case = case_service::resolve_case(case_path)?;
    run(&RunRequest {
        case: &case,
        material,
    })
}

fn cmd_solve(
    case_path: Option<&Path>,
    material: Option<PipeMaterial>,
    plot: Option<&Path>,
    csv: Option<&Path>,
) -> AppResult<()> {
    let report = solve_case(case_path, material)?;

    for line in summary_lines(&report) {
        println!("{}", line);
    }
    if let Some(warning) = &report.solution.regime_warning {
        println!("\nWarning: {}", warning);
    }
    println!();
    for line in result_lines(&report.solution) {
        println!("{}", line);
    }

    if let Some(path) = csv {
        std::fs::write(path, series_csv(&report.solution))?;
        println!("✓ Exported iterate series to {}", path.display());
    }
    if let Some(path) = plot {
        render_convergence_chart(path, &report.solution)?;
        println!("✓ Convergence chart written to {}", path.display());
    }
    Ok(())
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = case_service::load_case(case_path)?;
    case_service::validate_case(&case)?;
    println!("✓ Case '{}' is valid", case.display_name());
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    case_service::save_case(path, &Case::reference())?;
    println!("✓ Wrote reference case to {}", path.display());
    Ok(())
}

fn cmd_export_series(
    case_path: Option<&Path>,
    material: Option<PipeMaterial>,
    output: Option<&Path>,
) -> AppResult<()> {
    let report = solve_case(case_path, material)?;
    let csv = series_csv(&report.solution);

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} estimates to {}",
            report.solution.trace.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_plot(
    case_path: Option<&Path>,
    material: Option<PipeMaterial>,
    output: &Path,
) -> AppResult<()> {
    let report = solve_case(case_path, material)?;
    render_convergence_chart(output, &report.solution)?;
    println!(
        "✓ Convergence chart ({} estimates) written to {}",
        report.solution.trace.len(),
        output.display()
    );
    Ok(())
}

fn cmd_materials() {
    println!("Pipe materials (typical absolute roughness):");
    for material in PipeMaterial::ALL {
        println!(
            "  {:<18} {:>8.4} mm",
            material.name(),
            material.roughness().value * 1000.0
        );
    }
}
