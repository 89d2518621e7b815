//! Main CLI application for the crossword solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossword_csp::{
    config::{CliOverrides, Inference, OutputFormat, Settings},
    generate::{CrosswordCreator, SolutionValidator, SolveReport},
    logging::init_logger,
    puzzle::{create_example_puzzles, io::structure_to_string, load_crossword},
    utils::{ColorOutput, SolutionFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crossword_csp")]
#[command(about = "Crossword Constraint Satisfaction Solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a crossword structure from a word list
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Structure file (overrides config)
        #[arg(short, long)]
        structure: Option<PathBuf>,

        /// Words file (overrides config)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// File to save the result to (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (overrides config). A `.png` output file implies `png`
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and puzzle files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Check a saved solution against its puzzle
    Validate {
        /// Structure file
        #[arg(short, long)]
        structure: PathBuf,

        /// Words file
        #[arg(short, long)]
        words: PathBuf,

        /// JSON report written by `solve --format json`
        #[arg(long)]
        solution: PathBuf,
    },

    /// Show the variables of a puzzle and how far propagation narrows them
    Analyze {
        /// Structure file
        #[arg(short, long)]
        structure: PathBuf,

        /// Words file
        #[arg(short, long)]
        words: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Png,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Png => OutputFormat::Png,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config, structure, words, output, format, verbose
        } => {
            solve_command(config, structure, words, output, format, verbose)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Validate { structure, words, solution } => {
            validate_command(structure, words, solution)
        }
        Commands::Analyze { structure, words } => {
            analyze_command(structure, words)
        }
    }
}

fn solve_command(
    config_path: PathBuf,
    structure_file: Option<PathBuf>,
    words_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    format: Option<FormatArg>,
    verbose: bool,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Settings::default()
    };

    let format = format.map(OutputFormat::from).or_else(|| {
        output_file
            .as_ref()
            .filter(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png")))
            .map(|_| OutputFormat::Png)
    });
    let cli_overrides = CliOverrides {
        structure_file,
        words_file,
        output_file,
        format,
        verbose,
    };
    settings.merge_with_cli(&cli_overrides);
    init_logger(&settings.logging.level);

    if verbose {
        println!("Configuration:");
        println!("  Structure file: {}", settings.input.structure_file.display());
        println!("  Words file: {}", settings.input.words_file.display());
        println!("  Variable ordering: {:?}", settings.solver.variable_ordering);
        println!("  Value ordering: {:?}", settings.solver.value_ordering);
        println!("  Inference: {:?}", settings.solver.inference);
        println!();
    }

    settings.validate()
        .context("Configuration validation failed")?;

    let mut creator = CrosswordCreator::from_settings(&settings)
        .context("Failed to create crossword solver")?;

    println!("{}", ColorOutput::info(&format!(
        "Filling {} variables from {} words...",
        creator.crossword().variables().len(),
        creator.crossword().words().len()
    )));
    let report = creator.solve_report();

    if report.solved {
        println!("{}", ColorOutput::success(&format!("Solved in {}ms", report.solve_time_ms)));
    } else {
        println!("{}", ColorOutput::warning("No solution."));
    }

    match settings.output.format {
        OutputFormat::Text | OutputFormat::Png => println!(
            "\n{}",
            SolutionFormatter::format_report(creator.crossword(), &report, settings.output.show_coordinates)
        ),
        OutputFormat::Json => println!("{}", report.to_json().context("Failed to serialize report")?),
    }

    if let Some(ref output_file) = settings.output.output_file {
        SolutionFormatter::save_report(
            creator.crossword(),
            &report,
            output_file,
            settings.output.format,
            settings.output.show_coordinates,
        )
        .context("Failed to save report")?;
        println!("{}", ColorOutput::success(&format!("Saved to {}", output_file.display())));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let data_dir = directory.join("data");
    let output_dir = directory.join("output");

    for dir in [&config_dir, &data_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_puzzles(&data_dir)
        .context("Failed to create example puzzles")?;
    println!("Created example puzzles in: {}", data_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut large_config = Settings::default();
    large_config.input.structure_file = PathBuf::from("data/structure1.txt");
    large_config.input.words_file = PathBuf::from("data/words1.txt");
    large_config.solver.inference = Inference::MaintainArcConsistency;
    large_config.output.output_file = Some(PathBuf::from("output/structure1.png"));
    large_config.output.format = OutputFormat::Png;
    large_config.to_file(&examples_dir.join("large.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Add your own structures and word lists to {}", data_dir.display());
    println!("2. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn validate_command(structure_path: PathBuf, words_path: PathBuf, solution_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("Validating solution..."));

    let crossword = load_crossword(&structure_path, &words_path)?;
    let report = SolveReport::load_from_file(&solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    let Some(assignment) = report.assignment.as_ref() else {
        println!("{}", ColorOutput::warning("Report records no solution, nothing to validate"));
        return Ok(());
    };

    let result = SolutionValidator::new(&crossword).validate(assignment);
    println!("{}", SolutionFormatter::format_grid(&crossword, assignment));
    println!(
        "Checked {} variables and {} overlaps",
        result.details.variables_checked, result.details.overlaps_checked
    );

    if result.is_valid {
        println!("{}", ColorOutput::success("Solution is valid!"));
    } else {
        println!("{}", ColorOutput::error("Solution is invalid"));
        for violation in &result.violations {
            println!("  - {}", violation);
        }
    }

    Ok(())
}

fn analyze_command(structure_path: PathBuf, words_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing puzzle..."));

    let crossword = load_crossword(&structure_path, &words_path)?;

    println!("Structure ({}x{}):", crossword.width, crossword.height);
    println!("{}", structure_to_string(&crossword));
    println!("Variables: {}", crossword.variables().len());
    println!("Overlaps: {}", crossword.overlap_count());
    println!("Words: {}", crossword.words().len());

    let mut creator = CrosswordCreator::new(crossword, Default::default());
    let propagation = creator.propagate();

    println!("\nCandidates after node consistency and AC-3:");
    for variable in creator.crossword().variables() {
        println!(
            "  {:<20} {:>6} candidates, {} neighbors",
            variable.to_string(),
            creator.domains().len(variable),
            creator.crossword().neighbors(variable).len()
        );
    }

    println!("\n{}", creator.statistics());
    match propagation {
        Ok(()) => println!("{}", ColorOutput::success("Propagation left every variable with candidates")),
        Err(wipeout) => println!("{}", ColorOutput::warning(&format!("Unsolvable: {}", wipeout))),
    }

    Ok(())
}
