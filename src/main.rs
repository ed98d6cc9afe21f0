use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use spellvar::cli::output::{self, OutputFormat};
use spellvar::{analyze, source, Config, Dictionary};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "spellvar")]
#[command(version, about = "Detect British vs American English spelling variants", long_about = None)]
struct Cli {
    /// Text or PDF files to analyze
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Analyze a string given directly on the command line
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// Fetch a web page and analyze its visible text
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Spelling-pair dictionary file (CSV: british,american)
    #[arg(short, long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Request timeout for URL fetches, in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List the loaded spelling pairs
    Show,
    /// Show dictionary source and pair count
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellvar", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.dictionary.clone(), cli.timeout)?;
    let dictionary = load_dictionary(&config);

    if let Some(command) = cli.command {
        return handle_command(command, &config, &dictionary);
    }

    let colored = !cli.no_color;
    let has_input = !cli.files.is_empty() || cli.text.is_some() || cli.url.is_some();
    if !has_input {
        anyhow::bail!("No input specified. Pass files, --text or --url; see --help for usage.");
    }

    if dictionary.is_empty() {
        eprintln!(
            "{} spelling dictionary is empty; every analysis will report zero matches",
            "warning:".yellow().bold()
        );
    }

    if let Some(text) = &cli.text {
        let result = analyze(text, &dictionary);
        output::print_report("(direct input)", &result, colored, &cli.format);
    }

    // Extracted PDFs are retained here until they expire, so a later
    // viewer can still open what was analyzed.
    let mut pdf_store = source::PdfStore::new(Duration::from_secs(config.pdf_expiry_secs))?;

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        match source::read_file(file_path, &config, &mut pdf_store) {
            Ok(text) => {
                let result = analyze(&text, &dictionary);
                output::print_report(
                    &file_path.display().to_string(),
                    &result,
                    colored,
                    &cli.format,
                );
            }
            Err(e) => eprintln!("Error: {}: {}", file_path.display(), e),
        }
    }

    if let Some(url) = &cli.url {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Fetching {}...", url));

        let fetched = source::url::fetch(url, &config);
        pb.finish_and_clear();

        match fetched {
            Ok(text) => {
                let result = analyze(&text, &dictionary);
                output::print_report(url, &result, colored, &cli.format);
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    pdf_store.sweep_expired();

    Ok(())
}

fn load_dictionary(config: &Config) -> Dictionary {
    match &config.dictionary {
        Some(path) => Dictionary::load(path),
        None => Dictionary::builtin(),
    }
}

fn handle_command(command: Commands, config: &Config, dictionary: &Dictionary) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::Show => {
                for pair in dictionary.pairs() {
                    println!("{},{}", pair.british, pair.american);
                }
            }
            DictCommands::Info => {
                let source = match &config.dictionary {
                    Some(path) => path.display().to_string(),
                    None => "(built-in)".to_string(),
                };
                println!("Source: {}", source);
                println!("Pairs:  {}", dictionary.len());
            }
        },
    }
    Ok(())
}
