//! word-o-mat - CLI
//!
//! Generates test words for type design from a dictionary, filtered by length,
//! character set, required letters and patterns.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::{Path, PathBuf};
use wordomat::{
    commands::{Delivery, Session, load_catalog, select_dictionary},
    core::{CasePolicy, MatchMode},
    generator::{AttemptBudget, WordSampler},
    host::{FontProfile, OutputSurface},
    input::parse_count_or,
    output::{
        ConsoleNotifier, ConsoleSurface, FileSurface, formatters::settings_summary, print_catalog,
        print_console_words, print_presets, print_run_summary,
    },
    settings::{CharsetMode, Settings},
    wordlists::{SYSTEM_WORD_LIST, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordomat",
    about = "Generate test words for type design from a dictionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionaries folder holding <writing system>/<language>.txt files
    #[arg(short = 'd', long, global = true)]
    dict_dir: Option<PathBuf>,

    /// System word list, offered as the User/user dictionary
    #[arg(long, global = true, default_value = SYSTEM_WORD_LIST)]
    system_words: PathBuf,

    /// Do not load the system word list
    #[arg(long, global = true)]
    no_system_words: bool,

    /// Log level: error, warn (default), info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Number of words to generate
    #[arg(short = 'n', long, global = true, default_value = "20")]
    count: String,

    /// Minimum word length
    #[arg(long, global = true, default_value = "3")]
    min: String,

    /// Maximum word length
    #[arg(long, global = true, default_value = "15")]
    max: String,

    /// Case: keep (default), lower, capitalize, caps, ransom
    #[arg(short, long, global = true, default_value = "keep")]
    case: String,

    /// Characters: any, font (default), selection, mark:<color>
    #[arg(long, global = true, default_value = "font")]
    charset: String,

    /// Match mode: text or pattern (default: pattern if --pattern is given)
    #[arg(short, long, global = true)]
    mode: Option<String>,

    /// Regular expression words must match (pattern mode)
    #[arg(short, long, global = true)]
    pattern: Option<String>,

    /// Letters every word must contain, comma or space separated
    #[arg(short, long, global = true)]
    require: Option<String>,

    /// Letter group: words need at least one of these (or @preset)
    #[arg(long, global = true)]
    group1: Option<String>,

    /// Second letter group
    #[arg(long, global = true)]
    group2: Option<String>,

    /// Third letter group
    #[arg(long, global = true)]
    group3: Option<String>,

    /// Reject words with repeated characters
    #[arg(long, global = true)]
    no_repeat: bool,

    /// Output one word per line, sorted by width
    #[arg(short, long, global = true)]
    list: bool,

    /// Writing system of the dictionary (default: first available)
    #[arg(long, global = true)]
    ws: Option<String>,

    /// Language of the dictionary (default: first available)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Custom word list file, used instead of the dictionaries
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Font profile describing the open font
    #[arg(short, long, global = true)]
    font: Option<PathBuf>,

    /// Write words to this file instead of the console
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Allow up to count * FACTOR draws instead of one per dictionary word
    #[arg(long, global = true)]
    attempts_factor: Option<usize>,

    /// Number of batches to generate
    #[arg(long, global = true, default_value = "1")]
    runs: usize,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Generate words (default)
    Make,

    /// List available dictionaries
    Dictionaries,

    /// List letter group presets
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger_builder = env_logger::Builder::from_default_env();
    logger_builder.filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn));
    logger_builder.init();

    // Default to Make if no command given
    match cli.command.unwrap_or(Commands::Make) {
        Commands::Make => run_make_command(&cli),
        Commands::Dictionaries => run_dictionaries_command(&cli),
        Commands::Presets => {
            print_presets();
            Ok(())
        }
    }
}

/// Build typed settings from the command line
fn settings_from_cli(cli: &Cli) -> Result<Settings> {
    let case = CasePolicy::from_name(&cli.case)
        .ok_or_else(|| anyhow!("Unknown case policy '{}'", cli.case))?;
    let charset = CharsetMode::from_name(&cli.charset)
        .ok_or_else(|| anyhow!("Unknown character set '{}'", cli.charset))?;
    let match_mode = match (&cli.mode, &cli.pattern) {
        (Some(mode), _) => {
            MatchMode::from_name(mode).ok_or_else(|| anyhow!("Unknown match mode '{mode}'"))?
        }
        (None, Some(_)) => MatchMode::Pattern,
        (None, None) => MatchMode::Text,
    };

    let field = |value: &Option<String>| value.clone().unwrap_or_default();

    Ok(Settings {
        word_count: parse_count_or(&cli.count, Settings::DEFAULT_WORD_COUNT),
        min_length: parse_count_or(&cli.min, Settings::DEFAULT_MIN_LENGTH),
        max_length: parse_count_or(&cli.max, Settings::DEFAULT_MAX_LENGTH),
        case,
        charset,
        match_mode,
        required_letters: field(&cli.require),
        required_groups: [field(&cli.group1), field(&cli.group2), field(&cli.group3)],
        pattern: field(&cli.pattern),
        ban_repetitions: cli.no_repeat,
        list_output: cli.list,
    })
}

/// Load the word list to sample from
fn load_dictionary(cli: &Cli) -> Result<Vec<String>> {
    if let Some(path) = &cli.wordlist {
        return load_from_file(path).with_context(|| "Failed to load custom word list");
    }

    let report = load_catalog(cli.dict_dir.as_deref(), system_words(cli), true)?;
    let (ws, lang, words) =
        select_dictionary(&report.catalog, cli.ws.as_deref(), cli.lang.as_deref())?;
    info!("using dictionary {ws}/{lang} ({} words)", words.len());
    Ok(words.to_vec())
}

fn run_make_command(cli: &Cli) -> Result<()> {
    let settings = settings_from_cli(cli)?;
    let dictionary = load_dictionary(cli)?;
    let font = cli
        .font
        .as_deref()
        .map(FontProfile::load)
        .transpose()
        .context("Failed to load font profile")?;

    let budget = cli
        .attempts_factor
        .map_or(AttemptBudget::DictionarySize, |factor| AttemptBudget::Scaled { factor });
    let sampler = WordSampler::new(budget);
    info!("{}", settings_summary(settings.case, &settings.charset, sampler.budget()));
    let mut session = Session::new(sampler);
    let mut notifier = ConsoleNotifier::new();
    let mut surface: Box<dyn OutputSurface> = match &cli.output {
        Some(path) => Box::new(FileSurface::new(path)),
        None => Box::new(ConsoleSurface),
    };
    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    for run in 1..=cli.runs.max(1) {
        debug!("run {run}");
        let outcome = session.make_words(
            &settings,
            &dictionary,
            font.as_ref(),
            surface.as_mut(),
            &mut notifier,
            &mut rng,
        )
        .map_err(|_| anyhow!("Aborted because of errors"))?;

        if outcome.delivery == Delivery::Console {
            print_console_words(&outcome.text);
        }
        if outcome.delivery != Delivery::Nothing {
            print_run_summary(&outcome, settings.word_count);
        }
    }

    debug!("{} notices shown", notifier.shown());
    Ok(())
}

/// The system word list to load, unless disabled
fn system_words(cli: &Cli) -> Option<&Path> {
    (!cli.no_system_words).then_some(cli.system_words.as_path())
}

fn run_dictionaries_command(cli: &Cli) -> Result<()> {
    let report = load_catalog(cli.dict_dir.as_deref(), system_words(cli), true)?;
    print_catalog(&report.catalog, &report.failures);
    Ok(())
}
