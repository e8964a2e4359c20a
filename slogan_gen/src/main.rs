// Slogan generator CLI entry point.
//
// Loads the word bank, example corpus and generator config (embedded
// defaults unless paths are given), appends any `--import` corpora, runs one
// generation request and prints the results, optionally filtered and
// re-sorted. `--export` always writes the full result list.
//
// Usage:
//   cargo run -p slogan_gen --bin slogans -- --brand "Aurora Coffee" \
//     --industry coffee --tone bold --length short --count 8 --seed 42
//   cargo run -p slogan_gen --bin slogans -- --surprise -v
//
// Results go to stdout; logs and notices go to stderr.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use slogan_gen::options::{alliteration_letter, normalize_rhyme_tail, split_phrases};
use slogan_gen::surprise::surprise_options;
use slogan_gen::{GenerationOptions, GeneratorConfig, LengthPref, Session, SortMode};
use slogan_lexicon::{Corpus, GENERIC_INDUSTRY, WordBank, default_corpus, default_word_bank};
use slogan_prng::SloganRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "slogans", version, about = "Constraint-driven marketing slogan generator")]
struct Cli {
    #[arg(long, default_value = "", help = "Brand name added to every result")]
    brand: String,
    #[arg(long, default_value = "", help = "Short product description")]
    description: String,
    #[arg(long, default_value = GENERIC_INDUSTRY, help = "Industry id from the word bank")]
    industry: String,
    #[arg(long = "tone", help = "Tone word that may prefix template slogans (repeatable)")]
    tones: Vec<String>,
    #[arg(long, default_value = "medium", help = "short, medium, long or any")]
    length: String,
    #[arg(long, default_value = "", help = "Comma-separated phrases every result must contain")]
    must: String,
    #[arg(long, default_value = "", help = "Comma-separated phrases no result may contain")]
    avoid: String,
    #[arg(long, value_parser = alliteration_letter, help = "Single letter the first words must start with")]
    alliteration: Option<char>,
    #[arg(long, default_value = "", help = "Ending of the last word, e.g. -ow")]
    rhyme: String,
    #[arg(long, default_value_t = 12, help = "Number of results (1-50)")]
    count: usize,
    #[arg(long, help = "RNG seed; taken from the clock when omitted")]
    seed: Option<u64>,
    #[arg(long, help = "Word bank JSON file")]
    word_bank: Option<PathBuf>,
    #[arg(long, help = "Example corpus CSV file (slogan,industry)")]
    corpus: Option<PathBuf>,
    #[arg(long = "import", help = "Extra corpus CSV appended before generating (repeatable)")]
    imports: Vec<PathBuf>,
    #[arg(long, help = "Generator config JSON file")]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = SortMode::Score, help = "score, length, alpha or custom")]
    sort: SortMode,
    #[arg(long, default_value = "", help = "Only show results containing this text")]
    search: String,
    #[arg(long, help = "Write every generated result to this CSV file")]
    export: Option<PathBuf>,
    #[arg(long, help = "Ignore the request flags and use a random preset")]
    surprise: bool,
    #[arg(long, help = "List the word bank's industries and exit")]
    list_industries: bool,
    #[arg(short, long, help = "Debug logging on stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let word_bank = match &cli.word_bank {
        Some(path) => WordBank::from_file(path).with_context(|| format!("loading word bank {}", path.display()))?,
        None => default_word_bank(),
    };

    if cli.list_industries {
        for industry in word_bank.industries() {
            println!("{}\t{}", industry.id, industry.name);
        }
        return Ok(());
    }

    let corpus = match &cli.corpus {
        Some(path) => Corpus::from_file(path).with_context(|| format!("loading corpus {}", path.display()))?,
        None => default_corpus(),
    };
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    let mut session = Session::new(word_bank, corpus, config);
    for path in &cli.imports {
        let added = session
            .import_corpus_file(path)
            .with_context(|| format!("importing corpus {}", path.display()))?;
        eprintln!("Loaded {added} custom rows from {}.", path.display());
    }

    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, "seeded generator");
    let mut rng = SloganRng::new(seed);

    let opts = if cli.surprise {
        surprise_options(session.word_bank(), &mut rng)
    } else {
        options_from_cli(&cli)
    };
    session.generate(&opts, &mut rng);

    let shown = session.view(&cli.search, cli.sort);
    if shown.is_empty() {
        eprintln!("No slogans matched. Try relaxing the constraints.");
    }
    for candidate in &shown {
        println!("★ {:.1}  {}", candidate.score, candidate.text);
    }

    if let Some(path) = &cli.export {
        match session.export() {
            Some(csv) => {
                std::fs::write(path, csv).with_context(|| format!("writing export {}", path.display()))?;
                eprintln!("Exported {} slogans to {}.", session.results().len(), path.display());
            }
            None => eprintln!("No results to export yet."),
        }
    }
    Ok(())
}

fn options_from_cli(cli: &Cli) -> GenerationOptions {
    GenerationOptions {
        brand: cli.brand.trim().to_string(),
        description: cli.description.trim().to_string(),
        industry_id: cli.industry.trim().to_string(),
        tones: cli.tones.clone(),
        length: LengthPref::parse(&cli.length),
        must_include: split_phrases(&cli.must),
        avoid: split_phrases(&cli.avoid),
        alliteration: cli.alliteration,
        rhyme_tail: normalize_rhyme_tail(&cli.rhyme),
        count: cli.count,
    }
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    GeneratorConfig::from_json(&json).with_context(|| format!("parsing config {}", path.display()))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Logs go to stderr. `RUST_LOG` wins unless `-v` forces debug output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
