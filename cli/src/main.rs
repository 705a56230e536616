use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dotenvy::dotenv;
use thiserror::Error;

use taizhou_backend::app_settings::EditionSettings;
use taizhou_backend::book_names::find_book_no;
use taizhou_backend::corpus::Corpus;
use taizhou_backend::cross_reference::search;
use taizhou_backend::edition_files::expand_inputs;
use taizhou_backend::logger;
use taizhou_backend::punctuation::check_punctuation;
use taizhou_backend::tally::{Tally, TallyMode, han_to_lat, lat_to_han, tally_corpus};
use taizhou_backend::template::generate_translation_file;

#[derive(Error, Debug)]
enum LookupError {
    #[error("unknown book: {0}")]
    UnknownBook(String),
    #[error("no verse {book} {chapter}:{verse} in the loaded files")]
    NoSuchVerse {
        book: String,
        chapter: usize,
        verse: usize,
    },
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Taizhou romanized New Testament edition tools", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Optional path to a JSON settings file.
    /// If not provided, the TAIZHOU_SETTINGS environment variable will be used.
    #[arg(long, global = true, value_name = "FILE_PATH", env = "TAIZHOU_SETTINGS")]
    settings: Option<PathBuf>,

    /// Print log messages to stderr
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    /// Log level: silent, error, warn, info or debug.
    /// Overrides the LOG_LEVEL environment variable.
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and check the structure of edition files
    #[command(arg_required_else_help = true)]
    Validate {
        /// Edition files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Check punctuation spacing of romanized source files
    #[command(arg_required_else_help = true)]
    Punct {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Print one verse pair. Verse 0 is the chapter overview.
    #[command(arg_required_else_help = true)]
    Verse {
        /// Book number in load order, or a book name
        book: String,
        chapter: usize,
        verse: usize,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Print the canonical number of a book name or abbreviation
    #[command(arg_required_else_help = true)]
    Book {
        name: String,
    },

    /// Count romanized/script correspondences
    #[command(arg_required_else_help = true)]
    Tally {
        /// Count single syllables against single characters instead of words
        #[arg(long, default_value_t = false)]
        chars: bool,

        /// Save the full tally as JSON
        #[arg(long, value_name = "FILE_PATH")]
        out: Option<PathBuf>,

        /// Number of rows to print
        #[arg(long)]
        top: Option<usize>,

        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Find verses where a word is translated by the given characters
    #[command(arg_required_else_help = true)]
    Search {
        lat: String,
        han: String,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Generate a translation template from a romanized source file
    #[command(arg_required_else_help = true)]
    Template {
        origin: PathBuf,

        #[arg(long, value_name = "FILE_PATH")]
        target: Option<PathBuf>,

        /// Word tally JSON used to pre-fill translations
        #[arg(long, value_name = "FILE_PATH")]
        tally: Option<PathBuf>,
    },

    /// Render romanized text in characters with a word tally
    #[command(name = "lat2han", arg_required_else_help = true)]
    LatToHan {
        text: String,
        #[arg(long, value_name = "FILE_PATH")]
        tally: PathBuf,
    },

    /// Render characters in romanized syllables with a character tally
    #[command(name = "han2lat", arg_required_else_help = true)]
    HanToLat {
        text: String,
        #[arg(long, value_name = "FILE_PATH")]
        tally: PathBuf,
    },
}

fn load_corpus(inputs: &[PathBuf], settings: &EditionSettings) -> Result<Corpus> {
    let paths = expand_inputs(inputs, &settings.source_extension)?;
    let corpus = Corpus::load_files(&paths)?;
    Ok(corpus)
}

fn validate(inputs: &[PathBuf], settings: &EditionSettings) -> Result<()> {
    let corpus = load_corpus(inputs, settings)?;
    let stats = corpus.stats();
    println!("{}", "OK".green());
    println!(
        "{} books, {} chapters, {} verses, {} overviews, {} footnotes",
        stats.books, stats.chapters, stats.verses, stats.overviews, stats.footnotes
    );
    Ok(())
}

fn punct(inputs: &[PathBuf], settings: &EditionSettings) -> Result<()> {
    let paths = expand_inputs(inputs, &settings.source_extension)?;
    let mut total = 0;
    for path in &paths {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let warnings = check_punctuation(text.lines());
        for w in &warnings {
            println!("{} {}", format!("{}:", path.display()).bold(), w.to_string().yellow());
        }
        total += warnings.len();
    }
    println!("{} warnings", total);
    Ok(())
}

fn print_verse(book: &str, chapter: usize, verse: usize, inputs: &[PathBuf], settings: &EditionSettings) -> Result<()> {
    let corpus = load_corpus(inputs, settings)?;
    if corpus.resolve_book(book).is_none() {
        return Err(LookupError::UnknownBook(book.to_string()).into());
    }
    let v = corpus
        .get_verse_by_ref(book, chapter, verse)
        .ok_or_else(|| LookupError::NoSuchVerse {
            book: book.to_string(),
            chapter,
            verse,
        })?;
    println!("{}", v.lat);
    println!("{}", v.han);
    Ok(())
}

fn print_book_no(name: &str) -> Result<()> {
    let no = find_book_no(name).ok_or_else(|| LookupError::UnknownBook(name.to_string()))?;
    println!("{}", no);
    Ok(())
}

fn tally(chars: bool, out: Option<&Path>, top: Option<usize>, inputs: &[PathBuf], settings: &EditionSettings) -> Result<()> {
    let corpus = load_corpus(inputs, settings)?;
    let mode = if chars { TallyMode::Characters } else { TallyMode::Words };
    let tally = tally_corpus(&corpus, mode)?;

    for (pair, count) in tally.most_common().into_iter().take(top.unwrap_or(settings.tally_top)) {
        println!("{}\t{}\t{}", count, pair.lat, pair.han);
    }
    println!("{} distinct, {} total", tally.len(), tally.total());

    if let Some(path) = out {
        tally.save_json(path)?;
        println!("Saved: {}", path.display());
    }
    Ok(())
}

fn cross_reference(lat: &str, han: &str, inputs: &[PathBuf], settings: &EditionSettings) -> Result<()> {
    let corpus = load_corpus(inputs, settings)?;
    let results = search(&corpus, lat, han, &settings.search_markers)?;

    let mut occurrences = 0;
    for r in &results {
        println!(
            "{}",
            format!("{} {}:{} ({}, line {})", r.book_han, r.chapter_no, r.verse_no, r.book_no, r.line_no).bold()
        );
        println!("{}", r.lat);
        println!("{}", r.han);
        println!();
        occurrences += r.occurrences;
    }
    println!("{} verses, {} occurrences", results.len(), occurrences);
    Ok(())
}

fn template(origin: &Path, target: Option<&Path>, tally_path: Option<&Path>, settings: &EditionSettings) -> Result<()> {
    let tally = match tally_path {
        Some(p) => Some(Tally::load_json(p)?),
        None => None,
    };
    let written = generate_translation_file(origin, target, tally.as_ref(), settings)?;
    println!("Done, see {}", written.display());
    Ok(())
}

fn main() {
    // The .env file may define TAIZHOU_SETTINGS or TAIZHOU_DIR.
    dotenv().ok();

    let cli = Cli::parse();

    logger::init_logger(cli.verbose);

    if let Some(level) = &cli.log_level {
        if !logger::set_log_level_str(level) {
            eprintln!("{} unknown log level: {}", "Error:".red(), level);
            exit(1);
        }
    }
    logger::debug(&format!("Log level: {}", logger::get_log_level().as_str()));

    let settings = match EditionSettings::load_or_default(cli.settings.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            exit(1);
        }
    };

    let command_result = match cli.command {
        Commands::Validate { inputs } => validate(&inputs, &settings),

        Commands::Punct { inputs } => punct(&inputs, &settings),

        Commands::Verse { book, chapter, verse, inputs } => {
            print_verse(&book, chapter, verse, &inputs, &settings)
        }

        Commands::Book { name } => print_book_no(&name),

        Commands::Tally { chars, out, top, inputs } => {
            tally(chars, out.as_deref(), top, &inputs, &settings)
        }

        Commands::Search { lat, han, inputs } => cross_reference(&lat, &han, &inputs, &settings),

        Commands::Template { origin, target, tally } => {
            template(&origin, target.as_deref(), tally.as_deref(), &settings)
        }

        Commands::LatToHan { text, tally } => {
            Tally::load_json(&tally).map(|t| println!("{}", lat_to_han(&text, &t)))
        }

        Commands::HanToLat { text, tally } => {
            Tally::load_json(&tally).map(|t| println!("{}", han_to_lat(&text, &t)))
        }
    };

    if let Err(e) = command_result {
        eprintln!("{} {:#}", "Error:".red(), e);
        exit(1);
    }
}
