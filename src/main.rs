use clap::{Parser, ValueEnum};
use log::{error, info};
use std::io;
use std::path::PathBuf;
use word_frequency::constants::{DEFAULT_SOURCE_PATH, DEFAULT_TOP_N};
use word_frequency::{
    load_document, read_document, sort_token_frequencies, Document, Error, StopWordFilter,
    StopWordStage, WordFrequencyConfig, WordFrequencyProcessor, WordFrequencyReport,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StageArg {
    Before,
    After,
    #[value(name = "none")]
    Disabled,
}

impl From<StageArg> for StopWordStage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::Before => StopWordStage::BeforeCounting,
            StageArg::After => StopWordStage::AfterCounting,
            StageArg::Disabled => StopWordStage::Disabled,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Count word frequency in a text document", long_about = None)]
struct Args {
    /// Text file to analyze (`.gz` is decompressed); `-` reads stdin
    #[arg(default_value = DEFAULT_SOURCE_PATH)]
    path: PathBuf,

    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// CSV file replacing the built-in stop words
    #[arg(long)]
    stop_words: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = StageArg::Before)]
    stop_word_stage: StageArg,

    /// Print the normalized tokens
    #[arg(long)]
    show_tokens: bool,

    /// Print the full frequency map
    #[arg(long)]
    show_frequencies: bool,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let stop_word_filter = match &args.stop_words {
        Some(path) => StopWordFilter::from_csv_path(path)?,
        None => StopWordFilter::default(),
    };

    let config = WordFrequencyConfig {
        top_n: args.top,
        stop_word_stage: args.stop_word_stage.into(),
    };

    let document = load(args)?;
    info!("Loaded {} bytes", document.len());

    let report = WordFrequencyProcessor::new(&config, &stop_word_filter).process_document(&document);

    print_report(args, &report);

    Ok(())
}

fn load(args: &Args) -> Result<Document, Error> {
    if args.path.as_os_str() == "-" {
        read_document(io::stdin().lock())
    } else {
        load_document(&args.path)
    }
}

fn print_report(args: &Args, report: &WordFrequencyReport) {
    if args.show_tokens {
        println!("Tokens: {:?}", report.tokens);
    }

    println!("Top {} words:", args.top);
    for (token, frequency) in &report.top_tokens {
        println!("{}: {}", token, frequency);
    }

    println!("Total words: {}", report.total_token_count());

    if args.show_frequencies {
        println!("Frequencies:");
        for (token, frequency) in sort_token_frequencies(&report.frequencies) {
            println!("{}: {}", token, frequency);
        }
    }
}
