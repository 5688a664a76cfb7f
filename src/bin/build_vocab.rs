use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wav2vec2_vocab::{Transcript, VocabConfig, VocabularyPipelineBuilder};

#[path = "build_vocab/transcript_reader.rs"]
mod transcript_reader;

use transcript_reader::{read_transcripts, InputFormat};

#[derive(Debug, Parser)]
#[command(name = "build_vocab")]
#[command(about = "Build a CTC character vocabulary from transcript files")]
struct Args {
    /// Training transcripts.
    #[arg(long, env = "VOCAB_TRAIN", required = true)]
    train: Vec<PathBuf>,
    /// Test transcripts; their characters are included in the vocabulary too.
    #[arg(long, env = "VOCAB_TEST")]
    test: Vec<PathBuf>,
    #[arg(long, env = "VOCAB_FORMAT", value_enum, default_value_t = InputFormat::Text)]
    format: InputFormat,
    #[arg(long, env = "VOCAB_TEXT_FIELD", default_value = "text")]
    text_field: String,
    #[arg(long, env = "VOCAB_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,
    /// JSON file overriding reserved tokens and the ignored character set.
    #[arg(long, env = "VOCAB_CONFIG")]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => VocabConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => VocabConfig::default(),
    }
    .with_output_dir(&args.out_dir);

    let pipeline = VocabularyPipelineBuilder::new(config)
        .build()
        .map_err(|err| format!("Invalid configuration: {err}"))?;

    let train = read_all(&args.train, args.format, &args.text_field)?;
    let test = read_all(&args.test, args.format, &args.text_field)?;
    tracing::info!(
        train = train.len(),
        test = test.len(),
        "build_vocab: loaded transcripts"
    );

    let prepared = pipeline
        .prepare(&[train.as_slice(), test.as_slice()])
        .map_err(|err| format!("Failed to build vocabulary: {err}"))?;
    let paths = pipeline
        .persist(&prepared)
        .map_err(|err| format!("Failed to write vocabulary: {err}"))?;

    println!("{}", paths.vocab_path.display());
    println!("{}", paths.tokenizer_config_path.display());
    Ok(())
}

fn read_all(
    paths: &[PathBuf],
    format: InputFormat,
    text_field: &str,
) -> Result<Vec<Transcript>, String> {
    let mut transcripts = Vec::new();
    for path in paths {
        transcripts.extend(read_transcripts(path, format, text_field)?);
    }
    Ok(transcripts)
}
