use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use groq_transcribe::{
    detect_language, export_to, output_path_for, ClientConfig, ExportFormat, GroqProvider, Model,
    Policy, ResponseFormat, TranscriptionProvider, Validator,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Audio files to transcribe
    #[arg(required = true)]
    audio_files: Vec<PathBuf>,

    /// Output file or directory for transcription results
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Response format for transcription
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = ResponseFormat::VerboseJson)]
    format: ResponseFormat,

    /// Whisper model to use for transcription
    #[arg(short, long, value_enum, default_value_t = Model::WhisperLargeV3)]
    model: Model,

    /// Optional language hint for transcription
    #[arg(short, long)]
    language: Option<String>,

    /// Only validate audio files without transcribing
    #[arg(long)]
    validate_only: bool,

    /// Groq API key (overrides GROQ_API_KEY environment variable)
    #[arg(long)]
    groq_api_key: Option<String>,

    /// Transcription endpoint to post to
    #[arg(long)]
    base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<ClientConfig> {
    let config = match &args.groq_api_key {
        Some(key) => ClientConfig::new(key.clone()),
        None => ClientConfig::from_env(),
    }
    .context("GROQ_API_KEY not found. Set it in .env, as an environment variable, or pass --groq-api-key")?;

    let config = config.with_model(args.model);
    Ok(match &args.base_url {
        Some(url) => config.with_base_url(url.clone()),
        None => config,
    })
}

fn describe_policy(policy: &Policy) -> String {
    format!(
        "max {} MB, min {} seconds, billed minimum {} seconds, extensions: {}",
        policy.max_size_mb,
        policy.min_duration_seconds,
        policy.min_billed_seconds,
        policy.extensions.join(", ")
    )
}

fn process_file(
    provider: &GroqProvider,
    validator: &Validator,
    args: &Args,
    audio_file: &Path,
) -> Result<()> {
    let validation = validator.validate(audio_file)?;
    let details = validation.details;

    let display_name = audio_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| audio_file.display().to_string());
    println!("Audio File Details for {display_name}:");
    println!("  Duration: {:.2} seconds", details.duration);
    println!("  Channels: {}", details.channels);
    println!("  Sample Rate: {} Hz", details.sample_rate);
    println!("  File Size: {:.2} MB", details.file_size_mb);
    for advisory in &validation.advisories {
        println!("  Warning: {advisory}");
    }

    if args.validate_only {
        return Ok(());
    }

    println!("Transcribing with {}...", provider.name());
    let transcription = provider.transcribe(audio_file, args.format, args.language.as_deref())?;

    let output_file = output_path_for(audio_file, args.output.as_deref(), args.format);
    export_to(
        &transcription,
        ExportFormat::for_response(args.format),
        &output_file,
    )
    .with_context(|| format!("Failed to write {}", output_file.display()))?;

    println!("Transcription saved to {}", output_file.display());
    if transcription.language().is_some() {
        println!("Detected language: {}", detect_language(&transcription));
    }

    Ok(())
}

fn run(args: &Args) -> Result<bool> {
    if Path::new(".env").exists() {
        tracing::info!("loading environment from .env");
        dotenvy::dotenv()?;
    }

    let config = load_config(args)?;

    if let Some(output) = &args.output {
        if args.audio_files.len() > 1 {
            std::fs::create_dir_all(output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
        }
    }

    let provider = GroqProvider::new(config).context("Failed to initialize transcriber")?;
    let validator = Validator::new(provider.config().policy.clone());
    if args.validate_only {
        println!("Validating against {}", describe_policy(validator.policy()));
    }

    let mut all_ok = true;
    for audio_file in &args.audio_files {
        if let Err(e) = process_file(&provider, &validator, args, audio_file) {
            tracing::error!(file = %audio_file.display(), "{e:#}");
            eprintln!("Error processing {}: {e:#}", audio_file.display());
            all_ok = false;
        }
    }

    Ok(all_ok)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
