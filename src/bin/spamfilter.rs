//! Flags mail containing words that occur in every spam message and in no non-spam message.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use red_black_collections::spam::SpamFilter;
use red_black_collections::text;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "spamfilter", about = "Classifies mail using spam and non-spam word sets")]
struct Args {
    /// Directory of known spam messages.
    spam_dir: PathBuf,

    /// Directory of known non-spam messages.
    nonspam_dir: PathBuf,

    /// Directory of messages to classify.
    mail_dir: PathBuf,

    /// Increases log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    TermLogger::init(
        level_filter(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let filter = SpamFilter::train(&args.spam_dir, &args.nonspam_dir)
        .context("failed to train spam filter")?;
    info!("trained on {} spam words", filter.spam_words().len());

    let mails = text::find_files(&args.mail_dir)
        .with_context(|| format!("failed to list {}", args.mail_dir.display()))?;
    for mail in mails {
        let verdict = filter.classify(&mail)?;
        println!("{}: {}", mail.display(), verdict);
    }

    Ok(())
}
