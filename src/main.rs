mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;

use goanno::annotator::Annotator;
use goanno::config::Config;
use goanno::matcher::Matcher;
use goanno::walker::Walker;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref(), cli.no_config)
        .context("Failed to load configuration")?;

    // CLI flags override config values
    if let Some(root) = cli.root {
        config.root = root;
    }
    if let Some(receiver) = cli.receiver {
        config.receiver = receiver;
    }
    if let Some(suffix) = cli.suffix {
        config.suffix = suffix;
    }

    if cli.verbose {
        println!("Root: {}", config.root.display());
        println!("Receiver: {}", config.receiver);
        println!("Suffix: {}", config.suffix);
        println!("Dry run: {}", cli.dry_run);
    }

    let matcher =
        Matcher::new(&config.receiver).context("Failed to build declaration matcher")?;
    let walker = Walker::new(Annotator::new(matcher), &config.suffix, cli.dry_run);

    let report = walker
        .run(&config.root)
        .context("Annotation run failed")?;

    for error in &report.errors {
        eprintln!("error: {error}");
    }

    if report.changed.is_empty() {
        println!("No changes.");
    } else {
        for path in &report.changed {
            if cli.dry_run {
                println!("[DRY RUN] Would update: {}", path.display());
            } else {
                println!("{}", path.display());
            }
        }
    }

    if cli.verbose {
        println!(
            "Scanned {} file(s), updated {}",
            report.scanned,
            report.changed.len()
        );
    }

    Ok(())
}
