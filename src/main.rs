use clap::Parser;
use dreamlog::application::add_entry::validate_date;
use dreamlog::application::{
    AddEntryService, AnalysisOutcome, AnalyzeService, DeleteEntryService, ListEntriesService,
};
use dreamlog::cli::commands::journal_path;
use dreamlog::cli::output::{format_entry_list, format_report};
use dreamlog::cli::{Cli, Commands};
use dreamlog::error::DreamlogError;
use dreamlog::infrastructure::{JournalStore, LexiconScorer};

fn main() {
    // Recovery events from the store (skipped records, corrupted-file
    // backups) go to stderr so command output stays clean.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DreamlogError> {
    let store = JournalStore::new(journal_path(&cli));

    match cli.command {
        Commands::Add { text, date } => {
            let date = validate_date(date.as_deref())?;
            let service = AddEntryService::new(store);
            let entry = service.execute(&text, date)?;
            println!("Saved entry for {}", entry.date);
            Ok(())
        }
        Commands::List { date } => {
            let service = ListEntriesService::new(store);
            let journal = service.execute()?;
            print!("{}", with_trailing_newline(format_entry_list(&journal, date.as_deref())));
            Ok(())
        }
        Commands::Delete { number } => {
            let service = DeleteEntryService::new(store);
            let deleted = match number.checked_sub(1) {
                Some(index) => service.execute(index)?,
                None => None,
            };
            match deleted {
                Some(entry) => {
                    println!("Deleted entry {}: [{}] {}", number, entry.date, entry.preview(50))
                }
                None => println!("No entry found at number {}", number),
            }
            Ok(())
        }
        Commands::Clear { force } => {
            let service = DeleteEntryService::new(store.clone());
            if force {
                let count = service.execute_all()?;
                println!("Deleted {} entries", count);
            } else {
                let count = store.load()?.len();
                println!(
                    "This would delete all {} entries. Re-run with --force to confirm.",
                    count
                );
            }
            Ok(())
        }
        Commands::Analyze => {
            let mut journal = store.load()?;
            let scorer = LexiconScorer::new();
            let service = AnalyzeService::new(store, Some(Box::new(scorer)));

            match service.execute(&mut journal)? {
                AnalysisOutcome::Empty => {
                    println!("No dreams to analyze. Start recording your dreams!")
                }
                AnalysisOutcome::Unavailable => {
                    println!("{}", DreamlogError::ScorerUnavailable.display_with_suggestions())
                }
                AnalysisOutcome::Report(stats) => print!("{}", format_report(&journal, &stats)),
            }
            Ok(())
        }
    }
}

fn with_trailing_newline(text: String) -> String {
    if text.ends_with('\n') {
        text
    } else {
        format!("{}\n", text)
    }
}
