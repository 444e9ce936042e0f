use clap::Parser;
use site_carousel::core::talks::TalksTable;
use site_carousel::core::ContentSource;
use site_carousel::utils::logger;
use site_carousel::{FileContentSource, LocalStorage, TalksSource};

#[derive(Parser)]
#[command(name = "talks-table")]
#[command(about = "Print the lightning talks table from the site data directory")]
struct Args {
    /// Directory holding talks.json / talks.txt
    #[arg(short, long, default_value = "data")]
    data_dir: String,

    /// Read talks.txt instead of talks.json
    #[arg(long)]
    text: bool,

    /// Only show talks from this month (e.g. "Feb 2026")
    #[arg(long)]
    month: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let source_kind = if args.text {
        TalksSource::Text
    } else {
        TalksSource::Json
    };
    let source = FileContentSource::new(LocalStorage::new(&args.data_dir), source_kind);

    let mut talks = match source.talks().await {
        Ok(talks) => talks,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Some(month) = &args.month {
        talks.retain(|t| t.month.eq_ignore_ascii_case(month));
    }

    if talks.is_empty() {
        println!("No talks found in {}", args.data_dir);
        return Ok(());
    }

    println!("{}", TalksTable::new(&talks).render());
    tracing::info!("{} talks listed", talks.len());
    Ok(())
}
