use clap::Parser;
use site_carousel::app::{load_gallery, load_hero};
use site_carousel::core::talks::TalksTable;
use site_carousel::core::ContentSource;
use site_carousel::utils::error::ErrorSeverity;
use site_carousel::utils::{logger, validation::Validate};
use site_carousel::{
    AutoAdvance, CliConfig, FileContentSource, LocalStorage, NavbarTracker, SiteConfig,
    TransitionEvent,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting site-carousel preview");
    tracing::info!("📁 Loading configuration from: {}", cli.config);

    let config = match SiteConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(
            "❌ Preview failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: &SiteConfig) -> site_carousel::Result<()> {
    let storage = LocalStorage::new(config.gallery.data_dir.clone());
    let source = FileContentSource::new(storage, config.talks_source());

    let gallery = load_gallery(&source, config).await?;
    println!("🖼  {}: {} months", config.site.name, gallery.len());
    for (i, item) in gallery.items().iter().enumerate() {
        let marker = if i == gallery.index() { "▶" } else { " " };
        match &item.resource_ref {
            Some(path) => println!("{} {:<16} {}", marker, item.label, path),
            None => println!("{} {:<16} (no photo)", marker, item.label),
        }
    }

    let talks = source.talks().await?;
    if !talks.is_empty() {
        println!();
        println!("{}", TalksTable::new(&talks).render());
    }

    let mut navbar = NavbarTracker::new(config.navbar_threshold());
    tracing::debug!("Navbar starts {:?}", navbar.attach(0.0));

    if cli.dry_run || !config.auto_advance_enabled() {
        tracing::info!("🔍 Timer not started");
        return Ok(());
    }

    let mut hero = match load_hero(config) {
        Some(hero) => {
            let (handle, events) = AutoAdvance::start(hero?, config.hero_auto_advance_config())?;
            tokio::spawn(log_hero(events));
            Some(handle)
        }
        None => None,
    };

    let (mut slideshow, mut events) = AutoAdvance::start(gallery, config.auto_advance_config())?;
    let mut commits = 0;
    while commits < cli.cycles {
        match events.recv().await {
            Some(TransitionEvent::Begin { outgoing, .. }) => {
                tracing::info!("Fading out {}", outgoing.label);
            }
            Some(TransitionEvent::Commit { incoming, index }) => {
                commits += 1;
                match incoming.resource_ref {
                    Some(path) => tracing::info!("Showing {} ({}) [{}]", incoming.label, path, index),
                    None => tracing::info!("Showing {} (placeholder) [{}]", incoming.label, index),
                }
            }
            None => break,
        }
    }

    slideshow.stop();
    if let Some(hero) = hero.as_mut() {
        hero.stop();
    }
    navbar.detach();

    tracing::info!("✅ Preview finished after {} transitions", commits);
    Ok(())
}

async fn log_hero(mut events: tokio::sync::mpsc::UnboundedReceiver<TransitionEvent>) {
    while let Some(event) = events.recv().await {
        if let TransitionEvent::Commit { incoming, .. } = event {
            tracing::debug!("Hero background now {}", incoming.label);
        }
    }
}
