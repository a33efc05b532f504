//! Configuration check tool.
//! Loads `.env`, the four config documents, and prints what the monitor would run with.
//!
//! Usage: `tcg-sentinel [CONFIG_DIR]` (defaults to `$TCG_CONFIG_DIR` or `./config`).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tcg_sentinel::{logging, Config, Settings};
use tracing::error;

fn main() -> ExitCode {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    let settings = Settings::from_env();
    logging::init_tracing(&settings);

    let dir = std::env::args_os().nth(1).map(PathBuf::from);
    match run(dir, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "configuration check failed");
            eprintln!("Configuration error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(dir: Option<PathBuf>, settings: Settings) -> Result<()> {
    let cfg = Config::load_with(dir.as_deref(), settings).context("loading configuration")?;

    println!("{}", "=".repeat(60));
    println!("Configuration check: {}", cfg.config_dir().display());
    println!("{}", "=".repeat(60));

    print_sources(&cfg);
    print_keywords(&cfg);
    print_routing(&cfg);
    print_thresholds(&cfg);
    print_environment(cfg.settings());

    println!("\nConfiguration is valid and ready to use");
    Ok(())
}

fn print_sources(cfg: &Config) {
    println!(
        "\nSources ({} total, {} enabled):",
        cfg.sources().len(),
        cfg.enabled_sources().len()
    );
    for s in cfg.sources() {
        let mark = if s.enabled() { "+" } else { "-" };
        println!("{mark} {}", s.name());
        println!("  Type: {}", s.kind());
        println!("  URL: {}", s.url());
        println!("  Parser: {}", s.parser_key());
        println!("  Interval: {:.1} minutes", s.poll_interval() as f64 / 60.0);
        println!("  Tags: {}", s.tags().join(", "));
        if let Some(d) = s.description() {
            println!("  Description: {d}");
        }
    }
    for skipped in cfg.skipped_sources() {
        println!(
            "! skipped entry #{} ({}): {}",
            skipped.index,
            skipped.name.as_deref().unwrap_or("unnamed"),
            skipped.error
        );
    }
}

fn print_keywords(cfg: &Config) {
    let kw = cfg.keywords();
    println!("\nKeywords:");
    println!(
        "Allowlist: {} keywords (e.g. {})",
        kw.allowlist().len(),
        sample(kw.allowlist())
    );
    println!(
        "Blocklist: {} keywords (e.g. {})",
        kw.blocklist().len(),
        sample(kw.blocklist())
    );
}

fn print_routing(cfg: &Config) {
    println!("\nAlert routing:");
    for (alert_type, route) in cfg.routing() {
        println!(
            "{alert_type:20} -> telegram:{} discord:{} priority:{}",
            if route.telegram { "yes" } else { "no" },
            route.discord.as_deref().unwrap_or("none"),
            route.priority()
        );
    }
}

fn print_thresholds(cfg: &Config) {
    let t = cfg.thresholds();
    println!("\nCooldowns:");
    for (alert_type, secs) in &t.cooldowns {
        println!("{alert_type:20}: {}", describe_cooldown(*secs));
    }
    println!("Price drop threshold: {:.0}%", t.price_drop_threshold * 100.0);
    println!("Max alerts per hour: {}", t.max_alerts_per_hour);
    if let Some(geo) = t.geo_filter.as_ref().filter(|g| g.enabled) {
        println!("Geo filtering: enabled ({})", geo.allowed_counties.join(", "));
    }
}

fn print_environment(s: &Settings) {
    fn status(v: &Option<String>) -> &'static str {
        if v.is_some() {
            "set"
        } else {
            "not set"
        }
    }
    println!("\nEnvironment:");
    println!("TELEGRAM_BOT_TOKEN: {}", status(&s.telegram_bot_token));
    println!("TELEGRAM_CHAT_ID: {}", status(&s.telegram_chat_id));
    println!("DISCORD_WEBHOOK_STOCK: {}", status(&s.discord_webhook_stock));
    println!("DISCORD_WEBHOOK_EVENTS: {}", status(&s.discord_webhook_events));
    println!("LOG_LEVEL: {}", s.log_level);
    println!("DATABASE_PATH: {}", s.database_path);
}

fn sample(items: &[String]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items.iter().take(5).cloned().collect::<Vec<_>>().join(", ")
}

fn describe_cooldown(secs: u64) -> String {
    match secs {
        0 => "no cooldown".to_string(),
        s if s < 3_600 => format!("{:.0} minutes", s as f64 / 60.0),
        s if s < 86_400 => format!("{:.1} hours", s as f64 / 3_600.0),
        s => format!("{:.1} days", s as f64 / 86_400.0),
    }
}
