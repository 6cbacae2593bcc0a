// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mealsync CLI
//!
//! Thin command-line shell over the sync engine: captures an identity,
//! lists today's log, and submits new meals. All consistency logic lives
//! in the library; this file only parses arguments and prints.

use mealsync::config::Config;
use mealsync::models::MealDraft;
use mealsync::services::{MealApiClient, SyncEngine, SyncStatus};
use mealsync::storage::{IdentityStore, MealCache};
use mealsync::time_utils;
use mealsync::SyncError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("login") => login(&config, args.get(1).map(String::as_str)),
        Some("logout") => logout(&config),
        Some("whoami") => whoami(&config),
        Some("list") => list(&config).await,
        Some("add") => add(&config, &args[1..]).await,
        _ => {
            usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mealsync=warn")),
        )
        .with_target(false)
        .init();
}

fn usage() {
    eprintln!("Usage: mealsync <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  login <email>              Set the active identity");
    eprintln!("  logout                     Clear the active identity (caches are kept)");
    eprintln!("  whoami                     Show the active identity");
    eprintln!("  list                       Show today's meal log");
    eprintln!("  add <name> <kcal> [date]   Log a meal (date defaults to today)");
}

/// Identity capture: any non-empty string containing `@` is accepted and
/// treated as an opaque partition key from here on.
fn login(config: &Config, email: Option<&str>) -> Result<(), SyncError> {
    let email = email.map(str::trim).unwrap_or_default();
    if email.is_empty() || !email.contains('@') {
        return Err(SyncError::validation(
            "email",
            "please provide an email address containing '@'",
        ));
    }

    IdentityStore::new(&config.data_dir).store(email);
    println!("Logged in as {}", email);
    Ok(())
}

fn logout(config: &Config) -> Result<(), SyncError> {
    IdentityStore::new(&config.data_dir).clear();
    println!("Logged out. Saved meal data is kept for your next login.");
    Ok(())
}

fn whoami(config: &Config) -> Result<(), SyncError> {
    match IdentityStore::new(&config.data_dir).load() {
        Some(email) => println!("{}", email),
        None => println!("Not logged in. Run: mealsync login <email>"),
    }
    Ok(())
}

async fn list(config: &Config) -> Result<(), SyncError> {
    let identity = require_identity(config)?;
    let mut engine = build_engine(config)?;

    engine.refresh(&identity, time_utils::today()).await?;
    print_day(&engine, &identity);
    Ok(())
}

async fn add(config: &Config, args: &[String]) -> Result<(), SyncError> {
    let (name, calories) = match (args.first(), args.get(1)) {
        (Some(name), Some(calories)) => (name.as_str(), calories.as_str()),
        _ => {
            usage();
            return Err(SyncError::validation("add", "expected <name> <kcal> [date]"));
        }
    };

    let calories: i64 = calories
        .parse()
        .map_err(|_| SyncError::validation("calories", "must be a whole number"))?;

    let today = time_utils::today();
    let date = match args.get(2) {
        Some(raw) => time_utils::parse_date(raw)
            .ok_or_else(|| SyncError::validation("date", "expected YYYY-MM-DD"))?,
        None => today,
    };

    // Validation happens before any identity or network work.
    let draft = MealDraft::new(name, calories, date)?;

    let identity = require_identity(config)?;
    let mut engine = build_engine(config)?;

    // Best-effort fetch first so the merged cache reflects the full day;
    // a degraded fetch is fine, the create below still goes to the server.
    engine.refresh(&identity, today).await?;

    match engine.add_meal(&identity, draft).await {
        Ok(confirmed) => {
            println!(
                "Added {} ({} kcal) on {} [id {}]",
                confirmed.meal_name, confirmed.calories, confirmed.date, confirmed.id
            );
            print_day(&engine, &identity);
            Ok(())
        }
        Err(e) if e.is_network() => {
            eprintln!("❌ The meal was NOT saved: {}", e);
            eprintln!("   Please try submitting it again.");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

fn require_identity(config: &Config) -> Result<String, SyncError> {
    IdentityStore::new(&config.data_dir)
        .load()
        .ok_or(SyncError::MissingIdentity)
}

fn build_engine(config: &Config) -> Result<SyncEngine<MealApiClient>, SyncError> {
    let client = MealApiClient::new(&config.api_base_url, config.http_timeout)?;
    let cache = MealCache::new(&config.data_dir);
    Ok(SyncEngine::new(client, cache))
}

fn print_day(engine: &SyncEngine<MealApiClient>, identity: &str) {
    let view = engine.view();

    if engine.status() == SyncStatus::Degraded {
        eprintln!("⚠️  Could not reach the meal service — showing last saved data.");
        eprintln!("   Run the command again to retry.");
    }

    println!();
    println!("Meals for {}:", identity);
    if view.meals.is_empty() {
        println!("  (no meals logged yet)");
    }
    for meal in &view.meals {
        println!(
            "  {}  {:<24} {:>6} kcal",
            meal.date, meal.meal_name, meal.calories
        );
    }
    println!(
        "  {} meal(s), {} kcal total",
        view.total_count, view.total_calories
    );
}
