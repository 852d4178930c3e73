use clap::Parser;
use skillmap::config::toml_config::FileConfig;
use skillmap::core::ConfigProvider;
use skillmap::utils::{logger, validation::Validate};
use skillmap::{CliConfig, GeminiClient, LearningPlan, PlannerConfig, PlannerEngine};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting skillmap CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 憑證只在啟動時讀取一次，之後注入各階段
    let api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_default();

    let file_config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::error!("❌ Failed to load config file {}: {}", path, e);
                eprintln!("❌ Failed to load config file {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let config = match PlannerConfig::resolve(&cli, file_config, api_key) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let goal = match cli.goal.clone() {
        Some(goal) => goal,
        None => prompt_for_goal()?,
    };
    if goal.trim().is_empty() {
        eprintln!("❌ Please enter a learning goal.");
        std::process::exit(1);
    }

    let client = Arc::new(GeminiClient::new(
        config.api_base(),
        config.model(),
        config.api_key(),
    ));
    let engine = PlannerEngine::new(client, config.pacing_delay(), config.total_weeks());

    match engine.run(goal.trim()).await {
        Ok(plan) => {
            tracing::info!("✅ Roadmap generated for '{}'", plan.goal);
            if cli.json || cli.goal.is_some() {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                render_plan(&plan);
            }
        }
        Err(e) => {
            tracing::error!("❌ Pipeline failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn prompt_for_goal() -> std::io::Result<String> {
    print!("🎯 Enter your learning goal: ");
    std::io::stdout().flush()?;
    let mut goal = String::new();
    std::io::stdin().read_line(&mut goal)?;
    Ok(goal)
}

/// Human-readable rendering: goal header, skill list, week-grouped
/// timeline, then per-topic resources.
fn render_plan(plan: &LearningPlan) {
    println!();
    println!("🎉 Your Learning Roadmap is Ready!");
    println!();
    println!("Your Goal: {}", plan.goal);
    println!();
    println!("Core Skills to Master:");
    for skill in &plan.skills {
        println!("  - {}", skill);
    }

    println!();
    println!("🗓️ Your Weekly Timeline");
    let mut weeks: BTreeMap<u32, Vec<&skillmap::domain::model::TimelineEntry>> = BTreeMap::new();
    for entry in &plan.timeline {
        weeks.entry(entry.week).or_default().push(entry);
    }
    for (week, entries) in &weeks {
        println!("  Week {}:", week);
        for entry in entries {
            println!("    {}: {}", entry.topic, entry.description);
        }
    }

    println!();
    println!("📚 Learning Resources");
    for res in &plan.resources {
        println!("  {}:", res.topic);
        println!("    YouTube: {}", res.youtube);
        println!("    Course:  {}", res.course);
        println!("    GitHub:  {}", res.github);
    }
}
