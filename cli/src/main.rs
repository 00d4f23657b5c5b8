mod calendar;
mod config;

use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use growmate_core::{
    due_plants, CareService, CareTrack, HttpPlantBackend, PlantStatus,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "growmate")]
#[command(about = "Plant care companion: watering and fertilizing schedules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Store the backend URL and auth token
    Login {
        #[arg(long)]
        url: String,
        #[arg(long)]
        token: String,
    },
    /// List all plants with their care status
    List,
    /// List plants due or overdue on a care track
    Due {
        /// Care track: water or fertilize
        #[arg(default_value = "water")]
        track: String,
    },
    /// Show the care calendar for a month (default: current)
    Calendar {
        /// Month as YYYY-MM
        month: Option<String>,
    },
    /// Mark every plant that is due for watering as watered today
    WaterAll,
    /// Mark every plant that is due for fertilizing as fertilized today
    FertilizeAll,
}

fn parse_track(input: &str) -> Result<CareTrack> {
    match input.to_lowercase().as_str() {
        "water" | "watering" | "w" => Ok(CareTrack::Watering),
        "fertilize" | "fertilizing" | "fert" | "f" => Ok(CareTrack::Fertilizing),
        other => Err(anyhow!("Unknown care track: '{}'", other)),
    }
}

fn parse_month(input: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid month '{}', expected YYYY-MM", input))?;
    Ok((date.year(), date.month()))
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Species")]
    species: String,
    #[tabled(rename = "Water")]
    water: String,
    #[tabled(rename = "Next water")]
    next_water: String,
    #[tabled(rename = "Fertilize")]
    fertilize: String,
    #[tabled(rename = "Next fertilize")]
    next_fertilize: String,
}

impl StatusRow {
    fn from_status(status: &PlantStatus) -> Self {
        Self {
            name: status.name.clone(),
            species: status.species.clone().unwrap_or_else(|| "-".to_string()),
            water: status.water_state.label().to_string(),
            next_water: status.next_watering.format("%Y-%m-%d").to_string(),
            fertilize: status.fertilize_state.label().to_string(),
            next_fertilize: status.next_fertilizing.format("%Y-%m-%d").to_string(),
        }
    }
}

fn service() -> Result<CareService<HttpPlantBackend>> {
    let config = Config::load(None)?;
    let backend = HttpPlantBackend::new(config.backend_url, config.token);
    Ok(CareService::new(backend))
}

async fn mark_all(track: CareTrack) -> Result<()> {
    let service = service()?;
    let today = Local::now().date_naive();
    let (plants, schedule) = service.refresh(today).await?;

    let due = match track {
        CareTrack::Watering => schedule.stats.due_water_today,
        CareTrack::Fertilizing => schedule.stats.due_fertilize_today,
    };
    if due == 0 {
        println!("All plants are caught up on {} 🌱", track.label());
        return Ok(());
    }

    let report = service.mark_all_done(&plants, track, today).await;
    println!("Marked {} plant(s) as done for {}", report.marked.len(), track.label());
    if !report.failures.is_empty() {
        for failure in &report.failures {
            eprintln!("  {} failed: {}", failure.plant_id, failure.reason);
        }
        let err = report.into_result().unwrap_err();
        bail!("{}", err);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Login { url, token } => {
            let config = Config {
                backend_url: url,
                token,
            };
            config.save(None)?;
            println!("Config saved.");
        }
        Commands::List => {
            let service = service()?;
            let plants = service.fetch_plants().await?;
            if plants.is_empty() {
                println!("No plants registered.");
                return Ok(());
            }
            let rows: Vec<StatusRow> = plants
                .iter()
                .map(|p| StatusRow::from_status(&PlantStatus::from_plant(p, today)))
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{}", table);
        }
        Commands::Due { track } => {
            let track = parse_track(&track)?;
            let service = service()?;
            let plants = service.fetch_plants().await?;
            let due = due_plants(&plants, track, today);
            if due.is_empty() {
                println!("Nothing due for {} today.", track.label());
                return Ok(());
            }
            let rows: Vec<StatusRow> = due
                .iter()
                .map(|p| StatusRow::from_status(&PlantStatus::from_plant(p, today)))
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{}", table);
        }
        Commands::Calendar { month } => {
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => (today.year(), today.month()),
            };
            let service = service()?;
            let (_, schedule) = service.refresh(today).await?;
            calendar::render_stats(&schedule);
            calendar::render_month(&schedule, year, month);
            calendar::render_legend();
        }
        Commands::WaterAll => mark_all(CareTrack::Watering).await?,
        Commands::FertilizeAll => mark_all(CareTrack::Fertilizing).await?,
    }
    Ok(())
}
