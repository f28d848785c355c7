use anyhow::Context;
use clap::Parser;
use flood_sight::{not_found_message, FloodSight, Style, StyledDisplay};
use std::path::PathBuf;

/// Estimate the flood probability of a city from static geography and live weather.
#[derive(Debug, Parser)]
#[command(name = "flood-sight", version, about)]
struct Cli {
    /// City to assess
    #[arg(default_value = "Chennai")]
    city: String,

    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Folder containing city_static_features.csv and flood_model.bin
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    plain: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let style = if cli.plain { Style::Plain } else { Style::Ansi };

    // Startup failures are fatal.
    let sight = FloodSight::builder()
        .weather_api_key(cli.api_key)
        .maybe_data_dir(cli.data_dir)
        .build()
        .await
        .context("Failed to start flood sight")?;

    println!("🌊 Flood Prediction for {}\n", cli.city.trim());

    let assessment = match sight.assess(&cli.city).await {
        Ok(assessment) => assessment,
        Err(e) => match not_found_message(&e) {
            Some(message) => {
                println!("{}", message);
                return Ok(());
            }
            None => return Err(e).context("Failed to fetch live weather"),
        },
    };

    match &assessment.outcome {
        Ok(report) => println!("{}", report.styled(style)),
        Err(e) => match not_found_message(e) {
            Some(message) => println!("{}", message),
            None => anyhow::bail!("Prediction failed: {}", e),
        },
    }

    println!("\n{}", assessment.conditions.panel());
    Ok(())
}
