use anyhow::{Context, Result};
use energy_day_report::{analytics::DayReport, config, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;
    let inputs = cfg.inputs();

    info!(
        seed = inputs.seed,
        building = %inputs.building_name,
        date = %inputs.date,
        "generating energy report"
    );

    let day = cfg
        .simulator()
        .run(&inputs)
        .context("failed to assemble energy day")?;
    let report = DayReport::build(&day, &cfg.alerts);

    info!(summary = %report.summary, cost_czk = report.estimated_cost_czk, "report ready");
    for alert in report.failed_alerts() {
        warn!(alert = alert.label, kind = %alert.kind, "check failed");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
