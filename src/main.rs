//! Thin host for the duty planner.
//!
//! Usage: `duty-planner <roster.json> [planner.json]`
//!
//! Loads the roster and (optionally) the planner config, plans the
//! template week, and prints the result and its summary as JSON on
//! stdout. Logs go to stderr; set `RUST_LOG` to change the level.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use duty_planner::models::{AssignmentResult, SlotKey};
use duty_planner::store::{JsonFileStore, RosterStore};
use duty_planner::{logging, PlanSummary, PlannerConfig, WeekPlanner};

#[derive(Serialize)]
struct MemberReport<'a> {
    name: &'a str,
    load: u32,
    max_load: u32,
    assignments: &'a [SlotKey],
}

#[derive(Serialize)]
struct Report<'a> {
    result: &'a AssignmentResult,
    summary: &'a PlanSummary,
    members: Vec<MemberReport<'a>>,
}

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(roster_path) = args.get(1) else {
        let program = args.first().map(String::as_str).unwrap_or("duty-planner");
        bail!("usage: {program} <roster.json> [planner.json]");
    };

    let config = match args.get(2) {
        Some(path) => PlannerConfig::from_json_file(path)
            .with_context(|| format!("loading planner config from {path}"))?,
        None => PlannerConfig::default(),
    };

    let store = JsonFileStore::new(roster_path);
    let mut roster = store
        .load_roster()
        .with_context(|| format!("loading roster from {roster_path}"))?;
    info!(staff = roster.len(), "roster loaded");

    let planner = WeekPlanner::from_config(config);
    info!(
        days = planner.template().days.len(),
        ordering = ?planner.ordering(),
        reproducible = planner.ordering().is_deterministic(),
        "planner configured"
    );
    let result = planner.plan_template_week(&mut roster)?;
    let summary = PlanSummary::calculate(&result, &roster);

    for shortfall in &result.shortfalls {
        warn!("understaffed: {shortfall}");
    }
    info!(
        fill_rate = summary.fill_rate,
        deficit = summary.total_deficit,
        "planning finished"
    );

    let report = Report {
        result: &result,
        summary: &summary,
        members: roster
            .iter()
            .map(|m| MemberReport {
                name: &m.name,
                load: m.current_load(),
                max_load: m.max_load(),
                assignments: m.assignments(),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
