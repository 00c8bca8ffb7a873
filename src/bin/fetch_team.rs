use anyhow::{Context, Result};
use serde::Serialize;

use ipl_terminal::config::AppConfig;
use ipl_terminal::stats::{StatsBucket, match_stats};
use ipl_terminal::team_api::{CcbpClient, TeamMatchesData, TeamMatchesSource};
use ipl_terminal::teams;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    team_id: &'a str,
    class_name: String,
    team_matches: &'a TeamMatchesData,
    stats: [StatsBucket; 3],
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let config = AppConfig::from_env();

    let team_id = parse_team_arg()
        .or_else(|| config.initial_team.clone())
        .context("usage: fetch_team <TEAM> (or set IPL_TEAM)")?;

    let client = CcbpClient::new(config.api_base.clone(), config.http_timeout);
    eprintln!("GET {}", client.team_url(&team_id));
    let data = client.fetch_team_matches(&team_id)?;

    let report = Report {
        team_id: &team_id,
        class_name: teams::container_class(&team_id),
        team_matches: &data,
        stats: match_stats(&data.recent_matches),
    };
    let json = serde_json::to_string_pretty(&report).context("serialize report")?;
    println!("{json}");
    Ok(())
}

fn parse_team_arg() -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(team) = arg.strip_prefix("--team=") {
            let trimmed = team.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == "--team" {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(next.trim().to_string());
            }
        }
    }
    args.first()
        .filter(|arg| !arg.starts_with("--"))
        .map(|arg| arg.trim().to_string())
}
