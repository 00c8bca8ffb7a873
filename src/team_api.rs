use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::http_client::http_client;

/// Anything that can produce a team's match history for a route identifier.
pub trait TeamMatchesSource: Send {
    fn fetch_team_matches(&self, team_id: &str) -> Result<TeamMatchesData>;
}

#[derive(Debug, Clone)]
pub struct CcbpClient {
    base_url: String,
    timeout: Option<Duration>,
}

impl CcbpClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn team_url(&self, team_id: &str) -> String {
        format!("{}{team_id}", self.base_url)
    }
}

impl TeamMatchesSource for CcbpClient {
    fn fetch_team_matches(&self, team_id: &str) -> Result<TeamMatchesData> {
        let client = http_client(self.timeout)?;
        let url = self.team_url(team_id);
        // The status code is deliberately not checked; the body decides.
        let body = client
            .get(&url)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .text()
            .context("failed reading body")?;
        parse_team_matches_json(&body)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub umpires: String,
    pub result: String,
    pub man_of_the_match: String,
    pub id: String,
    pub date: String,
    pub venue: String,
    pub competing_team: String,
    pub competing_team_logo: String,
    pub first_innings: String,
    pub second_innings: String,
    pub match_status: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchesData {
    #[serde(rename = "teamBannerURL")]
    pub team_banner_url: String,
    pub latest_match: MatchRecord,
    pub recent_matches: Vec<MatchRecord>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawMatch {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub umpires: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub result: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub man_of_the_match: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub venue: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub competing_team: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub competing_team_logo: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_innings: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub second_innings: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub match_status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTeamMatches {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub team_banner_url: String,
    pub latest_match_details: RawMatch,
    pub recent_matches: Vec<RawMatch>,
}

// The API sends `null` for fields it has no value for.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<RawMatch> for MatchRecord {
    fn from(raw: RawMatch) -> Self {
        MatchRecord {
            umpires: raw.umpires,
            result: raw.result,
            man_of_the_match: raw.man_of_the_match,
            id: raw.id,
            date: raw.date,
            venue: raw.venue,
            competing_team: raw.competing_team,
            competing_team_logo: raw.competing_team_logo,
            first_innings: raw.first_innings,
            second_innings: raw.second_innings,
            match_status: raw.match_status,
        }
    }
}

impl From<RawTeamMatches> for TeamMatchesData {
    fn from(raw: RawTeamMatches) -> Self {
        TeamMatchesData {
            team_banner_url: raw.team_banner_url,
            latest_match: raw.latest_match_details.into(),
            recent_matches: raw.recent_matches.into_iter().map(MatchRecord::from).collect(),
        }
    }
}

pub fn parse_team_matches_json(raw: &str) -> Result<TeamMatchesData> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("empty team matches response"));
    }
    let parsed: RawTeamMatches =
        serde_json::from_str(trimmed).context("invalid team matches json")?;
    Ok(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_url_appends_identifier_verbatim() {
        let client = CcbpClient::new("https://apis.ccbp.in/ipl/", None);
        assert_eq!(client.team_url("RCB"), "https://apis.ccbp.in/ipl/RCB");
        assert_eq!(client.team_url("XYZ"), "https://apis.ccbp.in/ipl/XYZ");

        let bare = CcbpClient::new("http://localhost:8080/ipl", None);
        assert_eq!(bare.team_url("SH"), "http://localhost:8080/iplSH");
    }
}
