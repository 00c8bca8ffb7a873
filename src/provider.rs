use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::state::{Delta, ProviderCommand};
use crate::team_api::TeamMatchesSource;

/// Runs fetches off the UI thread until the command channel closes.
pub fn spawn_provider(
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
    source: Box<dyn TeamMatchesSource>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for cmd in cmd_rx {
            match cmd {
                ProviderCommand::FetchTeamMatches { mount, team_id } => {
                    let delta = match source.fetch_team_matches(&team_id) {
                        Ok(data) => Delta::TeamMatchesLoaded { mount, data },
                        Err(err) => {
                            let _ = tx.send(Delta::Log(format!(
                                "[WARN] Team matches fetch error ({team_id}): {err}"
                            )));
                            Delta::TeamMatchesFailed {
                                mount,
                                error: format!("{err:#}"),
                            }
                        }
                    };
                    if tx.send(delta).is_err() {
                        return;
                    }
                }
            }
        }
    })
}
