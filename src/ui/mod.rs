// Terminal views
pub mod login;
pub mod search;

use crate::config::Settings;
use crate::core::{SearchWorkflow, SuggestGate};
use crate::services::{CatalogClient, SessionStore};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

/// Client-side route guard
///
/// Reads the locally stored authentication flag to decide whether the
/// search view may be entered. A convenience only: real authorization is
/// re-validated by the service on every call via the session cookie.
pub fn can_enter_search(session: &SessionStore) -> bool {
    session.is_authenticated()
}

/// Top-level view loop: guard → login → search, until the user quits
pub async fn run<R: BufRead, W: Write>(
    client: Arc<CatalogClient>,
    session: &SessionStore,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        if !can_enter_search(session) {
            if !login::run(&client, session, input, output).await? {
                return Ok(());
            }
        }

        let gate = SuggestGate::new(
            settings.search.suggest_min_len,
            Duration::from_millis(settings.search.suggest_debounce_ms),
        );
        let mut workflow = SearchWorkflow::with_suggest_gate(Arc::clone(&client), gate);
        workflow.init().await;

        match search::run(&mut workflow, input, output).await? {
            search::Exit::Logout => {
                // Best-effort: navigation back to login proceeds regardless
                if let Err(e) = client.logout().await {
                    tracing::warn!("Logout call failed: {}", e);
                }
                // The local flag is cleared on every logout path
                if let Err(e) = session.clear() {
                    tracing::warn!("Failed to clear session flag: {}", e);
                }
            }
            search::Exit::Quit => return Ok(()),
        }
    }
}
