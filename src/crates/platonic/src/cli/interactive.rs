//! Interactive consult session
//!
//! Each line read from the input is submitted as its own task. Replies may
//! come back in any order; only the reply to the most recent submission is
//! shown; older ones are discarded.

use crate::cli::oracle::render_verdict;
use crate::error::Result;
use crate::session::{ResultSlot, Ticket};
use colored::Colorize;
use oracle::{OracleClient, OracleError, OracleVerdict, Transport};
use std::future::Future;
use std::io::ErrorKind;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

/// Outcome of one consult, as stored in the result slot
pub type ConsultOutcome = std::result::Result<Option<OracleVerdict>, OracleError>;

/// Consults sharing one latest-wins result slot
#[derive(Clone)]
pub struct ConsultSession<T> {
    client: OracleClient<T>,
    slot: ResultSlot<ConsultOutcome>,
}

impl<T> ConsultSession<T>
where
    T: Transport + Clone + 'static,
{
    pub fn new(client: OracleClient<T>) -> Self {
        Self {
            client,
            slot: ResultSlot::new(),
        }
    }

    pub fn slot(&self) -> &ResultSlot<ConsultOutcome> {
        &self.slot
    }

    /// Dispatch `query` and return the future that resolves it
    ///
    /// The future yields the outcome only when it was accepted by the slot,
    /// i.e. no newer consult was dispatched in the meantime.
    pub fn consult(
        &self,
        query: String,
    ) -> impl Future<Output = Option<(Ticket, ConsultOutcome)>> + Send + 'static {
        let ticket = self.slot.dispatch();
        let client = self.client.clone();
        let slot = self.slot.clone();

        async move {
            let outcome = client.submit(&query).await;
            if slot.publish(ticket, outcome.clone()) {
                Some((ticket, outcome))
            } else {
                debug!(
                    ticket = ticket.sequence(),
                    latest = slot.latest_dispatched(),
                    "Dropping stale oracle reply"
                );
                None
            }
        }
    }
}

fn is_exit(line: &str) -> bool {
    matches!(line, "quit" | "exit" | ":q")
}

fn print_outcome(ticket: Ticket, outcome: &ConsultOutcome) {
    match outcome {
        Ok(Some(verdict)) => print!("{}", render_verdict(verdict)),
        Ok(None) => {}
        Err(err) => {
            let tag = format!("[#{}]", ticket.sequence());
            eprintln!("{} {}", tag.red(), err.user_message());
        }
    }
}

/// Show a finished consult; returns whether anything was shown
fn settle(joined: std::result::Result<Option<(Ticket, ConsultOutcome)>, JoinError>) -> bool {
    match joined {
        Ok(Some((ticket, outcome))) => {
            print_outcome(ticket, &outcome);
            true
        }
        Ok(None) => false,
        Err(e) => {
            warn!(error = %e, "Consult task failed");
            false
        }
    }
}

/// Run the session over `input` until EOF or an exit command
///
/// Consults already dispatched always run to completion, even when reading
/// the input fails.
pub async fn run<T, R>(session: ConsultSession<T>, input: R) -> Result<()>
where
    T: Transport + Clone + 'static,
    R: AsyncBufRead + Unpin,
{
    println!("{}", "Consult the Oracle. Type a product, or 'quit' to leave.".bold());

    let mut lines = input.lines();
    let mut pending = JoinSet::new();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) if e.kind() == ErrorKind::InvalidData => {
                        warn!(error = %e, "Skipping unreadable input line");
                        continue;
                    }
                    Err(e) => {
                        warn!(error = %e, "Input closed");
                        break;
                    }
                };
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }
                if is_exit(query) {
                    break;
                }
                pending.spawn(session.consult(query.to_string()));
            }
            Some(joined) = pending.join_next(), if !pending.is_empty() => {
                settle(joined);
            }
        }
    }

    while let Some(joined) = pending.join_next().await {
        settle(joined);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_commands() {
        assert!(is_exit("quit"));
        assert!(is_exit(":q"));
        assert!(!is_exit("Quit smoking kit"));
    }

    #[tokio::test]
    async fn test_panicked_consult_is_not_shown() {
        let fail = true;
        let handle = tokio::spawn(async move {
            if fail {
                panic!("transport blew up");
            }
            None::<(Ticket, ConsultOutcome)>
        });
        let joined = handle.await;

        assert!(joined.is_err());
        assert!(!settle(joined));
    }

    #[tokio::test]
    async fn test_stale_consult_is_not_shown() {
        assert!(!settle(Ok(None)));
    }
}
