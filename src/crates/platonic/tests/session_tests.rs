//! Integration tests for latest-wins consults

mod common;

use common::{client_with, EchoOracle};
use oracle::OracleError;
use platonic::cli::interactive::{self, ConsultSession};
use platonic::cli::oracle::{handle_challenge, handle_consult};
use platonic::cli::OutputFormat;
use platonic::{Catalog, PlatonicError};
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::io::{AsyncRead, BufReader, ReadBuf};

/// Reader that yields `data` once, then fails
struct BrokenInput {
    data: &'static [u8],
    sent: bool,
}

impl AsyncRead for BrokenInput {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        if self.sent {
            return Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone")));
        }
        self.sent = true;
        buf.put_slice(self.data);
        Poll::Ready(Ok(()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_slow_older_reply_is_dropped() {
    let echo = Arc::new(
        EchoOracle::new()
            .delay("kettle", Duration::from_secs(5))
            .delay("toaster", Duration::from_secs(1)),
    );
    let session = ConsultSession::new(client_with(echo.clone()));

    let older = tokio::spawn(session.consult("kettle".to_string()));
    let newer = tokio::spawn(session.consult("toaster".to_string()));

    let (ticket, outcome) = newer.await.unwrap().expect("newest reply is accepted");
    assert_eq!(ticket.sequence(), 2);
    let verdict = outcome.unwrap().unwrap();
    assert_eq!(verdict.category.as_deref(), Some("toaster"));

    assert!(older.await.unwrap().is_none());

    let (current_ticket, current) = session.slot().current().unwrap();
    assert_eq!(current_ticket, 2);
    assert_eq!(current.unwrap().unwrap().category.as_deref(), Some("toaster"));
    assert_eq!(echo.seen().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_reply_before_next_dispatch_is_kept_until_superseded() {
    let echo = Arc::new(EchoOracle::new());
    let session = ConsultSession::new(client_with(echo));

    let first = session.consult("hammer".to_string()).await;
    assert!(first.is_some());
    assert_eq!(session.slot().current().unwrap().0, 1);

    let second = session.consult("blender".to_string()).await;
    assert!(second.is_some());

    let (ticket, outcome) = session.slot().current().unwrap();
    assert_eq!(ticket, 2);
    assert_eq!(outcome.unwrap().unwrap().category.as_deref(), Some("blender"));
}

#[tokio::test(start_paused = true)]
async fn test_failures_are_published_like_verdicts() {
    let echo = Arc::new(EchoOracle::new().fail("broken", 401));
    let session = ConsultSession::new(client_with(echo));

    let (_, outcome) = session.consult("broken".to_string()).await.unwrap();
    assert!(matches!(
        outcome,
        Err(OracleError::Unauthorized { status: 401, .. })
    ));
    assert!(session.slot().current().unwrap().1.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_interactive_run_stops_at_quit() {
    let echo = Arc::new(EchoOracle::new().delay("kettle", Duration::from_secs(3)));
    let session = ConsultSession::new(client_with(echo.clone()));
    let input: &[u8] = b"kettle\n\n   \ntoaster\nquit\nignored\n";

    interactive::run(session.clone(), input).await.unwrap();

    let mut seen = echo.seen();
    seen.sort();
    assert_eq!(seen, vec!["kettle".to_string(), "toaster".to_string()]);

    assert_eq!(session.slot().latest_dispatched(), 2);
    let (ticket, outcome) = session.slot().current().unwrap();
    assert_eq!(ticket, 2);
    assert_eq!(outcome.unwrap().unwrap().category.as_deref(), Some("toaster"));
}

#[tokio::test(start_paused = true)]
async fn test_interactive_run_skips_non_utf8_line() {
    let echo = Arc::new(EchoOracle::new().delay("kettle", Duration::from_secs(3)));
    let session = ConsultSession::new(client_with(echo.clone()));
    let input: &[u8] = b"kettle\n\xe8\ntoaster\nquit\n";

    interactive::run(session.clone(), input).await.unwrap();

    let mut seen = echo.seen();
    seen.sort();
    assert_eq!(seen, vec!["kettle".to_string(), "toaster".to_string()]);

    let (ticket, outcome) = session.slot().current().unwrap();
    assert_eq!(ticket, 2);
    assert_eq!(outcome.unwrap().unwrap().category.as_deref(), Some("toaster"));
}

#[tokio::test(start_paused = true)]
async fn test_interactive_read_failure_lets_running_consult_finish() {
    let echo = Arc::new(EchoOracle::new().delay("kettle", Duration::from_secs(3)));
    let session = ConsultSession::new(client_with(echo.clone()));
    let input = BufReader::new(BrokenInput {
        data: b"kettle\n",
        sent: false,
    });

    interactive::run(session.clone(), input).await.unwrap();

    assert_eq!(echo.seen(), vec!["kettle".to_string()]);
    let (ticket, outcome) = session.slot().current().unwrap();
    assert_eq!(ticket, 1);
    assert_eq!(outcome.unwrap().unwrap().category.as_deref(), Some("kettle"));
}

#[tokio::test]
async fn test_consult_command_propagates_oracle_errors() {
    let echo = Arc::new(EchoOracle::new().fail("Nespresso", 429));
    let client = client_with(echo);

    let err = handle_consult(&client, "Nespresso", OutputFormat::Json)
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_oracle(),
        Some(OracleError::RateLimited { .. })
    ));
    assert!(err.to_string().starts_with("Rate Limit Exceeded (429)"));
}

#[tokio::test]
async fn test_consult_command_blank_query_is_a_no_op() {
    let echo = Arc::new(EchoOracle::new());
    let client = client_with(echo.clone());

    handle_consult(&client, "   ", OutputFormat::Text).await.unwrap();
    assert!(echo.seen().is_empty());
}

#[tokio::test]
async fn test_challenge_unknown_id_sends_nothing() {
    let echo = Arc::new(EchoOracle::new());
    let client = client_with(echo.clone());

    let err = handle_challenge(&client, Catalog::builtin(), "spork", "Le Creuset")
        .await
        .unwrap_err();
    assert!(matches!(err, PlatonicError::NotFound(_)));
    assert!(echo.seen().is_empty());
}

#[tokio::test]
async fn test_challenge_blank_challenger_is_a_no_op() {
    let echo = Arc::new(EchoOracle::new());
    let client = client_with(echo.clone());

    handle_challenge(&client, Catalog::builtin(), "frying-pan", "  \t ")
        .await
        .unwrap();
    assert!(echo.seen().is_empty());
}

#[tokio::test]
async fn test_challenge_sends_fixed_user_text() {
    let echo = Arc::new(EchoOracle::new());
    let client = client_with(echo.clone());

    handle_challenge(&client, Catalog::builtin(), "frying-pan", "Le Creuset Skillet")
        .await
        .unwrap();
    assert_eq!(echo.seen(), vec!["Evaluate this challenger.".to_string()]);
}
