//! Session gate: loading state, initial fetch, and last-event-wins cache.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use civicflow::{AuthEvent, IdentityCollaborator, Session, SessionGate, SessionState};
use tokio::sync::{mpsc, Notify};

/// Collaborator whose initial fetch blocks until the test releases it.
struct ScriptedIdentity {
    initial: Option<Session>,
    release_fetch: Arc<Notify>,
    events: Mutex<Option<mpsc::UnboundedReceiver<AuthEvent>>>,
}

impl ScriptedIdentity {
    fn new(
        initial: Option<Session>,
    ) -> (Arc<Self>, Arc<Notify>, mpsc::UnboundedSender<AuthEvent>) {
        let release_fetch = Arc::new(Notify::new());
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let identity = Arc::new(ScriptedIdentity {
            initial,
            release_fetch: release_fetch.clone(),
            events: Mutex::new(Some(events_rx)),
        });
        (identity, release_fetch, events_tx)
    }
}

#[async_trait]
impl IdentityCollaborator for ScriptedIdentity {
    async fn current_session(&self) -> Option<Session> {
        self.release_fetch.notified().await;
        self.initial.clone()
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthEvent> {
        self.events
            .lock()
            .unwrap()
            .take()
            .expect("subscribe is called once per activation")
    }
}

fn citizen() -> Session {
    Session {
        user_id: "user-42".into(),
        email: Some("citizen@example.org".into()),
    }
}

#[tokio::test]
async fn gate_reports_loading_until_the_initial_fetch_lands() {
    let (identity, release_fetch, _events_tx) = ScriptedIdentity::new(Some(citizen()));
    let gate = SessionGate::activate(identity);

    // Fetch is still blocked: the cache must read as loading, not signed out.
    assert_eq!(gate.current(), SessionState::Loading);

    let mut watcher = gate.watch();
    release_fetch.notify_one();
    watcher.changed().await.unwrap();
    assert_eq!(gate.current(), SessionState::SignedIn(citizen()));
}

#[tokio::test]
async fn absent_initial_session_resolves_to_signed_out() {
    let (identity, release_fetch, _events_tx) = ScriptedIdentity::new(None);
    let gate = SessionGate::activate(identity);
    let mut watcher = gate.watch();

    release_fetch.notify_one();
    watcher.changed().await.unwrap();
    assert_eq!(gate.current(), SessionState::SignedOut);
    assert!(!gate.current().is_signed_in());
}

#[tokio::test]
async fn push_events_overwrite_the_cache_last_wins() {
    let (identity, release_fetch, events_tx) = ScriptedIdentity::new(Some(citizen()));
    let gate = SessionGate::activate(identity);
    let mut watcher = gate.watch();

    release_fetch.notify_one();
    watcher.wait_for(SessionState::is_signed_in).await.unwrap();

    events_tx
        .send(AuthEvent::SignedOut {
            timestamp: Utc::now(),
        })
        .unwrap();
    let relogged = Session {
        user_id: "user-43".into(),
        email: None,
    };
    events_tx
        .send(AuthEvent::SignedIn {
            session: relogged.clone(),
            timestamp: Utc::now(),
        })
        .unwrap();

    let state = watcher
        .wait_for(|state| state.session().map(|s| s.user_id.as_str()) == Some("user-43"))
        .await
        .unwrap()
        .clone();
    assert_eq!(state, SessionState::SignedIn(relogged));
}

#[tokio::test]
async fn sign_out_event_flips_an_authenticated_gate() {
    let (identity, release_fetch, events_tx) = ScriptedIdentity::new(Some(citizen()));
    let gate = SessionGate::activate(identity);
    let mut watcher = gate.watch();

    release_fetch.notify_one();
    watcher.wait_for(SessionState::is_signed_in).await.unwrap();

    events_tx
        .send(AuthEvent::SignedOut {
            timestamp: Utc::now(),
        })
        .unwrap();
    watcher
        .wait_for(|state| *state == SessionState::SignedOut)
        .await
        .unwrap();
    assert_eq!(gate.current(), SessionState::SignedOut);
}

#[tokio::test]
async fn dropping_the_gate_ends_the_change_stream() {
    let (identity, release_fetch, _events_tx) = ScriptedIdentity::new(None);
    let gate = SessionGate::activate(identity);
    let mut watcher = gate.watch();

    release_fetch.notify_one();
    watcher.changed().await.unwrap();
    watcher.borrow_and_update();

    drop(gate);
    assert!(watcher.changed().await.is_err());
}
