//! Session registry and cookie middleware
//!
//! Each browser gets a random session id in the `recipebox_session` cookie.
//! The middleware resolves (or mints) the id and hands the matching
//! [`SessionHandle`] to the screen handlers as a request extension.

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use recipebox_common::Session;

use crate::AppState;

pub const SESSION_COOKIE: &str = "recipebox_session";

/// Sessions not touched for this long are dropped when a new one is minted
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(12 * 60 * 60);

struct SessionEntry {
    session: Arc<Mutex<Session>>,
    last_seen: Instant,
}

/// All live sessions, keyed by cookie id
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    idle_timeout: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Session for `id`, created on first use
    ///
    /// Creating a session first evicts every session idle for longer than
    /// the registry's timeout.
    pub async fn get_or_create(&self, id: Uuid) -> Arc<Mutex<Session>> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        if let Some(entry) = sessions.get_mut(&id) {
            entry.last_seen = now;
            return entry.session.clone();
        }

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {} idle sessions", evicted);
        }

        let session = Arc::new(Mutex::new(Session::new()));
        sessions.insert(
            id,
            SessionEntry {
                session: session.clone(),
                last_seen: now,
            },
        );
        debug!("Created session {} ({} live)", id, sessions.len());
        session
    }
}

/// The caller's session, as seen by a handler
#[derive(Clone)]
pub struct SessionHandle {
    pub id: Uuid,
    session: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }
}

/// Attach the caller's session to the request, minting a cookie if needed
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let (id, minted) = match session_id_from_headers(request.headers()) {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };

    let session = state.sessions.get_or_create(id).await;
    request.extensions_mut().insert(SessionHandle { id, session });

    let mut response = next.run(request).await;

    if minted {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Strict", SESSION_COOKIE, id);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!("Could not encode session cookie: {}", e),
        }
    }

    response
}

/// Session id from the `Cookie` header(s), if present and well-formed
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}
