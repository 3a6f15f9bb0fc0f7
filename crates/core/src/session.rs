//! # Session Context
//!
//! Whether the visitor presented a session token, resolved once per request
//! and handed to page rendering as a plain value. There is no real
//! authentication: a present token yields the demo learner dashboard.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Name of the cookie that carries the opaque session-presence flag
pub const SESSION_COOKIE: &str = "authToken";

/// Kind of entry in the learner's recent activity feed
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Completed,
    Started,
    Scheduled,
}

impl ActivityKind {
    /// Prefix shown before the course title
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "✓ Completed: ",
            Self::Started => "→ Started: ",
            Self::Scheduled => "📅 Next: ",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub label: &'static str,
    pub course: String,
}

impl Activity {
    fn new(kind: ActivityKind, course: &str) -> Self {
        Self {
            kind,
            label: kind.label(),
            course: course.to_string(),
        }
    }
}

/// Dashboard data for a signed-in learner
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Learner {
    pub name: String,
    pub active_courses: u32,
    /// Overall progress, percent
    pub progress: u8,
    pub current_course: String,
    /// Progress through `current_course`, percent
    pub current_progress: u8,
    pub recent_activity: Vec<Activity>,
}

impl Learner {
    /// The fixed learner shown to any visitor holding a session token
    pub fn demo() -> Self {
        Self {
            name: "John Doe".to_string(),
            active_courses: 12,
            progress: 85,
            current_course: "Python Basics".to_string(),
            current_progress: 75,
            recent_activity: vec![
                Activity::new(ActivityKind::Completed, "JavaScript Fundamentals"),
                Activity::new(ActivityKind::Started, "React Development"),
                Activity::new(ActivityKind::Scheduled, "Data Structures & Algorithms"),
            ],
        }
    }
}

/// Session state passed explicitly into the view tree
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(tag = "state", content = "learner", rename_all = "snake_case")]
pub enum SessionContext {
    #[default]
    Anonymous,
    Authenticated(Learner),
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn learner(&self) -> Option<&Learner> {
        match self {
            Self::Authenticated(learner) => Some(learner),
            Self::Anonymous => None,
        }
    }
}

/// Checks whether a session token identifies a learner
#[async_trait]
pub trait SessionProbe: Send + Sync {
    async fn probe(&self, token: Option<&str>) -> Result<Option<Learner>>;
}

/// Simulated session check: waits a fixed delay, then treats any
/// well-formed token as the demo learner.
#[derive(Debug, Clone, Default)]
pub struct TokenProbe {
    delay: Duration,
}

impl TokenProbe {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SessionProbe for TokenProbe {
    async fn probe(&self, token: Option<&str>) -> Result<Option<Learner>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match token {
            None | Some("") => Ok(None),
            Some(token) if token.chars().any(|c| c.is_whitespace() || c.is_control()) => {
                Err(Error::Session("malformed session token".to_string()))
            }
            Some(_) => Ok(Some(Learner::demo())),
        }
    }
}

/// Resolve the session for one request. Probe failures are logged and
/// fall back to the anonymous view.
pub async fn resolve_session(probe: &dyn SessionProbe, token: Option<&str>) -> SessionContext {
    match probe.probe(token).await {
        Ok(Some(learner)) => SessionContext::Authenticated(learner),
        Ok(None) => SessionContext::Anonymous,
        Err(e) => {
            tracing::warn!("Error checking session status: {}", e);
            SessionContext::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProbe;

    #[async_trait]
    impl SessionProbe for FailingProbe {
        async fn probe(&self, _token: Option<&str>) -> Result<Option<Learner>> {
            Err(Error::Session("backend unavailable".to_string()))
        }
    }

    #[test]
    fn test_no_token_is_anonymous() {
        let session = tokio_test::block_on(resolve_session(&TokenProbe::default(), None));
        assert_eq!(session, SessionContext::Anonymous);
        assert!(session.learner().is_none());
    }

    #[test]
    fn test_token_yields_demo_learner() {
        let session =
            tokio_test::block_on(resolve_session(&TokenProbe::default(), Some("abc123")));

        assert!(session.is_authenticated());
        let learner = session.learner().unwrap();
        assert_eq!(learner.current_course, "Python Basics");
        assert_eq!(learner.recent_activity.len(), 3);
    }

    #[test]
    fn test_probe_error_falls_back_to_anonymous() {
        let session = tokio_test::block_on(resolve_session(&FailingProbe, Some("abc123")));
        assert_eq!(session, SessionContext::Anonymous);
    }

    #[test]
    fn test_malformed_token_falls_back_to_anonymous() {
        let session =
            tokio_test::block_on(resolve_session(&TokenProbe::default(), Some("bad token")));
        assert_eq!(session, SessionContext::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_waits_for_delay() {
        let probe = TokenProbe::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        let learner = probe.probe(Some("abc123")).await.unwrap();

        assert!(learner.is_some());
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn test_session_serializes_with_state_tag() {
        let json = serde_json::to_value(SessionContext::Anonymous).unwrap();
        assert_eq!(json["state"], "anonymous");
    }
}
