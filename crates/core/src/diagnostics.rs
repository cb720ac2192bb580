//! Backend diagnostics report.
//!
//! The report never carries an error: every probe outcome, including
//! failures, is rendered as a human-readable status string.

use serde::Serialize;

/// Maximum number of relation names included in a report.
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Error messages are cut to this many characters before being reported.
pub const MAX_ERROR_CHARS: usize = 50;

const BACKEND_RUNNING: &str = "✅ Running";
const SET: &str = "✅ Set";
const NOT_SET: &str = "❌ Not Set";
const CONNECTED: &str = "Connected";
const NOT_CONNECTED: &str = "Not Connected";

/// Outcome of probing the optional database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseProbe {
    /// No database is configured.
    NotInitialized,
    /// A database is configured but no handle could be built from it.
    Unavailable { reason: String },
    /// A handle exists; carries the result of listing its relations.
    Connected(Result<Vec<String>, String>),
}

/// Which database-related environment variables were present at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvPresence {
    pub database_url: bool,
    pub database_name: bool,
}

/// Payload of the `/test` diagnostics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// Render a probe outcome and environment presence into a report.
pub fn build_report(probe: DatabaseProbe, env: EnvPresence) -> DiagnosticReport {
    let (database, connection_status, collections) = match probe {
        DatabaseProbe::NotInitialized => (
            "⚠️  Available but not initialized".to_string(),
            NOT_CONNECTED,
            Vec::new(),
        ),
        DatabaseProbe::Unavailable { reason } => (
            format!("❌ Error: {}", truncate_chars(&reason, MAX_ERROR_CHARS)),
            NOT_CONNECTED,
            Vec::new(),
        ),
        DatabaseProbe::Connected(Ok(mut names)) => {
            names.truncate(MAX_LISTED_COLLECTIONS);
            ("✅ Connected & Working".to_string(), CONNECTED, names)
        }
        DatabaseProbe::Connected(Err(err)) => (
            format!(
                "⚠️  Connected but Error: {}",
                truncate_chars(&err, MAX_ERROR_CHARS)
            ),
            CONNECTED,
            Vec::new(),
        ),
    };

    DiagnosticReport {
        backend: BACKEND_RUNNING,
        database,
        database_url: presence(env.database_url),
        database_name: presence(env.database_name),
        connection_status,
        collections,
    }
}

fn presence(set: bool) -> &'static str {
    if set {
        SET
    } else {
        NOT_SET
    }
}

/// Keep at most `max` characters of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
