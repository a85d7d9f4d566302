//! Database connection scenario (menu item 4)
//!
//! Connection URLs go through a tiny driver table. Only SQLite is registered:
//!
//! - `sqlite::memory:` opens a private in-memory database
//! - `sqlite:<path>` and `sqlite://<path>` open an existing database file
//!
//! Files are opened read-write without `SQLITE_OPEN_CREATE`, so a path that does not
//! exist is rejected instead of silently creating an empty database. The
//! connection is then validated by reading the schema version, which also rejects
//! files that are not SQLite databases. Any other URL has no driver.

use super::{Scenario, ScenarioError};
use crate::console::Console;
use crate::fault::{CatchScope, Fault, FaultKind};
use rusqlite::{Connection, OpenFlags};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// URL and credentials for one connection attempt
#[derive(Clone)]
pub struct Credentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connect to a database and validate the connection
pub struct ConnectDatabase;

impl ConnectDatabase {
    /// Open the connection described by `credentials`
    ///
    /// SQLite has no authentication; a username is only logged and the password
    /// is ignored.
    pub fn connect(credentials: &Credentials) -> Result<Connection, Fault> {
        let url = credentials.url.as_str();
        let target = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .ok_or_else(|| Fault::NoDriver {
                url: url.to_string(),
            })?;

        debug!(url, username = %credentials.username, "connecting");

        let conn = if target == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open_with_flags(
                target,
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_URI
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?
        };

        let version: i64 = conn.query_row("PRAGMA schema_version", [], |row| row.get(0))?;
        info!(url, schema_version = version, "connection validated");
        Ok(conn)
    }
}

impl Scenario for ConnectDatabase {
    const TITLE: FaultKind = FaultKind::DatabaseError;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::DatabaseError]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let credentials = Credentials {
            url: console.prompt_line("Enter database URL: ")?,
            username: console.prompt_line("Enter username: ")?,
            password: console.prompt_line("Enter password: ")?,
        };

        let conn = Self::connect(&credentials)?;
        conn.close().map_err(|(_, e)| Fault::Database(e))?;
        debug!(url = %credentials.url, "connection closed");

        Ok("Connection successful!".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    /// Log sink shared between the subscriber and the test
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn credentials(url: &str) -> Credentials {
        Credentials {
            url: url.to_string(),
            username: "admin".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_unknown_scheme_has_no_driver() {
        let err = ConnectDatabase::connect(&credentials("postgres://localhost/db")).unwrap_err();
        assert_eq!(err.kind(), FaultKind::DatabaseError);
        assert_eq!(
            err.to_string(),
            "no database driver for URL `postgres://localhost/db`"
        );
    }

    #[test]
    fn test_in_memory_connects() {
        assert!(ConnectDatabase::connect(&credentials("sqlite::memory:")).is_ok());
    }

    #[test]
    fn test_missing_file_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        let url = format!("sqlite:{}", path.display());

        let err = ConnectDatabase::connect(&credentials(&url)).unwrap_err();
        assert!(matches!(err, Fault::Database(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_existing_database_connects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER);")
            .unwrap();

        let url = format!("sqlite://{}", path.display());
        assert!(ConnectDatabase::connect(&credentials(&url)).is_ok());
    }

    #[test]
    fn test_non_database_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain text\n".repeat(64)).unwrap();

        let url = format!("sqlite:{}", path.display());
        let err = ConnectDatabase::connect(&credentials(&url)).unwrap_err();
        assert_eq!(err.kind(), FaultKind::DatabaseError);
    }

    #[test]
    fn test_password_is_never_logged() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut console = ScriptedConsole::scripted("sqlite::memory:\nroot\nhunter2\n");
        let message = tracing::subscriber::with_default(subscriber, || {
            ConnectDatabase.trigger(&mut console)
        })
        .unwrap();
        assert_eq!(message, "Connection successful!");

        let logs = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("read console line"));
        assert!(logs.contains("root"));
        assert!(!logs.contains("hunter2"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let shown = format!("{:?}", credentials("sqlite::memory:"));
        assert!(shown.contains("admin"));
        assert!(!shown.contains("secret"));
    }
}
