//! Request-scoped database session.

use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, Transaction};

/// One pooled connection, owned by a single request.
///
/// The connection returns to the pool when the session is dropped, whether
/// the handler finished, returned an error, or unwound. Writes go through
/// [`Session::begin`]; a transaction dropped without `commit` rolls back.
#[derive(Debug)]
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) fn new(conn: PoolConnection<Sqlite>) -> Self {
        tracing::trace!("Session acquired");
        Self { conn }
    }

    /// Borrow the underlying connection for read-only queries.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Start a transaction on this session's connection.
    pub async fn begin(&mut self) -> Result<Transaction<'_, Sqlite>, sqlx::Error> {
        sqlx::Connection::begin(&mut *self.conn).await
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::trace!("Session released");
    }
}
