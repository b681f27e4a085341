//! Connection management.
//!
//! Connections are scoped to a single command invocation and released by
//! drop on every exit path.

use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder};
use tracing::info;

use festreg_model::DbParams;

use crate::error::{DbError, Result};

/// Open a connection to the registration database.
pub fn connect(params: &DbParams) -> Result<Conn> {
    let opts = OptsBuilder::new()
        .ip_or_hostname(Some(params.host.clone()))
        .user(Some(params.user.clone()))
        .pass(Some(params.pass.clone()))
        .db_name(Some(params.db.clone()));
    let conn = Conn::new(opts).map_err(|err| DbError::Connection(err.to_string()))?;
    info!(host = %params.host, db = %params.db, "connected to database");
    Ok(conn)
}

/// Clear the session SQL mode so aggregate queries without matching
/// GROUP BY columns are accepted (`only_full_group_by` off).
pub fn disable_strict_group_by(conn: &mut Conn) -> Result<()> {
    conn.query_drop("SET SESSION sql_mode = ''")
        .map_err(|err| DbError::Query(err.to_string()))
}
