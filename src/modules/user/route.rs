use std::sync::Arc;

use crate::modules::user::handle::list_users;
use crate::router::{handler, PatternError, RouteTable};
use crate::store::QueryExecutor;

pub fn configure(table: &mut RouteTable, db: Arc<dyn QueryExecutor>) -> Result<(), PatternError> {
    table.get("/users", handler(move |_req| list_users(Arc::clone(&db))))?;
    Ok(())
}
