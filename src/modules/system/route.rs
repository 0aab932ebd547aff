use crate::modules::system::handle::{agents_status, health, system_status};
use crate::router::{handler, PatternError, RouteTable};

pub fn configure(table: &mut RouteTable) -> Result<(), PatternError> {
    table.get("/health", handler(health))?;
    table.get("/api/system/status", handler(system_status))?;
    table.get("/api/agents/status", handler(agents_status))?;
    Ok(())
}
