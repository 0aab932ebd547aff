use actix_web::http::StatusCode;

use crate::api::{error, response::Response, success::Success};
use crate::modules::system::schema::{SystemStatus, AGENTS};
use crate::router::Request;

pub const NOT_FOUND_BODY: &str = "Not Found";

pub async fn health(_req: Request) -> Result<Response, error::Error> {
    Ok(Response::text(StatusCode::OK, "OK"))
}

/// Overall status summary. The agent count follows the roster.
pub async fn system_status(_req: Request) -> Result<Response, error::Error> {
    let status = SystemStatus {
        ai_processing: "ONLINE",
        secure_comms: "ENCRYPTED",
        database: "OPERATIONAL",
        active_agents: AGENTS.len(),
    };
    Ok(Success::ok(status).into_response()?)
}

pub async fn agents_status(_req: Request) -> Result<Response, error::Error> {
    Ok(Success::ok(&AGENTS).into_response()?)
}

pub async fn not_found(_req: Request) -> Result<Response, error::Error> {
    Ok(Response::not_found(NOT_FOUND_BODY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::Method;
    use serde_json::{json, Value};

    fn parse(res: &Response) -> Value {
        serde_json::from_slice(res.body()).unwrap()
    }

    #[actix_web::test]
    async fn test_system_status() {
        let res = system_status(Request::new(Method::GET, "/api/system/status")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.content_type(), Some("application/json"));
        assert_eq!(
            parse(&res),
            json!({
                "aiProcessing": "ONLINE",
                "secureComms": "ENCRYPTED",
                "database": "OPERATIONAL",
                "activeAgents": 6
            })
        );
    }

    #[actix_web::test]
    async fn test_agents_status_lists_roster() {
        let res = agents_status(Request::new(Method::GET, "/api/agents/status")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let agents = parse(&res);
        let agents = agents.as_array().unwrap();
        assert_eq!(agents.len(), 6);
        assert_eq!(
            agents[2],
            json!({
                "id": "LOGISTICS-03",
                "name": "Logistics Coordination Agent",
                "status": "WARNING",
                "currentMission": "Supply Chain Analysis"
            })
        );
        assert_eq!(agents[5]["status"], "CRITICAL");
    }
}
