//! Request routing
//!
//! An explicit, ordered route table with first-match-wins semantics, and the
//! dispatcher that the HTTP host hands every request to.

pub mod pattern;
pub mod request;
pub mod table;

pub use pattern::{Pattern, PatternError};
pub use request::Request;
pub use table::{handler, Dispatcher, Handler, Route, RouteMethod, RouteTable};

use actix_web::{web, HttpRequest};

use crate::api::response::Response;

/// actix default service: every request, whatever its method or path, goes
/// through the dispatcher.
pub async fn serve(
    req: HttpRequest,
    body: web::Bytes,
    dispatcher: web::Data<Dispatcher>,
) -> Response {
    dispatcher.dispatch(Request::from_http(&req, body)).await
}
