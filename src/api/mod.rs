// HTTP surface: JSON catalog endpoints plus static assets.

pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::router;
