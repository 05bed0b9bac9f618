mod admin;
mod jwt;

pub use admin::{AdminMiddlewareFactory, AdminMiddlewareService};
pub use jwt::{JwtMiddlewareFactory, JwtMiddlewareService};
