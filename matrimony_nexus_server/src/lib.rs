//! # Matrimony Nexus Server
//! This crate hosts the HTTP surface of the Matrimony Nexus matchmaking platform. It is responsible for:
//! * Issuing and verifying bearer tokens (`/jwt` and the two request guards).
//! * Routing every REST endpoint to one logical persistence operation in the engine.
//! * Bridging card payments to Stripe (`/create-payment-intent`).
//!
//! ## Configuration
//! The server is configured via `MNS_*` environment variables. See [config](config/index.html) for more information.
//!
//! ## Authorization
//! Routes come in three flavours: open, authenticated (a valid bearer token is required), and admin (the token's
//! email must additionally belong to a user whose persisted role is `admin`, checked live on every call). A few
//! routes also compare the token's email against the email in the path. See [middleware](middleware/index.html).

pub mod auth;
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
