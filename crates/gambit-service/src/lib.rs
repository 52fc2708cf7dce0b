//! HTTP move service for gambit.

pub mod engine;
pub mod error;
pub mod request;
pub mod server;

pub use engine::{MoveService, ServiceConfig};
pub use error::ServiceError;
pub use request::{BotMoveRequest, BotMoveResponse, MoveRequest};
pub use server::router;
