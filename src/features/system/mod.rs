//! Service status endpoints.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Service description and endpoint map |
//! | GET | `/health`, `/api/v1/health` | Liveness and data readiness |
//! | GET | `/api/v1/stats` | Dataset counts, uptime and version |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::SystemService;
