//! Maintenance endpoints, guarded by the optional admin bearer token.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/admin/reload` | Re-read the data files and swap them in |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AdminAuth;
