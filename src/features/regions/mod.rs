//! Vietnamese administrative units feature.
//!
//! Serves the two-level hierarchy in force since the 2025 reorganisation:
//! provinces (tỉnh / thành phố) and wards (phường / xã / đặc khu). Both are
//! read from JSON documents into an in-memory snapshot that can be swapped
//! at runtime through the admin reload endpoint.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/provinces` | Search and page provinces |
//! | GET | `/api/v1/provinces/types` | Distinct province types |
//! | GET | `/api/v1/provinces/{code}` | Get province by code |
//! | GET | `/api/v1/provinces/{code}/wards` | List wards in a province |
//! | GET | `/api/v1/wards` | Search and page wards |
//! | GET | `/api/v1/wards/types` | Distinct ward types |
//! | GET | `/api/v1/wards/{code}` | Get ward with its province |
//! | GET | `/api/v1/search` | Search provinces and wards together |
//! | POST | `/api/v1/address/validate` | Check a province/ward pair |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegionService;
