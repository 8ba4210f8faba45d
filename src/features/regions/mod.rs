//! Region CRUD feature.
//!
//! Exposes basic database operations over the Northwind `region` table.
//! Region ids are assigned by the caller, not generated by the service.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/region` | List all regions (404 when the table is empty) |
//! | GET | `/api/region/{id}` | Get region by id |
//! | POST | `/api/region` | Create a region |
//! | PUT | `/api/region/{id}` | Replace a region (optimistic concurrency aware) |
//! | DELETE | `/api/region/{id}` | Delete a region |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegionService;
