//! Domain rules for the spy cat agency.
//!
//! Pure validation and state-machine guards shared by the database and API
//! layers, plus the breed catalog used to vet new cats.

pub mod breeds;
pub mod cat;
pub mod error;
pub mod mission;
pub mod types;
