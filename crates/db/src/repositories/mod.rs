//! Repositories: one zero-sized type per table, methods take the connection.
//!
//! Every method borrows a `&mut SqliteConnection`, so callers pass either a
//! request [`Session`](crate::Session) connection or an open transaction.

pub mod country_repo;
pub mod division_repo;
pub mod fighter_repo;

pub use country_repo::CountryRepo;
pub use division_repo::DivisionRepo;
pub use fighter_repo::FighterRepo;
