//! Persistence seam for challenges, teams and submission records.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod records;
pub mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use records::*;
pub use traits::HackathonStore;

#[cfg(test)]
pub use traits::MockHackathonStore;
