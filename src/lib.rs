pub mod config;
pub mod enums;
pub mod error;
pub mod crypto;
pub mod db;
pub mod services;
pub mod api;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use enums::{ GlobalRole, MembershipRole };
pub use error::{ AppError, Result };
