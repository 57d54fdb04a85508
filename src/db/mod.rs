pub mod entity;
pub use entity::*;

mod address_repository;
pub use address_repository::AddressRepository;

mod user_repository;
pub use user_repository::UserRepository;

mod session_repository;
pub use session_repository::SessionRepository;
