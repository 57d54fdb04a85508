pub mod address_service;
pub mod session_service;
pub mod user_service;

pub use address_service::AddressService;
pub use session_service::{ SessionContext, SessionService };
pub use user_service::UserService;
