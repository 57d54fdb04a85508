pub mod organization;
pub mod user;
pub mod membership;
pub mod address;
pub mod session;

pub use organization::Entity as Organization;
pub use user::Entity as User;
pub use membership::Entity as Membership;
pub use address::Entity as Address;
pub use session::Entity as Session;
