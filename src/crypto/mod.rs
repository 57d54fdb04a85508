mod token;

pub use token::hash_session_token;
