mod dto;
mod store;

pub use dto::{GoogleLoginRequest, GoogleLoginResponse, User};
pub use store::{SessionState, SessionStore};
