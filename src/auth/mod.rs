pub mod simulated;
pub mod token;
pub mod user;

pub use simulated::{AuthConfig, AuthError, LoginRequest, RegisterRequest, SimulatedAuth};
pub use user::{User, UserType};
