pub mod errors;
pub mod hasher;

pub use errors::PasswordError;
pub use hasher::PasswordHasher;
pub use hasher::BCRYPT_MAX_PASSWORD_BYTES;
pub use hasher::MAX_COST;
pub use hasher::MIN_COST;
