pub mod errors;
pub mod issuer;
pub mod scope;

pub use errors::TokenError;
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use scope::TokenScope;
