pub mod token;
pub mod user;
pub mod workout;

pub use token::PostgresTokenRepository;
pub use user::PostgresUserRepository;
pub use workout::PostgresWorkoutRepository;
