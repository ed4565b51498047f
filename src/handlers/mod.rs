pub mod character_handlers;
pub mod favorite_handlers;
pub mod planet_handlers;
pub mod session_handlers;
pub mod user_handlers;
