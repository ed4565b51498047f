pub mod character_models;
pub mod favorite_models;
pub mod planet_models;
pub mod session_models;
pub mod token_models;
pub mod user_models;
