pub mod admin_routes;
pub mod character_routes;
pub mod favorite_routes;
pub mod planet_routes;
pub mod session_routes;
pub mod user_routes;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Favorites first: "/users/favorites" must win over the "/users" list route.
    favorite_routes::configure(cfg);
    character_routes::configure(cfg);
    planet_routes::configure(cfg);
    user_routes::configure(cfg);
    session_routes::configure(cfg);
    admin_routes::configure(cfg);
}
