use actix_web::web;

use crate::handlers::favorite_handlers::{
    add_favorite_person, add_favorite_planet, list_favorites, remove_favorite_person,
    remove_favorite_planet,
};
use crate::middleware::auth_middleware::RequireAuth;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users/favorites")
            .route(web::get().to(list_favorites))
            .wrap(RequireAuth),
    );
    cfg.service(
        web::scope("/favorite")
            .route("/planet/{planet_id}", web::post().to(add_favorite_planet))
            .route("/planet/{planet_id}", web::delete().to(remove_favorite_planet))
            .route("/people/{people_id}", web::post().to(add_favorite_person))
            .route("/people/{people_id}", web::delete().to(remove_favorite_person))
            .wrap(RequireAuth),
    );
}
