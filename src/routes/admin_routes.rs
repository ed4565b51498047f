use actix_web::web;

use crate::handlers::character_handlers::{create_person, delete_person, update_person};
use crate::handlers::planet_handlers::{create_planet, delete_planet, update_planet};
use crate::handlers::user_handlers::{create_user, delete_user};
use crate::middleware::auth_middleware::RequireAuth;

/// Typed per-entity management endpoints; every handler additionally
/// checks the acting user's admin flag.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/people", web::post().to(create_person))
            .route("/people/{people_id}", web::put().to(update_person))
            .route("/people/{people_id}", web::delete().to(delete_person))
            .route("/planets", web::post().to(create_planet))
            .route("/planets/{planet_id}", web::put().to(update_planet))
            .route("/planets/{planet_id}", web::delete().to(delete_planet))
            .route("/users", web::post().to(create_user))
            .route("/users/{user_id}", web::delete().to(delete_user))
            .wrap(RequireAuth),
    );
}
