use actix_web::web;

use crate::handlers::planet_handlers::{get_planet, list_planets};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/planets")
            .route("", web::get().to(list_planets))
            .route("/{planet_id}", web::get().to(get_planet)),
    );
}
