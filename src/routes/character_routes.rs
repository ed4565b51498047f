use actix_web::web;

use crate::handlers::character_handlers::{get_person, list_people};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/people")
            .route("", web::get().to(list_people))
            .route("/{people_id}", web::get().to(get_person)),
    );
}
