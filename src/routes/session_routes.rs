use actix_web::web;

use crate::handlers::session_handlers::login;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login));
}
