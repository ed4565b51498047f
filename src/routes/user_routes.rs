use actix_web::web;

use crate::handlers::user_handlers::list_users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(list_users));
}
