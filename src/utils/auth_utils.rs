use actix_web::HttpResponse;
use diesel::prelude::*;
use diesel::PgConnection;

use crate::models::user_models::User;
use crate::schema::users::dsl::*;

/// Load the acting user and require the admin flag.
/// Returns a ready-made error response otherwise.
pub fn require_admin(conn: &mut PgConnection, acting_user_id: i32) -> Result<User, HttpResponse> {
    let user = users
        .find(acting_user_id)
        .select(User::as_select())
        .first::<User>(conn)
        .optional();

    match user {
        Ok(Some(u)) if u.is_admin => Ok(u),
        Ok(Some(_)) => Err(HttpResponse::Forbidden().body("Admin only")),
        Ok(None) => Err(HttpResponse::Unauthorized().body("Unknown user")),
        Err(_) => Err(HttpResponse::InternalServerError().body("DB error")),
    }
}
