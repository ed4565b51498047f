use actix_web::{web, HttpResponse, Responder, ResponseError};
use bcrypt::verify;
use chrono::{Duration, Utc};
use diesel::prelude::*;

use crate::db::{get_conn, DbPool};
use crate::models::session_models::{LoginRequest, TokenResponse};
use crate::models::user_models::User;
use crate::schema::users;
use crate::utils::token_utils::generate_jwt;

pub async fn login(
    pool: web::Data<DbPool>,
    payload: web::Json<LoginRequest>,
    secret: web::Data<Vec<u8>>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let user_result: QueryResult<User> = users::table
        .filter(users::email.eq(&payload.email))
        .select(User::as_select())
        .first(&mut conn);

    let user = match user_result {
        Ok(u) => u,
        Err(diesel::result::Error::NotFound) => {
            return HttpResponse::Unauthorized().body("Invalid credentials")
        }
        Err(_) => return HttpResponse::InternalServerError().body("DB error"),
    };

    // Verify password using bcrypt
    if !verify(&payload.password, &user.password_hash).unwrap_or(false) {
        return HttpResponse::Unauthorized().body("Invalid credentials");
    }

    let token = generate_jwt(user.id, &secret);
    let expiration = Utc::now() + Duration::hours(24);

    HttpResponse::Ok().json(TokenResponse {
        token,
        expires_at: expiration.naive_utc(),
    })
}
