use actix_web::web::ReqData;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use bcrypt::hash;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::models::token_models::Claims;
use crate::models::user_models::{CreateUser, NewUser, User, UserResponse};
use crate::schema::favorites::dsl as fav_dsl;
use crate::schema::users::dsl::*;
use crate::utils::auth_utils::require_admin;

pub async fn list_users(pool: web::Data<DbPool>) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    match users.select(User::as_select()).load::<User>(&mut conn) {
        Ok(list) => {
            let list: Vec<UserResponse> = list.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(list)
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn create_user(
    pool: web::Data<DbPool>,
    payload: web::Json<CreateUser>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    if let Err(resp) = require_admin(&mut conn, claims.sub) {
        return resp;
    }

    let data = payload.into_inner();

    if data.email.trim().is_empty() || data.password.is_empty() {
        return HttpResponse::BadRequest().body("email and password are required");
    }

    // Basic uniqueness check
    match users
        .filter(email.eq(&data.email))
        .select(User::as_select())
        .first::<User>(&mut conn)
        .optional()
    {
        Ok(Some(_)) => return HttpResponse::Conflict().body("email already exists"),
        Ok(None) => {}
        Err(_) => return HttpResponse::InternalServerError().body("Failed to check email"),
    }

    let pwd_hash = match hash(&data.password, bcrypt::DEFAULT_COST) {
        Ok(h) => h,
        Err(_) => return HttpResponse::InternalServerError().body("Failed to hash password"),
    };

    let new_user = NewUser {
        email: data.email,
        password_hash: pwd_hash,
        is_admin: data.is_admin.unwrap_or(false),
    };

    match diesel::insert_into(users)
        .values(&new_user)
        .get_result::<User>(&mut conn)
    {
        Ok(created) => HttpResponse::Created().json(UserResponse::from(created)),
        // The pre-check races with concurrent creates; the UNIQUE index is
        // what actually decides, so its violation gets the same 409.
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            HttpResponse::Conflict().body("email already exists")
        }
        Err(_) => HttpResponse::InternalServerError().body("Failed to create user"),
    }
}

pub async fn delete_user(
    pool: web::Data<DbPool>,
    user_id_param: web::Path<i32>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    if let Err(resp) = require_admin(&mut conn, claims.sub) {
        return resp;
    }

    let target_user_id = user_id_param.into_inner();

    // The user's favorites go with the user.
    let deleted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
        diesel::delete(fav_dsl::favorites.filter(fav_dsl::user_id.eq(target_user_id)))
            .execute(conn)?;
        diesel::delete(users.find(target_user_id)).execute(conn)
    });

    match deleted {
        Ok(count) if count > 0 => HttpResponse::Ok().json(json!({ "message": "User deleted" })),
        Ok(_) => HttpResponse::NotFound().json(json!({ "message": "User not found" })),
        Err(_) => HttpResponse::InternalServerError().body("Failed to delete user"),
    }
}
