use actix_web::web::ReqData;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::PgConnection;
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::models::favorite_models::{Favorite, FavoriteResponse, NewFavorite};
use crate::models::token_models::Claims;
use crate::models::user_models::User;
use crate::schema::favorites::dsl as fav_dsl;
use crate::schema::users::dsl as user_dsl;

enum FavoriteError {
    UserNotFound,
    FavoriteNotFound,
    TargetNotFound,
    Duplicate,
    Db,
}

impl From<DieselError> for FavoriteError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                FavoriteError::Duplicate
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                FavoriteError::TargetNotFound
            }
            _ => FavoriteError::Db,
        }
    }
}

fn user_exists(conn: &mut PgConnection, acting_user_id: i32) -> Result<bool, DieselError> {
    let found = user_dsl::users
        .find(acting_user_id)
        .select(User::as_select())
        .first::<User>(conn)
        .optional()?;
    Ok(found.is_some())
}

pub async fn list_favorites(pool: web::Data<DbPool>, claims: ReqData<Claims>) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    match user_exists(&mut conn, claims.sub) {
        Ok(true) => {}
        Ok(false) => return HttpResponse::NotFound().json(json!({ "message": "User not found" })),
        Err(_) => return HttpResponse::InternalServerError().finish(),
    }

    let rows = fav_dsl::favorites
        .filter(fav_dsl::user_id.eq(claims.sub))
        .load::<Favorite>(&mut conn);

    match rows {
        Ok(rows) => {
            let list: Result<Vec<FavoriteResponse>, _> =
                rows.into_iter().map(FavoriteResponse::try_from).collect();
            match list {
                Ok(list) => HttpResponse::Ok().json(list),
                Err(msg) => {
                    log::error!("{msg}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

/// Runs the user check and the insert inside one transaction, so a
/// failure partway leaves no partial row behind.
fn insert_favorite(conn: &mut PgConnection, new_fav: NewFavorite) -> Result<(), FavoriteError> {
    conn.transaction::<_, FavoriteError, _>(|conn| {
        if !user_exists(conn, new_fav.user_id)? {
            return Err(FavoriteError::UserNotFound);
        }
        diesel::insert_into(fav_dsl::favorites)
            .values(&new_fav)
            .execute(conn)?;
        Ok(())
    })
}

pub async fn add_favorite_planet(
    pool: web::Data<DbPool>,
    planet_id_param: web::Path<i32>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let new_fav = NewFavorite::planet(claims.sub, planet_id_param.into_inner());

    match insert_favorite(&mut conn, new_fav) {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Favorite planet added" })),
        Err(FavoriteError::UserNotFound) => {
            HttpResponse::NotFound().json(json!({ "message": "User not found" }))
        }
        Err(FavoriteError::TargetNotFound) => {
            HttpResponse::NotFound().json(json!({ "message": "Planeta not found" }))
        }
        Err(FavoriteError::Duplicate) => {
            HttpResponse::Conflict().json(json!({ "message": "Planet is already in favorites" }))
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn add_favorite_person(
    pool: web::Data<DbPool>,
    people_id_param: web::Path<i32>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let new_fav = NewFavorite::character(claims.sub, people_id_param.into_inner());

    match insert_favorite(&mut conn, new_fav) {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Favorite person added" })),
        Err(FavoriteError::UserNotFound) => {
            HttpResponse::NotFound().json(json!({ "message": "User not found" }))
        }
        Err(FavoriteError::TargetNotFound) => {
            HttpResponse::NotFound().json(json!({ "message": "Personaje not found" }))
        }
        Err(FavoriteError::Duplicate) => {
            HttpResponse::Conflict().json(json!({ "message": "Person is already in favorites" }))
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn remove_favorite_planet(
    pool: web::Data<DbPool>,
    planet_id_param: web::Path<i32>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let target_planet_id = planet_id_param.into_inner();
    let acting_user_id = claims.sub;

    let result = conn.transaction::<_, FavoriteError, _>(|conn| {
        if !user_exists(conn, acting_user_id)? {
            return Err(FavoriteError::UserNotFound);
        }
        let deleted = diesel::delete(
            fav_dsl::favorites
                .filter(fav_dsl::user_id.eq(acting_user_id))
                .filter(fav_dsl::planet_id.eq(target_planet_id)),
        )
        .execute(conn)?;
        if deleted == 0 {
            return Err(FavoriteError::FavoriteNotFound);
        }
        Ok(())
    });

    match result {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Favorite planet deleted" })),
        Err(FavoriteError::UserNotFound) => {
            HttpResponse::NotFound().json(json!({ "message": "User not found" }))
        }
        Err(FavoriteError::FavoriteNotFound) => {
            HttpResponse::NotFound().json(json!({ "message": "Favorite planet not found" }))
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn remove_favorite_person(
    pool: web::Data<DbPool>,
    people_id_param: web::Path<i32>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let target_people_id = people_id_param.into_inner();
    let acting_user_id = claims.sub;

    let result = conn.transaction::<_, FavoriteError, _>(|conn| {
        if !user_exists(conn, acting_user_id)? {
            return Err(FavoriteError::UserNotFound);
        }
        let deleted = diesel::delete(
            fav_dsl::favorites
                .filter(fav_dsl::user_id.eq(acting_user_id))
                .filter(fav_dsl::character_id.eq(target_people_id)),
        )
        .execute(conn)?;
        if deleted == 0 {
            return Err(FavoriteError::FavoriteNotFound);
        }
        Ok(())
    });

    match result {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Favorite person deleted" })),
        Err(FavoriteError::UserNotFound) => {
            HttpResponse::NotFound().json(json!({ "message": "User not found" }))
        }
        Err(FavoriteError::FavoriteNotFound) => {
            HttpResponse::NotFound().json(json!({ "message": "Favorite person not found" }))
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
