use actix_web::web::ReqData;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use diesel::prelude::*;
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::models::character_models::{Character, NewCharacter, UpdateCharacter};
use crate::models::token_models::Claims;
use crate::schema::characters::dsl::*;
use crate::schema::favorites::dsl as fav_dsl;
use crate::utils::auth_utils::require_admin;

pub async fn list_people(pool: web::Data<DbPool>) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    match characters
        .select(Character::as_select())
        .load::<Character>(&mut conn)
    {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn get_person(
    pool: web::Data<DbPool>,
    people_id_param: web::Path<i32>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let people_id = people_id_param.into_inner();

    match characters
        .find(people_id)
        .select(Character::as_select())
        .first::<Character>(&mut conn)
        .optional()
    {
        Ok(Some(person)) => HttpResponse::Ok().json(person),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Personaje not found" })),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn create_person(
    pool: web::Data<DbPool>,
    payload: web::Json<NewCharacter>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    if let Err(resp) = require_admin(&mut conn, claims.sub) {
        return resp;
    }

    match diesel::insert_into(characters)
        .values(&payload.into_inner())
        .get_result::<Character>(&mut conn)
    {
        Ok(created) => HttpResponse::Created().json(created),
        Err(_) => HttpResponse::InternalServerError().body("Failed to create character"),
    }
}

pub async fn update_person(
    pool: web::Data<DbPool>,
    people_id_param: web::Path<i32>,
    payload: web::Json<UpdateCharacter>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    if let Err(resp) = require_admin(&mut conn, claims.sub) {
        return resp;
    }

    let people_id = people_id_param.into_inner();

    let updated = diesel::update(characters.find(people_id))
        .set(&payload.into_inner())
        .execute(&mut conn);

    match updated {
        Ok(affected) if affected > 0 => {
            match characters
                .find(people_id)
                .select(Character::as_select())
                .first::<Character>(&mut conn)
            {
                Ok(person) => HttpResponse::Ok().json(person),
                Err(_) => HttpResponse::Ok().finish(),
            }
        }
        Ok(_) => HttpResponse::NotFound().json(json!({ "message": "Personaje not found" })),
        Err(_) => HttpResponse::InternalServerError().body("Failed to update character"),
    }
}

pub async fn delete_person(
    pool: web::Data<DbPool>,
    people_id_param: web::Path<i32>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    if let Err(resp) = require_admin(&mut conn, claims.sub) {
        return resp;
    }

    let people_id = people_id_param.into_inner();

    // Favorites referencing the row go first so the FK never dangles.
    let deleted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
        diesel::delete(fav_dsl::favorites.filter(fav_dsl::character_id.eq(people_id)))
            .execute(conn)?;
        diesel::delete(characters.find(people_id)).execute(conn)
    });

    match deleted {
        Ok(count) if count > 0 => {
            HttpResponse::Ok().json(json!({ "message": "Personaje deleted" }))
        }
        Ok(_) => HttpResponse::NotFound().json(json!({ "message": "Personaje not found" })),
        Err(_) => HttpResponse::InternalServerError().body("Failed to delete character"),
    }
}
