use actix_web::web::ReqData;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use diesel::prelude::*;
use serde_json::json;

use crate::db::{get_conn, DbPool};
use crate::models::planet_models::{NewPlanet, Planet, UpdatePlanet};
use crate::models::token_models::Claims;
use crate::schema::favorites::dsl as fav_dsl;
use crate::schema::planets::dsl::*;
use crate::utils::auth_utils::require_admin;

pub async fn list_planets(pool: web::Data<DbPool>) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    match planets.select(Planet::as_select()).load::<Planet>(&mut conn) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn get_planet(
    pool: web::Data<DbPool>,
    planet_id_param: web::Path<i32>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let target_id = planet_id_param.into_inner();

    match planets
        .find(target_id)
        .select(Planet::as_select())
        .first::<Planet>(&mut conn)
        .optional()
    {
        Ok(Some(planet)) => HttpResponse::Ok().json(planet),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Planeta not found" })),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn create_planet(
    pool: web::Data<DbPool>,
    payload: web::Json<NewPlanet>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    if let Err(resp) = require_admin(&mut conn, claims.sub) {
        return resp;
    }

    match diesel::insert_into(planets)
        .values(&payload.into_inner())
        .get_result::<Planet>(&mut conn)
    {
        Ok(created) => HttpResponse::Created().json(created),
        Err(_) => HttpResponse::InternalServerError().body("Failed to create planet"),
    }
}

pub async fn update_planet(
    pool: web::Data<DbPool>,
    planet_id_param: web::Path<i32>,
    payload: web::Json<UpdatePlanet>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    if let Err(resp) = require_admin(&mut conn, claims.sub) {
        return resp;
    }

    let target_id = planet_id_param.into_inner();

    let updated = diesel::update(planets.find(target_id))
        .set(&payload.into_inner())
        .execute(&mut conn);

    match updated {
        Ok(affected) if affected > 0 => {
            match planets
                .find(target_id)
                .select(Planet::as_select())
                .first::<Planet>(&mut conn)
            {
                Ok(planet) => HttpResponse::Ok().json(planet),
                Err(_) => HttpResponse::Ok().finish(),
            }
        }
        Ok(_) => HttpResponse::NotFound().json(json!({ "message": "Planeta not found" })),
        Err(_) => HttpResponse::InternalServerError().body("Failed to update planet"),
    }
}

pub async fn delete_planet(
    pool: web::Data<DbPool>,
    planet_id_param: web::Path<i32>,
    claims: ReqData<Claims>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    if let Err(resp) = require_admin(&mut conn, claims.sub) {
        return resp;
    }

    let target_id = planet_id_param.into_inner();

    let deleted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
        diesel::delete(fav_dsl::favorites.filter(fav_dsl::planet_id.eq(target_id)))
            .execute(conn)?;
        diesel::delete(planets.find(target_id)).execute(conn)
    });

    match deleted {
        Ok(count) if count > 0 => HttpResponse::Ok().json(json!({ "message": "Planeta deleted" })),
        Ok(_) => HttpResponse::NotFound().json(json!({ "message": "Planeta not found" })),
        Err(_) => HttpResponse::InternalServerError().body("Failed to delete planet"),
    }
}
