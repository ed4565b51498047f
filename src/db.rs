use actix_web::{HttpResponse, ResponseError};
use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel::PgConnection;
use std::fmt;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Wraps the pool error so the cause ends up in the log while the
/// client only sees a generic 500.
#[derive(Debug)]
pub struct DbError(r2d2::PoolError);

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Database connection error: {}", self.0)
    }
}

impl ResponseError for DbError {
    fn error_response(&self) -> HttpResponse {
        log::error!("{self}");
        HttpResponse::InternalServerError().body("Database connection error")
    }
}

/// Helper function to get a pooled DB connection
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection<ConnectionManager<PgConnection>>, DbError> {
    pool.get().map_err(DbError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pool_failure_keeps_the_cause_and_maps_to_500() {
        let manager =
            ConnectionManager::<PgConnection>::new("postgres://starbase@127.0.0.1:1/starbase");
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .connection_timeout(Duration::from_millis(100))
            .build_unchecked(manager);

        let err = get_conn(&pool).err().expect("closed port must not connect");
        assert!(err.to_string().starts_with("Database connection error: "));
        assert_eq!(err.error_response().status(), 500);
    }
}
