#[macro_use]
extern crate log;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use errors::Error;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type Connection = PooledConnection<ConnectionManager<PgConnection>>;

#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{AnswerRepository, PgRepository, QuestionRepository};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn get_conn(pool: &PgPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err.into()
    })
}

pub fn new_pool(database_url: &str, max_size: u32) -> Result<PgPool, Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder().max_size(max_size).build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        err.into()
    })
}

pub fn run_migrations(conn: &mut PgConnection) -> Result<(), Error> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| Error::InternalServerError(format!("Migration failed - {}", err)))?;

    for version in applied {
        info!("Applied migration {}", version);
    }

    Ok(())
}
