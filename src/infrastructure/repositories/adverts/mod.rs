mod memory;
mod postgres;
mod rows;

pub use memory::InMemoryAdvertRepository;
pub use postgres::PostgresAdvertRepository;
