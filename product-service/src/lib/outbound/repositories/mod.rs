pub mod product;

pub use product::SqliteProductRepository;
