pub mod db;
pub mod error_mapper;
pub mod product {
    pub mod entity;
    pub mod repository;
}
