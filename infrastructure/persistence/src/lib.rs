pub mod db;
pub mod error_classifier {
    pub mod generic;
    pub mod mysql;
}
pub mod id_generator;
pub mod naming;
pub mod user {
    pub mod entity;
    pub mod repository;
}
