pub mod error;
pub mod health {
    pub mod routes;
}
pub mod tags;
pub mod user {
    pub mod dto;
    pub mod routes;
}
