pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod course {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod recommendation {
    pub mod dto;
    pub mod routes;
}
pub mod completion {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
