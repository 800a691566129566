mod json_backend;

pub use json_backend::JsonDatabase;
