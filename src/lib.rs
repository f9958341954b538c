pub mod app_state;
pub mod csv;
pub mod genai;
pub mod handlers;
pub mod model;
pub mod review;
pub mod spending;
pub mod store;
