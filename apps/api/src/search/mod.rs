pub mod cursor;
pub mod filters;
pub mod handlers;
pub mod keywords;
pub mod service;
pub mod session;
