pub mod request;
pub mod story;
