mod create;
mod delete;
mod service;

pub use create::{ContactInput, CreateAdvertCommand};
pub use delete::DeleteAdvertCommand;
pub use service::AdvertCommandService;
