mod exists;
mod profile;
mod service;

pub use service::UserQueryService;
