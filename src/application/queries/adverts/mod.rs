mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetAdvertQuery;
pub use list::ListAdvertsQuery;
pub use service::AdvertQueryService;
