pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Advert, AdvertDetails, AdvertOption, AdvertOwner};
pub use repository::AdvertRepository;
pub use value_objects::{AdvertId, AdvertType};
