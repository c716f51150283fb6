pub mod distance;
pub mod geocode;
pub mod listing;
pub mod map;
pub mod query;
pub mod record;
pub mod resolve;
pub mod title;
pub mod utils;

pub use record::FilmRecord;
