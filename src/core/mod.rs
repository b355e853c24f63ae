pub mod add;
pub mod events;
pub mod list;
pub mod params;
pub mod tail;
