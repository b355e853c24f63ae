pub mod param_key;
pub mod record;
pub mod user;
