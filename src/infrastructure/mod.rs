pub mod identity;
pub mod notify;
pub mod sqlite;
