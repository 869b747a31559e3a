pub mod identity;
pub mod notifier;
pub mod record_store;
