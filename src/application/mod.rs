pub mod alerts;
pub mod analysis;
pub mod crops;
pub mod dashboard;
pub mod mandis;
pub mod news;
