pub mod collection;
pub mod data;
pub mod state;
pub mod store;
pub mod store_local;
pub mod store_mongo;
