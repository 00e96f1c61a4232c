pub mod api;
pub mod errors;
pub mod models;
pub mod names;
pub mod storage;
pub mod store;

pub use api::{Api, QuestionFilter, RoomFilter};
pub use errors::ApiError;
pub use storage::{CredentialStore, FsCredentials};
pub use store::{Route, Store};
