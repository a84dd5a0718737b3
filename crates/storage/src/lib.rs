#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, STUDENT_ID_KEY, SessionRepository, Storage, StorageError, StudentIdStore,
};
