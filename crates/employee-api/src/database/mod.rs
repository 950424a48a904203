pub mod models;
pub mod pool;
pub mod store;

pub use models::{Employee, NewEmployee};
pub use store::{EmployeeStore, PgEmployeeStore, StoreError};
