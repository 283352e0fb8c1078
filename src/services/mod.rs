pub mod account;
pub mod tasks;

pub use account::AccountService;
pub use tasks::TaskService;
