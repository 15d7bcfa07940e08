pub mod project;
pub mod task;
pub mod user;

pub use project::{Project, ProjectInput, ProjectResponse};
pub use task::{Task, TaskInput, TaskResponse};
pub use user::{NewUser, User, UserInput, UserResponse};
