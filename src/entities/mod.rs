pub mod project;
pub mod task;
pub mod user;
pub mod user_role;

pub use project::Entity as Project;
pub use task::Entity as Task;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;

pub use task::{TaskPriority, TaskStatus};
