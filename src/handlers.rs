mod budget_goal_handlers;
mod category_handlers;
mod contribution_handlers;
mod expense_handlers;
mod member_handlers;
mod suggestion_handlers;

pub use self::budget_goal_handlers::*;
pub use self::category_handlers::*;
pub use self::contribution_handlers::*;
pub use self::expense_handlers::*;
pub use self::member_handlers::*;
pub use self::suggestion_handlers::*;
