mod create;
mod delete;
mod list;

pub use create::create_schedule;
pub use delete::delete_schedule;
pub use list::list_schedules;
