pub mod home;
pub mod list;
pub mod create;
pub mod get;
pub mod update;
pub mod delete;
pub mod fallback;

pub use home::home_handler;
pub use list::list_handler;
pub use create::create_handler;
pub use get::get_handler;
pub use update::update_handler;
pub use delete::delete_handler;
pub use fallback::{method_not_allowed_handler, not_found_handler};
