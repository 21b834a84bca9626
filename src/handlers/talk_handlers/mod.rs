mod create;
mod delete;
mod detail;
mod helpers;
mod list;
mod update;

pub use create::{create, new_form};
pub use delete::{confirm_delete, delete};
pub use detail::detail;
pub use list::list;
pub use update::{edit_form, update};
