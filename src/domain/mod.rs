pub mod list;
pub mod sorting;
pub mod store;
pub mod todo;
pub mod validation;

pub use list::{List, ListId};
pub use sorting::{display_order, ordered_for_display, Completable};
pub use store::{is_list_complete, Store};
pub use todo::{Todo, TodoId};
pub use validation::{normalize_name, MAX_NAME_CHARS, MIN_NAME_CHARS};
