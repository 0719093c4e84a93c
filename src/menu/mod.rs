//! Menu engine
//!
//! A [`MenuTree`] owns every [`Entry`] in a flat arena. Entries point to their
//! parent by [`EntryId`]; the tree tracks which sub-menu is active and turns
//! typed selectors into navigation or action calls.
//!
//! ```no_run
//! use menucli::{Entry, MenuSettings, MenuTree, Response};
//!
//! # fn main() -> menucli::MenuResult<()> {
//! let mut tree = MenuTree::new(MenuSettings::default().with_root_title("Main"));
//! let tools = tree.register(Entry::new("1", "Tools"))?;
//! tree.register(Entry::new("1", "Hello").parent(tools).action(|| {
//!     println!("hello");
//!     Response::ok()
//! }))?;
//! tree.run_batch(["1-1"])?;
//! # Ok(())
//! # }
//! ```

mod action;
mod dispatch;
mod entry;
mod render;
mod response;
pub mod selector;
mod settings;
mod tree;


pub use action::Action;
pub use entry::{Entry, EntryId};
pub use render::SUBMENU_MARKER;
pub use response::Response;
pub use settings::MenuSettings;
pub use tree::MenuTree;
