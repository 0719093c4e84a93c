//! Action capability invoked for leaf entries

use super::Response;

/// Behaviour run when a leaf entry is selected.
///
/// Closures implement this through the blanket impl; stateful types can
/// implement it directly.
pub trait Action {
    fn run(&mut self) -> Response;
}

impl<F> Action for F
where
    F: FnMut() -> Response,
{
    fn run(&mut self) -> Response {
        self()
    }
}
