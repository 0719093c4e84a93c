//! Sample menu used by the `menucli` binary

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;

use crate::error::MenuResult;
use crate::menu::{Action, Entry, MenuTree, Response};

pub const CREDITS: &str = "Code by the marvelous Sm3P!";

pub const DEFAULT_TITLE: &str = "menucli";

/// Sink the demo actions print to.
pub type SharedOutput = Rc<RefCell<dyn Write>>;

/// Flips a shared flag; the same flag backs the entry's displayed value.
struct ToggleVisibility {
    visible: Rc<Cell<bool>>,
}

impl Action for ToggleVisibility {
    fn run(&mut self) -> Response {
        self.visible.set(!self.visible.get());
        Response::ok()
    }
}

fn say(out: &SharedOutput, text: &'static str) -> impl FnMut() -> Response {
    let out = Rc::clone(out);
    move || match writeln!(out.borrow_mut(), "{}", text) {
        Ok(()) => Response::ok(),
        Err(err) => Response::failure(err.to_string()),
    }
}

/// Register the demo tree:
///
/// - `1` prints a line
/// - `2` opens a sub-menu with `1` and `2`
/// - `3` toggles a flag and shows its value
pub fn register_demo<W: Write>(
    tree: &mut MenuTree<W>,
    out: &SharedOutput,
) -> MenuResult<()> {
    tree.register(Entry::new("1", "Prova").action(say(out, "Prova 1")))?;

    let sub = tree.register(Entry::new("2", "Prova"))?;
    tree.register_all(vec![
        Entry::new("1", "SubMenu 1")
            .parent(sub)
            .action(say(out, "SubMenu 1")),
        Entry::new("2", "SubMenu 2")
            .parent(sub)
            .action(say(out, "SubMenu 2")),
    ])?;

    let visible = Rc::new(Cell::new(true));
    let reader = Rc::clone(&visible);
    tree.register(
        Entry::new("3", "Set visibility")
            .value(move || reader.get())
            .action(ToggleVisibility { visible }),
    )?;

    Ok(())
}
