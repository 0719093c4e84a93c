//! Menu rendering

use std::io::Write;

use super::{MenuTree, Response};
use crate::error::MenuResult;
use crate::ui::primitives::text::ColoredText;

/// Marker appended to entries that open a sub-menu
pub const SUBMENU_MARKER: &str = " >>";

impl<W: Write> MenuTree<W> {
    /// `<root> >> <ancestor> >> ... >> <leaf>`
    pub fn breadcrumb_line(&self) -> String {
        let mut line = self.settings.root_title.clone();
        for title in self.breadcrumb() {
            line.push_str(" >> ");
            line.push_str(title);
        }
        line
    }

    /// One line per visible entry, sub-menus flagged with `>>`
    pub fn menu_lines(&self) -> Vec<String> {
        self.visible_entries()
            .into_iter()
            .map(|id| {
                let mut line = self.entries[id.0].label();
                if self.has_children(id) {
                    line.push_str(SUBMENU_MARKER);
                }
                line
            })
            .collect()
    }

    /// Write the breadcrumb and the visible entries to the output.
    pub fn print_menu(&mut self) -> MenuResult<Response> {
        let crumb = ColoredText::info(self.breadcrumb_line())
            .bold()
            .render(self.settings.use_colors);
        let lines = self.menu_lines();

        writeln!(self.out, "{}", crumb)?;
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(Response::ok())
    }
}
