//! Input resolution, execution and the two drivers

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use super::entry::Builtin;
use super::tree::SHOW_MENU;
use super::{MenuTree, Response};
use crate::error::MenuResult;
use crate::ui::primitives::text::ColoredText;

impl<W: Write> MenuTree<W> {
    /// Resolve `input` at the current position and act on it.
    ///
    /// Sub-menus are entered (and rendered when `show_menu` is set), leaves
    /// run their action. Unknown input prints the not-found message and
    /// keeps the session alive. `Err` only reports a failing output writer.
    pub fn interpret(&mut self, input: &str, show_menu: bool) -> MenuResult<Response> {
        let mut input = input.trim().to_string();

        if input.is_empty() {
            self.blank_inputs += 1;
            let threshold = self.settings.blank_lines_before_menu;
            if threshold == 0 || self.blank_inputs < threshold {
                trace!(count = self.blank_inputs, "blank input");
                return Ok(Response::ok());
            }
            self.blank_inputs = 0;
            input = self.entries[SHOW_MENU.0].selector.clone();
        } else {
            self.blank_inputs = 0;
        }

        let Some(id) = self.resolve(&input) else {
            debug!(input = %input, "command not found");
            writeln!(self.out, "{}", self.settings.not_found_message)?;
            return Ok(Response::ok());
        };

        if self.has_children(id) {
            self.enter(id);
            if show_menu {
                return self.print_menu();
            }
            return Ok(Response::ok());
        }

        let response = match self.entries[id.0].builtin_kind() {
            Some(builtin) => self.run_builtin(builtin)?,
            None => {
                debug!(selector = %self.entries[id.0].selector, "running action");
                self.entries[id.0].run_action()
            }
        };

        if !response.ok {
            debug!(selector = %self.entries[id.0].selector, message = %response.message, "action failed");
            let message = ColoredText::error(response.message.as_str()).render(self.settings.use_colors);
            writeln!(self.out, "{}", message)?;
        }
        Ok(response)
    }

    fn run_builtin(&mut self, builtin: Builtin) -> MenuResult<Response> {
        match builtin {
            Builtin::GoBack => {
                self.go_back();
                self.print_menu()
            }
            Builtin::ShowMenu => self.print_menu(),
            Builtin::Quit => {
                let farewell =
                    ColoredText::dim(self.settings.farewell.as_str()).render(self.settings.use_colors);
                writeln!(self.out, "{}", farewell)?;
                self.out.flush()?;
                Ok(Response::quit())
            }
        }
    }

    /// Run pre-supplied commands without prompting.
    ///
    /// A command may walk into sub-menus with the separator (`2-1`). Every
    /// command starts from the root and a failing or unknown command never
    /// stops the ones after it.
    pub fn run_batch<I, S>(&mut self, commands: I) -> MenuResult<Vec<Response>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let separator = self.settings.submenu_separator;
        let mut responses = Vec::new();

        for command in commands {
            let command = command.as_ref();
            let segments: Vec<&str> = command
                .split(separator)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            let Some((last, path)) = segments.split_last() else {
                continue;
            };

            debug!(command, "batch command");
            for segment in path {
                self.interpret(segment, false)?;
            }
            responses.push(self.interpret(last, false)?);
            self.reset_position();
        }

        Ok(responses)
    }

    /// Split `line` on whitespace and run the tokens as a batch
    pub fn run_line(&mut self, line: &str) -> MenuResult<Vec<Response>> {
        self.run_batch(line.split_whitespace())
    }

    /// Prompt-read-interpret loop until a response ends the session or the
    /// input is exhausted.
    pub fn run_interactive<R: BufRead>(&mut self, mut input: R) -> MenuResult<()> {
        self.print_menu()?;

        let mut buf = Vec::new();
        loop {
            write!(self.out, "{}", self.settings.prompt)?;
            self.out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("input closed, leaving interactive mode");
                writeln!(self.out)?;
                return Ok(());
            }

            // undecodable bytes become U+FFFD and resolve as unknown input
            let line = String::from_utf8_lossy(&buf);
            let response = self.interpret(&line, true)?;
            if !response.continue_session {
                return Ok(());
            }
        }
    }
}
