// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! New-track title input logic and state management.
//!
//! This module implements the composer bar, a managed text input used to
//! submit new track titles. Submission hands the buffer over verbatim—no
//! trimming, no validation, an empty title is a valid title—and the buffer
//! is kept until the create round-trip completes, so a failed create leaves
//! the typed title in place for another attempt.

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ComposerAction {
    /// The current buffer, submitted as a new track title.
    Submit(String),
}

pub(crate) struct Composer {
    active: bool,
    pub(crate) input: Input,
}

impl Composer {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn focus(&mut self) {
        self.active = true;
    }

    /// Clears the buffer. Called only once the created track is on screen.
    pub(crate) fn reset(&mut self) {
        self.input.reset();
    }

    /// Handles a key event while the composer is focused.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<ComposerAction> {
        if !self.active {
            return None;
        }

        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Esc => {
                    self.active = false;
                    None
                }

                KeyCode::Enter => Some(ComposerAction::Submit(self.input.value().to_owned())),

                _ => {
                    // Delegate all other key events to the managed input
                    self.input.handle_event(event);
                    None
                }
            },

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_title(composer: &mut Composer, title: &str) {
        for c in title.chars() {
            composer.process_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_builds_the_title() {
        let mut composer = Composer::new();
        composer.focus();

        type_title(&mut composer, "Song A");

        assert_eq!(composer.input.value(), "Song A");
    }

    #[test]
    fn enter_submits_the_buffer_verbatim() {
        let mut composer = Composer::new();
        composer.focus();
        type_title(&mut composer, "  Song A ");

        let action = composer.process_event(&key(KeyCode::Enter));

        assert_eq!(action, Some(ComposerAction::Submit("  Song A ".to_owned())));
        // The buffer survives until the create round-trip completes
        assert_eq!(composer.input.value(), "  Song A ");
    }

    #[test]
    fn empty_titles_submit_unchanged() {
        let mut composer = Composer::new();
        composer.focus();

        let action = composer.process_event(&key(KeyCode::Enter));

        assert_eq!(action, Some(ComposerAction::Submit(String::new())));
    }

    #[test]
    fn escape_blurs_without_clearing() {
        let mut composer = Composer::new();
        composer.focus();
        type_title(&mut composer, "Song A");

        composer.process_event(&key(KeyCode::Esc));

        assert!(!composer.active());
        assert_eq!(composer.input.value(), "Song A");
    }

    #[test]
    fn reset_clears_the_buffer() {
        let mut composer = Composer::new();
        composer.focus();
        type_title(&mut composer, "Song A");

        composer.reset();

        assert_eq!(composer.input.value(), "");
    }
}
