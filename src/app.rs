//! Application state and Iced wiring
//!
//! Keystrokes go through [`SearchState`]; timers and lookups run as
//! abortable tasks so a newer keystroke cancels older work.

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, stack, text, text_input, Space};
use iced::{event, window};
use iced::{Background, Border, Element, Event, Length, Subscription, Task, Theme};

use crate::backend::api::BackendClient;
use crate::backend::types::Suggestion;
use crate::config::Config;
use crate::error::LookupError;
use crate::search::{navigation, Debouncer, Lookup, SearchState, TaskSlot};
use crate::ui::search_bar;
use crate::ui::theme::DarkTheme;

pub struct MedSearch {
    search: SearchState,
    debouncer: Debouncer,
    lookup: TaskSlot,
    backend: BackendClient,
    search_url: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Enter in the input
    Activate,
    /// Search button
    Submit,
    SuggestionSelected(usize),
    DebounceElapsed(u64),
    LookupFinished(u64, Result<Vec<Suggestion>, LookupError>),
    SelectNext,
    SelectPrevious,
    Escape,
}

impl MedSearch {
    pub fn new(config: &Config) -> (Self, Task<Message>) {
        let app = Self {
            search: SearchState::new(),
            debouncer: Debouncer::new(config.debounce()),
            lookup: TaskSlot::new(),
            backend: BackendClient::new(&config.suggestions_url, config.request_timeout()),
            search_url: config.search_url.clone(),
        };
        (app, text_input::focus(search_bar::input_id()))
    }

    pub fn title(&self) -> String {
        String::from("medsearch")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                let ticket = self.search.set_query(query);
                self.debouncer.schedule(ticket, Message::DebounceElapsed)
            }

            Message::DebounceElapsed(ticket) => match self.search.debounce_elapsed(ticket) {
                Lookup::Superseded => Task::none(),
                Lookup::Cleared => {
                    self.debouncer.elapsed();
                    self.lookup.abort();
                    Task::none()
                }
                Lookup::Fetch { seq, term } => {
                    self.debouncer.elapsed();
                    self.fetch(seq, term)
                }
            },

            Message::LookupFinished(seq, result) => {
                if self.search.lookup_finished(seq, result) {
                    self.lookup.release();
                }
                Task::none()
            }

            Message::Activate => {
                navigation::follow(self.search.activate(&self.search_url));
                Task::none()
            }

            Message::Submit => {
                navigation::follow(self.search.submit(&self.search_url));
                Task::none()
            }

            Message::SuggestionSelected(index) => {
                navigation::follow(self.search.select(index, &self.search_url));
                Task::none()
            }

            Message::SelectNext => {
                self.search.select_next();
                Task::none()
            }

            Message::SelectPrevious => {
                self.search.select_previous();
                Task::none()
            }

            Message::Escape => {
                self.reset();
                // a focused input drops its focus on Escape; take it back
                text_input::focus(search_bar::input_id())
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let bar = search_bar::view(
            self.search.query(),
            Message::QueryChanged,
            Message::Activate,
            Message::Submit,
        );

        let hint = container(
            text("Type at least two letters for suggestions, Enter to search")
                .size(14)
                .color(DarkTheme::TEXT_MUTED),
        )
        .width(Length::Fill)
        .center_x(Length::Fill);

        let base = column![bar, Space::with_height(16), hint];

        // dropdown is a separate layer so it covers the content below the input
        let content: Element<'_, Message> = if self.search.suggestions().is_empty() {
            base.into()
        } else {
            let dropdown = search_bar::suggestions(
                self.search.suggestions(),
                self.search.selected(),
                Message::SuggestionSelected,
            );
            stack![
                base,
                column![Space::with_height(search_bar::HEIGHT + 4.0), dropdown]
            ]
            .into()
        };

        container(container(content).padding(16).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKGROUND)),
                border: Border {
                    color: DarkTheme::BORDER,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(key_message)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn fetch(&mut self, seq: u64, term: String) -> Task<Message> {
        tracing::debug!("Lookup #{} for {:?}", seq, term);
        let backend = self.backend.clone();
        self.lookup.replace(Task::perform(
            async move { backend.suggestions(&term).await },
            move |result| Message::LookupFinished(seq, result),
        ))
    }

    /// Clear everything and cancel pending work.
    fn reset(&mut self) {
        self.debouncer.cancel();
        self.lookup.abort();
        self.search.reset();
    }
}

/// Navigation keys, taken even when the focused input already handled them.
fn key_message(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };

    match key {
        Key::Named(Named::ArrowDown) => Some(Message::SelectNext),
        Key::Named(Named::ArrowUp) => Some(Message::SelectPrevious),
        Key::Named(Named::Escape) => Some(Message::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> MedSearch {
        let config = Config {
            suggestions_url: "http://127.0.0.1:9/api/suggestions".to_string(),
            search_url: "http://clinic.test/search".to_string(),
            ..Config::default()
        };
        MedSearch::new(&config).0
    }

    #[test]
    fn test_typing_schedules_timer() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("ja".into()));
        assert!(app.debouncer.is_pending());
        assert!(!app.lookup.is_occupied());
    }

    #[test]
    fn test_elapsed_starts_lookup() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("ja".into()));
        let _ = app.update(Message::DebounceElapsed(1));
        assert!(!app.debouncer.is_pending());
        assert!(app.lookup.is_occupied());
    }

    #[test]
    fn test_stale_timer_keeps_current_pending() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("ja".into()));
        let _ = app.update(Message::QueryChanged("jan".into()));
        let _ = app.update(Message::DebounceElapsed(1));
        assert!(app.debouncer.is_pending());
        assert!(!app.lookup.is_occupied());
    }

    #[test]
    fn test_short_query_skips_lookup() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("j".into()));
        let _ = app.update(Message::DebounceElapsed(1));
        assert!(!app.lookup.is_occupied());
        assert!(app.search.suggestions().is_empty());
    }

    #[test]
    fn test_results_render_then_escape_clears() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("ja".into()));
        let _ = app.update(Message::DebounceElapsed(1));
        let list = vec![Suggestion::from("Jane - Cardio"), Suggestion::from("James - Neuro")];
        let _ = app.update(Message::LookupFinished(1, Ok(list)));
        assert_eq!(app.search.suggestions().len(), 2);
        assert!(!app.lookup.is_occupied());

        let _ = app.update(Message::SelectNext);
        assert_eq!(app.search.selected(), Some(0));

        let _ = app.update(Message::Escape);
        assert_eq!(app.search.query(), "");
        assert!(app.search.suggestions().is_empty());
        assert!(!app.debouncer.is_pending());
    }

    #[test]
    fn test_failed_lookup_leaves_empty_list() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("ja".into()));
        let _ = app.update(Message::DebounceElapsed(1));
        let _ = app.update(Message::LookupFinished(
            1,
            Err(LookupError::Transport("connection refused".into())),
        ));
        assert!(app.search.suggestions().is_empty());
    }

    fn key_press(named: Named, code: keyboard::key::Code) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
        })
    }

    #[test]
    fn test_escape_taken_from_focused_input() {
        let escape = key_press(Named::Escape, keyboard::key::Code::Escape);
        let message = key_message(escape, event::Status::Captured, window::Id::unique());
        assert!(matches!(message, Some(Message::Escape)));

        let mut app = app();
        let _ = app.update(Message::QueryChanged("ja".into()));
        let _ = app.update(message.unwrap());
        assert_eq!(app.search.query(), "");
        assert!(!app.debouncer.is_pending());
    }

    #[test]
    fn test_arrow_keys_map_to_selection() {
        let down = key_press(Named::ArrowDown, keyboard::key::Code::ArrowDown);
        let up = key_press(Named::ArrowUp, keyboard::key::Code::ArrowUp);
        let id = window::Id::unique();
        assert!(matches!(key_message(down, event::Status::Ignored, id), Some(Message::SelectNext)));
        assert!(matches!(key_message(up, event::Status::Ignored, id), Some(Message::SelectPrevious)));

        let enter = key_press(Named::Enter, keyboard::key::Code::Enter);
        assert!(key_message(enter, event::Status::Captured, id).is_none());
    }

    #[test]
    fn test_blank_submit_does_nothing() {
        let mut app = app();
        let _ = app.update(Message::QueryChanged("   ".into()));
        let _ = app.update(Message::Submit);
        assert_eq!(app.search.query(), "   ");
    }
}
