//! Search bar widget: input row plus the suggestion dropdown

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding, Shadow};

use super::theme::DarkTheme;
use crate::backend::types::Suggestion;

/// Height of the input row; the dropdown is placed right under it
pub const HEIGHT: f32 = 68.0;

pub fn input_id() -> text_input::Id {
    text_input::Id::new("medsearch-query")
}

/// Input with a search button. Enter sends `on_enter`, the button `on_search`.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_enter: Message,
    on_search: Message,
) -> Element<'a, Message> {
    let input = text_input("Search doctors, hospitals...", value)
        .id(input_id())
        .on_input(on_input)
        .on_submit(on_enter)
        .padding(Padding::new(12.0))
        .size(18)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });

    let search = button(text("Search").size(16))
        .on_press(on_search)
        .padding(Padding::from([10.0, 18.0]))
        .style(|_theme, status| button::Style {
            background: Some(Background::Color(match status {
                button::Status::Hovered | button::Status::Pressed => DarkTheme::PRIMARY_HOVER,
                _ => DarkTheme::PRIMARY,
            })),
            text_color: DarkTheme::TEXT,
            border: Border::default().rounded(10),
            shadow: Shadow::default(),
        });

    container(
        row![text("⌕").size(22).color(DarkTheme::TEXT_MUTED), input, search]
            .spacing(8)
            .align_y(iced::Alignment::Center),
    )
    .padding(Padding::from([6.0, 12.0]))
    .width(Length::Fill)
    .height(HEIGHT)
    .style(|_theme| container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    })
    .into()
}

/// Dropdown of suggestions; `selected` gets the keyboard highlight.
pub fn suggestions<'a, Message: Clone + 'a>(
    list: &'a [Suggestion],
    selected: Option<usize>,
    on_select: impl Fn(usize) -> Message + 'a,
) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = list
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let is_selected = selected == Some(i);

            button(text(suggestion.as_str()).size(15))
                .on_press(on_select(i))
                .width(Length::Fill)
                .padding(Padding::from([10.0, 12.0]))
                .style(move |_theme, status| {
                    let highlight = is_selected || matches!(status, button::Status::Hovered);
                    button::Style {
                        background: Some(Background::Color(if highlight {
                            DarkTheme::SELECTION
                        } else {
                            Color::TRANSPARENT
                        })),
                        text_color: DarkTheme::TEXT,
                        border: Border::default().rounded(8),
                        shadow: Shadow::default(),
                    }
                })
                .into()
        })
        .collect();

    container(column(items).spacing(2))
        .padding(4)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE_HIGHLIGHT)),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        })
        .into()
}
