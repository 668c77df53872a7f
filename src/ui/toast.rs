// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of descriptors, appearing as small
//! cards with level-colored accents, optional action buttons, and a manual
//! close control when the descriptor allows it.

use crate::config::Position;
use crate::notifications::{Descriptor, Message, StyleMode, ToastStack};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::widget::container;
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view(descriptor: &Descriptor, style: StyleMode) -> Element<'_, Message> {
        let accent_color = descriptor.level().color();

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
        if let Some(title) = descriptor.title_text() {
            body = body.push(Text::new(title).size(typography::BODY_LG));
        }
        if let Some(message) = descriptor.message_text() {
            body = body.push(
                Text::new(message)
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(body);

        if let Some(action) = descriptor.action_control() {
            let mut action_button = button(Text::new(action.label()).size(typography::BODY))
                .on_press(Message::Activate(descriptor.uid().clone()))
                .padding(spacing::XXS);
            if style == StyleMode::Styled {
                action_button = action_button.style(control_button_style);
            }
            content = content.push(action_button);
        }

        if descriptor.is_dismissible() {
            let mut dismiss_button = button(Text::new("\u{00d7}").size(typography::BODY))
                .on_press(Message::Dismiss(descriptor.uid().clone()))
                .padding(spacing::XXS);
            if style == StyleMode::Styled {
                dismiss_button = dismiss_button.style(control_button_style);
            }
            content = content.push(dismiss_button);
        }

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM);

        match style {
            StyleMode::Styled => card
                .style(move |theme: &Theme| toast_container_style(theme, accent_color))
                .into(),
            StyleMode::Unstyled => card.into(),
        }
    }

    /// Renders the overlay with every visible toast, anchored to the
    /// configured corner.
    pub fn view_overlay(stack: &ToastStack, position: Position) -> Element<'_, Message> {
        let style = stack.style();
        let toasts: Vec<Element<'_, Message>> = stack
            .visible()
            .map(|descriptor| Self::view(descriptor, style))
            .collect();

        if toasts.is_empty() {
            // An empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (horizontal, vertical) = anchor(position);
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }
}

fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        Position::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Position::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Position::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Position::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
    }
}

/// Style function for the toast card container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the action and dismiss buttons.
fn control_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
