// SPDX-License-Identifier: MPL-2.0
//! View composition for the demo window.

use super::{form, Message, Screen, DEVICE_HEIGHT, DEVICE_WIDTH};
use crate::host::{HostId, ScreenHierarchy, ScreenStack};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, Column, Container, Row, Scrollable, Stack, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::time::Instant;

/// Contextual data needed to render the demo.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub screens: &'a ScreenStack,
    pub notifications: &'a Manager,
    pub form: &'a form::State,
    pub theme_mode: ThemeMode,
    pub log: Vec<String>,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(
            Scrollable::new(form::view(ctx.form).map(Message::Form)).height(Length::FillPortion(3)),
        )
        .push(action_buttons())
        .push(completion_log(ctx.log));

    Row::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(device(
            ctx.screen,
            ctx.screens,
            ctx.notifications,
            ctx.theme_mode,
            ctx.now,
        ))
        .push(controls)
        .into()
}

/// The simulated device: bars, screen content and banner overlays.
fn device<'a>(
    screen: Screen,
    screens: &'a ScreenStack,
    notifications: &'a Manager,
    theme_mode: ThemeMode,
    now: Instant,
) -> Element<'a, Message> {
    let base = Column::new()
        .push(status_bar())
        .push(nav_bar(screen))
        .push(
            Container::new(screen_content(screen))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .style(move |_theme: &Theme| solid(theme_mode.screen_background())),
        )
        .push(tab_bar(screen));

    let mut stack = Stack::new().push(base);
    // Screen banners first so status bar banners draw above them.
    let hosts: [Option<HostId>; 2] = [screens.top_most(), screens.root()];
    for host in hosts.into_iter().flatten() {
        stack = stack.push(Toast::view_overlay(notifications, screens, host, now).map(Message::Notification));
    }

    Container::new(stack)
        .width(Length::Fixed(DEVICE_WIDTH))
        .height(Length::Fixed(DEVICE_HEIGHT))
        .clip(true)
        .style(|_theme: &Theme| container::Style {
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

fn status_bar<'a>() -> Element<'a, Message> {
    Container::new(Text::new("9:41").size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            text_color: Some(palette::WHITE),
            ..solid(palette::STATUS_BAR)
        })
        .into()
}

fn nav_bar<'a>(screen: Screen) -> Element<'a, Message> {
    Container::new(Text::new(screen.title()).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAV_BAR_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            text_color: Some(palette::GRAY_900),
            ..solid(palette::NAV_BAR)
        })
        .into()
}

fn tab_bar<'a>(current: Screen) -> Element<'a, Message> {
    let tabs = Screen::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS).width(Length::Fill),
        |row, screen| {
            let style = if screen == current {
                button::primary
            } else {
                button::text
            };
            row.push(
                button(Text::new(screen.title()).align_x(alignment::Horizontal::Center))
                    .width(Length::Fill)
                    .style(style)
                    .on_press(Message::SwitchScreen(screen)),
            )
        },
    );

    Container::new(tabs)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TAB_BAR_HEIGHT))
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| solid(palette::NAV_BAR))
        .into()
}

fn screen_content<'a>(screen: Screen) -> Element<'a, Message> {
    let rows: &[&str] = match screen {
        Screen::Inbox => &[
            "Ada Lovelace: Notes on the engine",
            "Grace Hopper: Compiler meeting moved",
            "Alan Turing: Re: the imitation game",
            "Katherine Johnson: Trajectory numbers",
        ],
        Screen::Settings => &["Notifications", "Sounds & haptics", "Privacy", "About"],
    };

    rows.iter()
        .fold(Column::new().spacing(spacing::MD), |column, row| {
            column.push(Text::new(*row).size(typography::BODY))
        })
        .into()
}

fn action_buttons<'a>() -> Element<'a, Message> {
    let action = |label: &'a str, message: Message| {
        button(Text::new(label).size(typography::BODY))
            .padding(spacing::XS)
            .on_press(message)
    };

    Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(action("Show", Message::Show))
                .push(action("Show custom content", Message::ShowCustom)),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(action("Hide last", Message::HideLast))
                .push(action("Hide all", Message::HideAll)),
        )
        .into()
}

fn completion_log<'a>(entries: Vec<String>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Completions").size(typography::TITLE_SM))
        .push(
            button(Text::new("Clear").size(typography::CAPTION))
                .style(button::text)
                .on_press(Message::ClearLog),
        );

    let list = if entries.is_empty() {
        Column::new().push(Text::new("No banner dismissed yet").size(typography::CAPTION))
    } else {
        entries.into_iter().fold(Column::new(), |column, entry| {
            column.push(Text::new(entry).size(typography::CAPTION))
        })
    };

    Column::new()
        .spacing(spacing::XS)
        .height(Length::FillPortion(1))
        .push(header)
        .push(list.spacing(spacing::XXS))
        .into()
}

fn solid(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}
