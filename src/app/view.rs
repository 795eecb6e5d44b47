use super::messages::Message;
use super::state::{App, HEADER_HEIGHT, PAGE_SCROLL_ID, track_scroll_id};
use crate::content::Card;
use iced::alignment::Vertical;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, row, scrollable, text,
};
use iced::{Element, Length};
use sitedeck_core::SliderKind;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let page = SliderKind::ALL
            .into_iter()
            .fold(Column::new().push(self.header_view()), |page, kind| {
                page.push(self.section_view(kind))
            });

        scrollable(page)
            .id(PAGE_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::PageScrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn header_view(&self) -> Element<'_, Message> {
        let nav = [
            SliderKind::Services,
            SliderKind::ImpactStories,
            SliderKind::Projects,
            SliderKind::Clients,
        ]
        .into_iter()
        .fold(Row::new().spacing(8), |nav, kind| {
            nav.push(
                button(text(kind.label()).size(14))
                    .style(button::text)
                    .on_press(Message::JumpToSection(kind)),
            )
        });

        let reload = if self.loading {
            button("Reload")
        } else {
            button("Reload").on_press(Message::ReloadContent)
        };

        let status: Element<'_, Message> = match (&self.load_error, self.loading) {
            (Some(error), _) => text(format!("Could not load content: {error}"))
                .size(14)
                .into(),
            (None, true) => text("Loading content…").size(14).into(),
            (None, false) => text("").size(14).into(),
        };

        container(
            column![
                row![text("Sitedeck").size(28), horizontal_space(), nav, reload]
                    .spacing(12)
                    .align_y(Vertical::Center),
                status
            ]
            .spacing(6),
        )
        .padding([12.0, self.config.track_padding])
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .into()
    }

    fn section_view(&self, kind: SliderKind) -> Element<'_, Message> {
        let section_height = Length::Fixed(self.config.section_height);
        let Some(carousel) = self.carousel(kind) else {
            return container(text(kind.label()))
                .height(section_height)
                .into();
        };

        let prev_button = if carousel.can_go_previous() {
            button("‹").on_press(Message::Previous(kind))
        } else {
            button("‹")
        };
        let next_button = if carousel.can_go_next() {
            button("›").on_press(Message::Next(kind))
        } else {
            button("›")
        };

        let title_row = row![
            text(kind.label()).size(26),
            horizontal_space(),
            prev_button,
            next_button
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        let body: Element<'_, Message> = if carousel.is_empty() {
            text("Nothing to show yet").size(16).into()
        } else {
            let geometry = self.track_geometry(kind);
            let slide_width = geometry.slide_width();
            let slides = carousel
                .items()
                .iter()
                .fold(Row::new().spacing(self.config.slide_gap), |track, card| {
                    track.push(card_view(card, slide_width))
                });
            scrollable(slides)
                .id(track_scroll_id(kind))
                .on_scroll(move |viewport| Message::TrackScrolled {
                    kind,
                    offset_x: viewport.absolute_offset().x,
                })
                .direction(Direction::Horizontal(
                    Scrollbar::new().width(0.0).scroller_width(0.0),
                ))
                .width(Length::Fill)
                .into()
        };

        let current = carousel.current_index();
        let dots = (0..carousel.page_count()).fold(Row::new().spacing(4), |dots, idx| {
            let marker = if idx == current { "●" } else { "○" };
            dots.push(
                button(text(marker).size(12))
                    .padding(2)
                    .style(button::text)
                    .on_press(Message::GoTo(kind, idx)),
            )
        });
        let position = text(format!(
            "{} / {} · {} per view",
            current + 1,
            carousel.page_count(),
            carousel.items_per_view()
        ))
        .size(12);

        container(
            column![
                title_row,
                body,
                row![dots, horizontal_space(), position].align_y(Vertical::Center)
            ]
            .spacing(12),
        )
        .padding([16.0, self.config.track_padding])
        .width(Length::Fill)
        .height(section_height)
        .into()
    }
}

fn card_view(card: &Card, width: f32) -> Element<'_, Message> {
    let mut content = Column::new().spacing(6).push(text(card.title.as_str()).size(20));
    if let Some(subtitle) = &card.subtitle {
        content = content.push(text(subtitle.as_str()).size(14));
    }
    for point in &card.points {
        content = content.push(text(format!("• {point}")).size(14));
    }

    container(content)
        .padding(16)
        .width(Length::Fixed(width))
        .style(container::rounded_box)
        .into()
}
