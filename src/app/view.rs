use super::messages::Message;
use super::state::{
    App, BOOK_PADDING_PX, LEAF_PORTIONS, THUMBNAIL_HEIGHT_PX, THUMBNAIL_SCROLL_ID,
    THUMBNAIL_SPACING_PX, THUMBNAIL_WIDTH_PX,
};
use crate::images::ImageSlot;
use flipbook_core::{
    FlipFace, FlipOverlay, NavButtons, Page, PageSide, SpreadLayout, flip_geometry, project,
    spread_containing,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    Row, Space, button, column, container, horizontal_space, image, row, scrollable, stack, text,
};
use iced::{ContentFit, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut layout = column![self.toolbar()].spacing(12).padding(BOOK_PADDING_PX);
        layout = layout.push(self.book());
        if self.config.show_thumbnails && !self.catalog.pages.is_empty() {
            layout = layout.push(self.thumbnail_strip());
        }
        layout.into()
    }

    fn toolbar(&self) -> Element<'_, Message> {
        let labels = &self.config.labels;
        let buttons = NavButtons::for_store(&self.viewer.store);
        let state = self.viewer.store.state();
        let total = self.viewer.spreads.len();
        let shown = if state.is_flipping {
            state.target_spread
        } else {
            state.current_spread
        };
        let position = if total == 0 {
            String::new()
        } else {
            labels.spread_position(shown + 1, total)
        };

        let prev_button = button(text(labels.previous.as_str()))
            .on_press_maybe(buttons.prev_enabled.then_some(Message::PreviousSpread));
        let next_button = button(text(labels.next.as_str()))
            .on_press_maybe(buttons.next_enabled.then_some(Message::NextSpread));
        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let thumbs_label = if self.config.show_thumbnails {
            "Hide Pages"
        } else {
            "Show Pages"
        };

        let mut bar = row![
            text(self.catalog.title.as_str()).size(20),
            horizontal_space(),
            prev_button,
            text(position),
            next_button,
            horizontal_space(),
            button(text(thumbs_label)).on_press(Message::ToggleThumbnails),
            button(text(theme_label)).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        if let Some(error) = &self.reload_error {
            bar = bar.push(text(error.as_str()).size(13));
        }
        bar.into()
    }

    fn book(&self) -> Element<'_, Message> {
        let state = self.viewer.store.state();
        let frame = project(&state, &self.viewer.spreads);

        if frame.spread_count == 0 {
            return container(text(self.config.labels.empty.as_str()).size(18))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }

        let background = row![
            self.half(frame.background, PageSide::Left),
            self.half(frame.background, PageSide::Right),
        ]
        .spacing(2)
        .width(Length::Fill)
        .height(Length::Fill);

        match (frame.overlay, self.viewer.animation) {
            (Some(overlay), Some(animation)) => {
                stack![background, self.leaf(overlay, animation.progress)].into()
            }
            _ => background.into(),
        }
    }

    fn half<'a>(&'a self, layout: SpreadLayout<'a>, side: PageSide) -> Element<'a, Message> {
        match layout.page_on(side) {
            Some(page) => container(self.page_image(page, ContentFit::Contain))
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .into(),
            None => Space::new(Length::FillPortion(1), Length::Fill).into(),
        }
    }

    /// The turning leaf, squeezed towards the spine as it rotates.
    fn leaf<'a>(&'a self, overlay: FlipOverlay<'a>, progress: f32) -> Element<'a, Message> {
        let geometry = flip_geometry(overlay.direction, progress);
        let page = match geometry.face {
            FlipFace::Front => Some(overlay.front),
            FlipFace::Back => overlay.back,
        };
        let portion = ((geometry.scale * f32::from(LEAF_PORTIONS)).round() as u16)
            .clamp(1, LEAF_PORTIONS);

        let face: Element<'a, Message> = match page {
            Some(page) => self.page_image(page, ContentFit::Fill),
            None => Space::new(Length::Fill, Length::Fill).into(),
        };
        let leaf = container(face)
            .style(container::bordered_box)
            .width(Length::FillPortion(portion))
            .height(Length::Fill);
        let gap = Space::new(Length::FillPortion(LEAF_PORTIONS - portion + 1), Length::Fill);

        let hinged: Row<'a, Message> = match geometry.side {
            PageSide::Right => row![leaf, gap],
            PageSide::Left => row![gap, leaf],
        };
        let hinged = hinged.width(Length::FillPortion(1)).height(Length::Fill);
        let other_half = Space::new(Length::FillPortion(1), Length::Fill);

        let halves = match geometry.side {
            PageSide::Right => row![other_half, hinged],
            PageSide::Left => row![hinged, other_half],
        };
        halves
            .spacing(2)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn page_image<'a>(&'a self, page: &'a Page, fit: ContentFit) -> Element<'a, Message> {
        match self.images.slot(&page.image_url) {
            Some(ImageSlot::Ready(decoded)) => image(decoded.handle.clone())
                .content_fit(fit)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            Some(ImageSlot::Failed(error)) => {
                let label = page.alt.as_deref().unwrap_or(page.id.as_str());
                container(
                    column![text(label), text(error.as_str()).size(11)]
                        .spacing(4)
                        .align_x(Horizontal::Center),
                )
                .padding(8)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
            }
            _ => container(text(self.config.labels.loading.as_str()))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        }
    }

    fn thumbnail_strip(&self) -> Element<'_, Message> {
        let state = self.viewer.store.state();
        let thumbs = self
            .catalog
            .pages
            .iter()
            .enumerate()
            .map(|(idx, page)| {
                let content: Element<'_, Message> = match self.images.handle(&page.image_url) {
                    Some(handle) => image(handle.clone())
                        .content_fit(ContentFit::Contain)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .into(),
                    None => container(text(format!("{}", idx + 1)))
                        .center_x(Length::Fill)
                        .center_y(Length::Fill)
                        .into(),
                };
                let active = spread_containing(idx) == state.current_spread;
                button(content)
                    .width(Length::Fixed(THUMBNAIL_WIDTH_PX))
                    .height(Length::Fixed(THUMBNAIL_HEIGHT_PX))
                    .style(if active {
                        button::primary as fn(&Theme, button::Status) -> button::Style
                    } else {
                        button::secondary
                    })
                    .on_press(Message::ThumbnailSelected(idx))
                    .into()
            });

        scrollable(Row::with_children(thumbs).spacing(THUMBNAIL_SPACING_PX))
            .id(THUMBNAIL_SCROLL_ID.clone())
            .direction(Direction::Horizontal(Scrollbar::new()))
            .width(Length::Fill)
            .into()
    }
}
