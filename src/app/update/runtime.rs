use super::super::messages::Message;
use super::super::state::{App, PAGE_SCROLL_ID, track_scroll_id};
use super::Effect;
use crate::content::load_site_content;
use iced::Event;
use iced::Task;
use iced::event;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadContent { request_id, path } => {
                info!(request_id, path = %path.display(), "Dispatching content load task");
                Task::perform(
                    async move {
                        match load_site_content(&path) {
                            Ok(content) => Message::ContentLoaded {
                                request_id,
                                content,
                            },
                            Err(err) => Message::ContentLoadFailed {
                                request_id,
                                error: format!("{err:#}"),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::SnapTrack(kind) => {
                let Some(carousel) = self.carousel(kind) else {
                    return Task::none();
                };
                let x = self.track_offset_x(kind);
                debug!(
                    slider = %kind,
                    index = carousel.current_index(),
                    offset_pct = carousel.render_offset(),
                    x,
                    "Moving slider track"
                );
                scrollable::scroll_to(track_scroll_id(kind), AbsoluteOffset { x, y: 0.0 })
            }
            Effect::ScrollPageTo(y) => {
                scrollable::scroll_to(PAGE_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}
