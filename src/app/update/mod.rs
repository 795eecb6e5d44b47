mod navigation;
mod reducer;
mod runtime;

use super::messages::Message;
use super::state::App;
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use sitedeck_core::SliderKind;
use std::path::PathBuf;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    LoadContent { request_id: u64, path: PathBuf },
    SnapTrack(SliderKind),
    ScrollPageTo(f32),
}

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::runtime_event_to_message)];

        // Keyed on (kind, generation): a new generation drops the old timer
        // and starts a fresh one.
        for (kind, carousel) in &app.carousels {
            if let Some(schedule) = carousel.schedule() {
                subscriptions.push(
                    time::every(schedule.interval)
                        .with((*kind, schedule.generation))
                        .map(|((kind, generation), _at)| Message::AutoAdvance { kind, generation }),
                );
            }
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
