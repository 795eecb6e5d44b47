use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use crate::content::SiteContent;
use sitedeck_core::SliderKind;
use tracing::{error, info, warn};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Previous(kind) => self.handle_previous(kind, &mut effects),
            Message::Next(kind) => self.handle_next(kind, &mut effects),
            Message::GoTo(kind, index) => self.handle_go_to(kind, index, &mut effects),
            Message::AutoAdvance { kind, generation } => {
                self.handle_auto_advance(kind, generation, &mut effects)
            }
            Message::JumpToSection(kind) => self.handle_jump_to_section(kind, &mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects)
            }
            Message::PageScrolled {
                offset_y,
                viewport_height,
            } => self.handle_page_scrolled(offset_y, viewport_height),
            Message::TrackScrolled { kind, offset_x } => {
                self.handle_track_scrolled(kind, offset_x, &mut effects)
            }
            Message::ReloadContent => effects.push(self.remount()),
            Message::ContentLoaded {
                request_id,
                content,
            } => self.handle_content_loaded(request_id, content, &mut effects),
            Message::ContentLoadFailed { request_id, error } => {
                self.handle_content_load_failed(request_id, error)
            }
        }

        effects
    }

    fn handle_content_loaded(
        &mut self,
        request_id: u64,
        content: SiteContent,
        effects: &mut Vec<Effect>,
    ) {
        if request_id != self.content_request_id {
            warn!(
                request_id,
                current = self.content_request_id,
                "Dropping content from a superseded load"
            );
            return;
        }
        self.loading = false;
        self.load_error = None;
        for kind in SliderKind::ALL {
            if let Some(carousel) = self.carousels.get_mut(&kind) {
                carousel.set_items(content.cards_for(kind).to_vec());
                effects.push(Effect::SnapTrack(kind));
            }
        }
        info!(request_id, "Applied site content to sliders");
    }

    fn handle_content_load_failed(&mut self, request_id: u64, message: String) {
        if request_id != self.content_request_id {
            return;
        }
        error!(request_id, "Failed to load site content: {message}");
        self.loading = false;
        self.load_error = Some(message);
    }
}
