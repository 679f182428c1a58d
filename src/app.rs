//! Application state and core logic for the roadmap dashboard.
//!
//! This module contains the `App` struct which owns the loaded document,
//! the board selection, and the detail overlay state machine.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use ratatui::layout::{Position, Rect};

use crate::cli::CliConfig;
use crate::models::{RoadmapDocument, RoadmapItem};
use crate::ui::CardHit;

/// Detail overlay state. `Closed` is the initial state; `Open` shows
/// exactly one item, addressed by id so a document reload can re-resolve
/// it. No stacking: opening replaces, closing empties.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Closed,
    Open { id: String, scroll: u16 },
}

/// Application state
pub struct App {
    pub data_path: PathBuf,
    /// The loaded document. None until a load succeeds; replaced
    /// wholesale on reload, never mutated in place.
    pub document: Option<RoadmapDocument>,
    pub reload_flag: Arc<Mutex<bool>>,
    /// Index of the selected card within [`App::visible_order`].
    pub selected: usize,
    pub detail: DetailState,
    /// Card hit areas from the last draw, for mouse dispatch.
    pub card_hits: Vec<CardHit>,
    /// Overlay rectangle from the last draw while the detail is open.
    pub detail_area: Option<Rect>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: CliConfig,
        document: Option<RoadmapDocument>,
        reload_flag: Arc<Mutex<bool>>,
    ) -> Self {
        Self {
            data_path: config.data_path,
            document,
            reload_flag,
            selected: 0,
            detail: DetailState::Closed,
            card_hits: Vec::new(),
            detail_area: None,
            should_quit: false,
        }
    }

    /// All cards in display order: the active group, then the done group.
    pub fn visible_order(&self) -> Vec<&RoadmapItem> {
        let Some(doc) = &self.document else {
            return Vec::new();
        };
        let mut order = doc.active_items();
        order.extend(doc.done_items());
        order
    }

    /// Id of the currently selected card, if any cards exist.
    pub fn selected_id(&self) -> Option<&str> {
        self.visible_order()
            .get(self.selected)
            .map(|item| item.id.as_str())
    }

    pub fn select_next(&mut self) {
        let len = self.visible_order().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the detail overlay for the selected card.
    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_id().map(str::to_string) {
            self.open_detail(&id);
        }
    }

    /// Closed -> Open transition. An id not present in the document is a
    /// no-op: the state stays exactly as it was.
    pub fn open_detail(&mut self, id: &str) {
        let found = self
            .document
            .as_ref()
            .is_some_and(|doc| doc.find_item(id).is_some());
        if !found {
            return;
        }
        if let Some(index) = self.visible_order().iter().position(|item| item.id == id) {
            self.selected = index;
        }
        self.detail = DetailState::Open {
            id: id.to_string(),
            scroll: 0,
        };
    }

    /// Open -> Closed transition. Board selection and scroll are left
    /// untouched, so the view behind the overlay reappears as it was.
    pub fn close_detail(&mut self) {
        self.detail = DetailState::Closed;
    }

    /// Scroll the overlay body. Does nothing while closed.
    pub fn scroll_detail(&mut self, delta: i16) {
        if let DetailState::Open { scroll, .. } = &mut self.detail {
            *scroll = scroll.saturating_add_signed(delta);
        }
    }

    /// Clamp the overlay scroll to what the last draw could display.
    pub fn clamp_detail_scroll(&mut self, max: u16) {
        if let DetailState::Open { scroll, .. } = &mut self.detail {
            if *scroll > max {
                *scroll = max;
            }
        }
    }

    /// Dispatch a left click. While the overlay is open, a click outside
    /// it closes it and a click inside it is ignored; while closed, a
    /// click on a card opens that card's detail.
    pub fn handle_click(&mut self, position: Position) {
        match self.detail {
            DetailState::Open { .. } => {
                let inside = self
                    .detail_area
                    .is_some_and(|area| area.contains(position));
                if !inside {
                    self.close_detail();
                }
            }
            DetailState::Closed => {
                let hit = self
                    .card_hits
                    .iter()
                    .find(|hit| hit.area.contains(position))
                    .map(|hit| hit.id.clone());
                if let Some(id) = hit {
                    self.open_detail(&id);
                }
            }
        }
    }

    /// Swap in a freshly loaded document, keeping the selection in range
    /// and closing the overlay if its item disappeared.
    pub fn install_document(&mut self, doc: RoadmapDocument) {
        self.document = Some(doc);
        let len = self.visible_order().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        if let DetailState::Open { id, .. } = &self.detail {
            let still_present = self
                .document
                .as_ref()
                .is_some_and(|doc| doc.find_item(id).is_some());
            if !still_present {
                self.detail = DetailState::Closed;
            }
        }
    }

    /// Reload the document from disk if the watcher flagged a change.
    /// A failed reload keeps the current document.
    pub fn reload_if_flagged(&mut self) {
        let flagged = {
            let Ok(mut flag) = self.reload_flag.lock() else {
                return;
            };
            std::mem::replace(&mut *flag, false)
        };
        if flagged {
            if let Ok(doc) = RoadmapDocument::load(&self.data_path) {
                self.install_document(doc);
            }
        }
    }
}
