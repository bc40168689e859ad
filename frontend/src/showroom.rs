//! Page-level state shared by every carousel and the single lightbox.
//!
//! Each strip owns its cursor. The lightbox opens on a copy of a strip's
//! sequence and position, and every move made inside it is written back to
//! that strip, so closing it leaves the strip on the last viewed item.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::components::carousel::CarouselState;
use crate::components::lightbox::ModalState;
use crate::content::{LandingContent, Sequence};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StripKey {
    Environments,
    Testimonials,
    Gallery(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShowroomAction {
    Next(StripKey),
    Prev(StripKey),
    GoTo(StripKey, usize),
    MediaFailed(StripKey, usize),
    SelectCategory(String),
    OpenLightbox(StripKey),
    LightboxNext,
    LightboxPrev,
    LightboxSelect(usize),
    CloseLightbox,
    KeyPressed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Showroom {
    strips: HashMap<StripKey, CarouselState>,
    categories: Vec<String>,
    active_category: Option<String>,
    lightbox: ModalState,
    lightbox_origin: Option<StripKey>,
}

impl Showroom {
    pub fn from_content(content: &LandingContent) -> Self {
        let mut showroom = Self::default();
        showroom.insert(StripKey::Environments, content.environments.clone());
        showroom.insert(StripKey::Testimonials, content.testimonials.clone());
        for category in &content.gallery {
            if showroom.insert(StripKey::Gallery(category.key.clone()), category.items.clone()) {
                showroom.categories.push(category.key.clone());
            }
        }
        showroom.active_category = showroom.categories.first().cloned();
        showroom
    }

    fn insert(&mut self, key: StripKey, items: Sequence) -> bool {
        match CarouselState::new(items) {
            Some(state) => {
                self.strips.insert(key, state);
                true
            }
            None => {
                warn!("Skipping empty carousel {:?}", key);
                false
            }
        }
    }

    pub fn strip(&self, key: &StripKey) -> Option<&CarouselState> {
        self.strips.get(key)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn active_gallery_key(&self) -> Option<StripKey> {
        self.active_category.clone().map(StripKey::Gallery)
    }

    pub fn lightbox(&self) -> &ModalState {
        &self.lightbox
    }

    #[cfg(test)]
    pub fn lightbox_origin(&self) -> Option<&StripKey> {
        self.lightbox_origin.as_ref()
    }

    /// Applies one action in place. Unknown strips and invalid indices are ignored.
    pub fn apply(&mut self, action: ShowroomAction) {
        match action {
            ShowroomAction::Next(key) => {
                if let Some(strip) = self.strips.get_mut(&key) {
                    strip.next();
                    debug!("{:?} -> {}", key, strip.index());
                }
            }
            ShowroomAction::Prev(key) => {
                if let Some(strip) = self.strips.get_mut(&key) {
                    strip.prev();
                    debug!("{:?} -> {}", key, strip.index());
                }
            }
            ShowroomAction::GoTo(key, index) => {
                if let Some(strip) = self.strips.get_mut(&key) {
                    if strip.go_to(index) {
                        debug!("{:?} -> {}", key, index);
                    }
                }
            }
            ShowroomAction::MediaFailed(key, index) => {
                if let Some(strip) = self.strips.get_mut(&key) {
                    if strip.report_load_failure(index) {
                        let source = strip.items().get(index).map(|item| item.source.as_str());
                        warn!("Media {:?} of {:?} failed to load, showing fallback", source, key);
                    }
                }
            }
            ShowroomAction::SelectCategory(category) => self.select_category(category),
            ShowroomAction::OpenLightbox(key) => self.open_lightbox(key),
            ShowroomAction::LightboxNext => {
                self.lightbox.next();
                self.sync_origin();
            }
            ShowroomAction::LightboxPrev => {
                self.lightbox.prev();
                self.sync_origin();
            }
            ShowroomAction::LightboxSelect(index) => {
                if self.lightbox.select_index(index) {
                    self.sync_origin();
                }
            }
            ShowroomAction::CloseLightbox => self.close_lightbox(),
            ShowroomAction::KeyPressed(key) => {
                if self.lightbox.handle_key(&key) {
                    debug!("Lightbox dismissed with {}", key);
                    self.close_lightbox();
                }
            }
        }
    }

    fn select_category(&mut self, category: String) {
        if !self.categories.contains(&category) || self.active_category.as_ref() == Some(&category) {
            return;
        }
        let previous = self.active_gallery_key();
        if previous.is_some() && self.lightbox_origin == previous {
            debug!("Closing lightbox tied to {:?}", previous);
            self.close_lightbox();
        }
        debug!("Gallery category -> {}", category);
        self.active_category = Some(category);
    }

    fn open_lightbox(&mut self, key: StripKey) {
        let Some(strip) = self.strips.get(&key) else {
            return;
        };
        if self.lightbox.open(strip.items().clone(), strip.index()) {
            debug!("Lightbox opened on {:?} at {}", key, strip.index());
            self.lightbox_origin = Some(key);
        }
    }

    fn close_lightbox(&mut self) {
        if let Some(key) = &self.lightbox_origin {
            debug!("Lightbox closed, {:?} left at {:?}", key, self.lightbox.index());
        }
        self.sync_origin();
        self.lightbox.close();
        self.lightbox_origin = None;
    }

    fn sync_origin(&mut self) {
        let (Some(key), Some(index)) = (&self.lightbox_origin, self.lightbox.index()) else {
            return;
        };
        if let Some(strip) = self.strips.get_mut(key) {
            strip.go_to(index);
        }
    }
}

impl Reducible for Showroom {
    type Action = ShowroomAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{GalleryCategory, Item};

    fn sequence(labels: &[&str]) -> Sequence {
        labels
            .iter()
            .map(|label| Item::image(format!("/{}.png", label.to_lowercase()), *label))
            .collect::<Vec<_>>()
            .into()
    }

    fn showroom() -> Showroom {
        let mut content = LandingContent::embedded().unwrap();
        content.environments = sequence(&["Cozinha", "Sala", "Closet", "Gourmet"]);
        content.gallery = vec![
            GalleryCategory {
                key: "cozinhas".into(),
                label: "Cozinhas".into(),
                items: sequence(&["Ilha", "Integrada", "Compacta"]),
            },
            GalleryCategory {
                key: "banheiros".into(),
                label: "Banheiros".into(),
                items: sequence(&["Gabinete", "Lavabo"]),
            },
        ];
        Showroom::from_content(&content)
    }

    fn index(showroom: &Showroom, key: &StripKey) -> usize {
        showroom.strip(key).unwrap().index()
    }

    #[test]
    fn strips_start_at_zero() {
        let showroom = showroom();
        assert_eq!(index(&showroom, &StripKey::Environments), 0);
        assert_eq!(index(&showroom, &StripKey::Testimonials), 0);
        assert_eq!(showroom.active_category(), Some("cozinhas"));
        assert!(!showroom.lightbox().is_open());
    }

    #[test]
    fn strips_do_not_share_state() {
        let mut showroom = showroom();
        showroom.apply(ShowroomAction::Next(StripKey::Environments));
        showroom.apply(ShowroomAction::Next(StripKey::Environments));
        assert_eq!(index(&showroom, &StripKey::Environments), 2);
        assert_eq!(index(&showroom, &StripKey::Testimonials), 0);
        assert_eq!(index(&showroom, &StripKey::Gallery("cozinhas".into())), 0);
    }

    #[test]
    fn lightbox_moves_carry_back_to_carousel() {
        let mut showroom = showroom();
        let key = StripKey::Environments;
        showroom.apply(ShowroomAction::GoTo(key.clone(), 1));
        showroom.apply(ShowroomAction::OpenLightbox(key.clone()));
        assert_eq!(showroom.lightbox().index(), Some(1));

        showroom.apply(ShowroomAction::LightboxNext);
        assert_eq!(showroom.lightbox().current().unwrap().label, "Closet");
        showroom.apply(ShowroomAction::CloseLightbox);

        assert!(!showroom.lightbox().is_open());
        assert_eq!(index(&showroom, &key), 2);
    }

    #[test]
    fn lightbox_select_and_prev_sync() {
        let mut showroom = showroom();
        let key = StripKey::Gallery("cozinhas".into());
        showroom.apply(ShowroomAction::OpenLightbox(key.clone()));
        showroom.apply(ShowroomAction::LightboxSelect(2));
        showroom.apply(ShowroomAction::LightboxPrev);
        showroom.apply(ShowroomAction::LightboxSelect(9));
        showroom.apply(ShowroomAction::KeyPressed("Escape".into()));
        assert_eq!(index(&showroom, &key), 1);
    }

    #[test]
    fn escape_closes_lightbox() {
        let mut showroom = showroom();
        showroom.apply(ShowroomAction::OpenLightbox(StripKey::Environments));
        showroom.apply(ShowroomAction::KeyPressed("Enter".into()));
        assert!(showroom.lightbox().is_open());
        showroom.apply(ShowroomAction::KeyPressed("Escape".into()));
        assert!(!showroom.lightbox().is_open());
        assert_eq!(showroom.lightbox_origin(), None);
    }

    #[test]
    fn close_action_clears_origin_and_is_idempotent() {
        let mut showroom = showroom();
        showroom.apply(ShowroomAction::OpenLightbox(StripKey::Testimonials));
        assert_eq!(showroom.lightbox_origin(), Some(&StripKey::Testimonials));
        showroom.apply(ShowroomAction::CloseLightbox);
        let closed = showroom.clone();
        showroom.apply(ShowroomAction::CloseLightbox);
        assert_eq!(showroom, closed);
        assert_eq!(showroom.lightbox_origin(), None);
    }

    #[test]
    fn switching_category_keeps_independent_cursors() {
        let mut showroom = showroom();
        let kitchens = StripKey::Gallery("cozinhas".into());
        let baths = StripKey::Gallery("banheiros".into());
        showroom.apply(ShowroomAction::Next(kitchens.clone()));
        showroom.apply(ShowroomAction::SelectCategory("banheiros".into()));
        assert_eq!(showroom.active_gallery_key(), Some(baths.clone()));
        assert_eq!(index(&showroom, &baths), 0);
        showroom.apply(ShowroomAction::SelectCategory("cozinhas".into()));
        assert_eq!(index(&showroom, &kitchens), 1);
    }

    #[test]
    fn switching_category_closes_its_lightbox() {
        let mut showroom = showroom();
        showroom.apply(ShowroomAction::OpenLightbox(StripKey::Gallery("cozinhas".into())));
        showroom.apply(ShowroomAction::LightboxNext);
        showroom.apply(ShowroomAction::SelectCategory("banheiros".into()));
        assert!(!showroom.lightbox().is_open());
        assert_eq!(index(&showroom, &StripKey::Gallery("cozinhas".into())), 1);
    }

    #[test]
    fn switching_category_leaves_other_lightbox_open() {
        let mut showroom = showroom();
        showroom.apply(ShowroomAction::OpenLightbox(StripKey::Environments));
        showroom.apply(ShowroomAction::SelectCategory("banheiros".into()));
        assert!(showroom.lightbox().is_open());
    }

    #[test]
    fn unknown_category_is_ignored() {
        let mut showroom = showroom();
        showroom.apply(ShowroomAction::SelectCategory("varandas".into()));
        assert_eq!(showroom.active_category(), Some("cozinhas"));
    }

    #[test]
    fn media_failure_is_scoped_to_its_strip() {
        let mut showroom = showroom();
        showroom.apply(ShowroomAction::MediaFailed(StripKey::Environments, 2));
        showroom.apply(ShowroomAction::MediaFailed(StripKey::Environments, 2));
        let environments = showroom.strip(&StripKey::Environments).unwrap();
        assert!(environments.failures().contains(2));
        assert_eq!(environments.failures().len(), 1);
        let kitchens = showroom.strip(&StripKey::Gallery("cozinhas".into())).unwrap();
        assert_eq!(kitchens.failures().len(), 0);
    }

    #[test]
    fn reduce_keeps_snapshot_when_nothing_changes() {
        let state = Rc::new(showroom());
        let same = state.clone().reduce(ShowroomAction::GoTo(StripKey::Environments, 42));
        assert!(Rc::ptr_eq(&state, &same));
        let moved = state.clone().reduce(ShowroomAction::Next(StripKey::Environments));
        assert!(!Rc::ptr_eq(&state, &moved));
    }
}
