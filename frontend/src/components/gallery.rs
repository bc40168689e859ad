use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::carousel::{Carousel, CarouselState, CarouselVariant};
use crate::content::GalleryCategory;
use crate::showroom::{ShowroomAction, StripKey};

#[derive(Properties, PartialEq)]
pub struct ShowroomStripProps {
    pub strip: StripKey,
    pub state: CarouselState,
    pub dispatch: Callback<ShowroomAction>,
    pub label: AttrValue,
    #[prop_or(CarouselVariant::Landscape)]
    pub variant: CarouselVariant,
    /// Clicking a slide opens the shared lightbox on this strip.
    #[prop_or(false)]
    pub zoomable: bool,
}

/// A carousel wired to one strip of the showroom reducer.
#[function_component(ShowroomStrip)]
pub fn showroom_strip(props: &ShowroomStripProps) -> Html {
    let key = props.strip.clone();
    let dispatch = &props.dispatch;

    let on_prev = {
        let key = key.clone();
        dispatch.reform(move |_: ()| ShowroomAction::Prev(key.clone()))
    };
    let on_next = {
        let key = key.clone();
        dispatch.reform(move |_: ()| ShowroomAction::Next(key.clone()))
    };
    let on_select = {
        let key = key.clone();
        dispatch.reform(move |index: usize| ShowroomAction::GoTo(key.clone(), index))
    };
    let on_media_error = {
        let key = key.clone();
        dispatch.reform(move |index: usize| ShowroomAction::MediaFailed(key.clone(), index))
    };
    // The lightbox always opens on the strip's own cursor, so the clicked
    // index (always the visible slide) is not needed.
    let on_open = props
        .zoomable
        .then(|| dispatch.reform(move |_: usize| ShowroomAction::OpenLightbox(key.clone())));

    html! {
        <Carousel
            state={props.state.clone()}
            variant={props.variant}
            label={props.label.clone()}
            {on_prev}
            {on_next}
            {on_select}
            {on_media_error}
            {on_open}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryTabsProps {
    pub categories: Vec<GalleryCategory>,
    pub active: Option<AttrValue>,
    pub on_select: Callback<String>,
}

#[function_component(GalleryTabs)]
pub fn gallery_tabs(props: &GalleryTabsProps) -> Html {
    let tabs = props.categories.iter().map(|category| {
        let selected = props.active.as_deref() == Some(category.key.as_str());
        let onclick = {
            let on_select = props.on_select.clone();
            let key = category.key.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_select.emit(key.clone());
            })
        };
        html! {
            <button
                key={category.key.clone()}
                role="tab"
                class={classes!("gallery-tab", selected.then_some("active"))}
                aria-selected={selected.to_string()}
                {onclick}
            >
                { &category.label }
            </button>
        }
    });

    html! {
        <div class="gallery-tabs" role="tablist">
            { for tabs }
        </div>
    }
}
