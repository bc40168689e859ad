use std::collections::BTreeSet;

use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::components::cursor::Cursor;
use crate::components::icons::{icon, Icon};
use crate::config;
use crate::content::{Item, Sequence};

/// Indices whose media failed to load. Only ever grows: a failed item is not
/// retried for the rest of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaFailures(BTreeSet<usize>);

impl MediaFailures {
    /// Returns `true` the first time an index is reported.
    pub fn report(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// What a slide shows, decided from the failure set on every render.
#[derive(Debug, PartialEq)]
pub enum Slide<'a> {
    Media(&'a Item),
    Fallback(&'a Item),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    items: Sequence,
    cursor: Cursor,
    failures: MediaFailures,
}

impl CarouselState {
    /// `None` when `items` is empty: a carousel always has something to show.
    pub fn new(items: Sequence) -> Option<Self> {
        let cursor = Cursor::new(items.len())?;
        Some(Self {
            items,
            cursor,
            failures: MediaFailures::default(),
        })
    }

    pub fn items(&self) -> &Sequence {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn has_many(&self) -> bool {
        self.cursor.has_many()
    }

    #[cfg(test)]
    pub fn current(&self) -> &Item {
        &self.items[self.cursor.index()]
    }

    pub fn next(&mut self) {
        self.cursor.next();
    }

    pub fn prev(&mut self) {
        self.cursor.prev();
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.cursor.go_to(index)
    }

    pub fn report_load_failure(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.failures.report(index)
    }

    #[cfg(test)]
    pub fn failures(&self) -> &MediaFailures {
        &self.failures
    }

    pub fn slide(&self, index: usize) -> Option<Slide<'_>> {
        let item = self.items.get(index)?;
        Some(if self.failures.contains(index) {
            Slide::Fallback(item)
        } else {
            Slide::Media(item)
        })
    }

    /// Inline style translating the strip so the current slide fills the viewport.
    pub fn strip_style(&self) -> String {
        format!("transform: translateX(-{}%);", self.cursor.index() * 100)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselVariant {
    /// 9:16 environment photos.
    Portrait,
    /// Gallery photos and the showroom video.
    Landscape,
    /// Client quotes with a small portrait.
    Testimonial,
}

impl CarouselVariant {
    fn class(self) -> &'static str {
        match self {
            CarouselVariant::Portrait => "carousel-portrait",
            CarouselVariant::Landscape => "carousel-landscape",
            CarouselVariant::Testimonial => "carousel-testimonial",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub state: CarouselState,
    #[prop_or(CarouselVariant::Landscape)]
    pub variant: CarouselVariant,
    pub label: AttrValue,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_select: Callback<usize>,
    pub on_media_error: Callback<usize>,
    /// Set when clicking a slide should open the lightbox.
    #[prop_or_default]
    pub on_open: Option<Callback<usize>>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = &props.state;
    let variant = props.variant;

    let slides = (0..state.len()).filter_map(|index| {
        let slide = state.slide(index)?;
        let on_error = {
            let on_media_error = props.on_media_error.clone();
            Callback::from(move |_: Event| on_media_error.emit(index))
        };
        let body = match variant {
            CarouselVariant::Testimonial => testimonial_slide(slide, on_error),
            _ => media_slide(slide, on_error),
        };
        let onclick = props.on_open.clone().map(|on_open| {
            Callback::from(move |_: MouseEvent| on_open.emit(index))
        });
        let clickable = onclick.is_some().then_some("clickable");
        Some(html! {
            <div
                key={index}
                class={classes!("carousel-slide", clickable)}
                aria-hidden={(index != state.index()).to_string()}
                {onclick}
            >
                { body }
            </div>
        })
    });

    let controls = if state.has_many() {
        let on_prev = {
            let cb = props.on_prev.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        let on_next = {
            let cb = props.on_next.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        html! {
            <>
                <button class="carousel-nav prev" onclick={on_prev} aria-label="Slide anterior">
                    { icon(Icon::ChevronLeft, "icon") }
                </button>
                <button class="carousel-nav next" onclick={on_next} aria-label="Próximo slide">
                    { icon(Icon::ChevronRight, "icon") }
                </button>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class={classes!("carousel", variant.class())} aria-roledescription="carousel" aria-label={props.label.clone()}>
            <div class="carousel-viewport">
                <div class="carousel-strip" style={state.strip_style()}>
                    { for slides }
                </div>
                { controls }
            </div>
            <Indicators
                count={state.len()}
                current={state.index()}
                on_select={props.on_select.clone()}
                label="Ir para slide"
            />
        </div>
    }
}

fn media_slide(slide: Slide<'_>, on_error: Callback<Event>) -> Html {
    match slide {
        Slide::Media(item) if item.is_video() => html! {
            <video
                class="carousel-media"
                src={config::asset_url(&item.source)}
                muted=true
                playsinline=true
                preload="metadata"
                aria-label={item.alt().to_string()}
                onerror={on_error}
            />
        },
        Slide::Media(item) => html! {
            <img
                class="carousel-media"
                src={config::asset_url(&item.source)}
                alt={item.alt().to_string()}
                loading="lazy"
                onerror={on_error}
            />
        },
        Slide::Fallback(item) => html! {
            <div class="carousel-fallback">
                <div class="fallback-icon">{ icon(Icon::Home, "icon-lg") }</div>
                <h3>{ &item.label }</h3>
                {
                    if let Some(caption) = &item.caption {
                        html! { <p>{ caption }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
    }
}

fn testimonial_slide(slide: Slide<'_>, on_error: Callback<Event>) -> Html {
    let (item, portrait) = match slide {
        Slide::Media(item) => (
            item,
            html! {
                <img
                    class="testimonial-photo"
                    src={config::asset_url(&item.source)}
                    alt={item.label.clone()}
                    loading="lazy"
                    onerror={on_error}
                />
            },
        ),
        Slide::Fallback(item) => (
            item,
            html! { <div class="testimonial-photo initials">{ initials(&item.label) }</div> },
        ),
    };
    let stars = "★".repeat(usize::from(item.rating.unwrap_or(5)));

    html! {
        <figure class="testimonial-card">
            <div class="stars" aria-label={format!("{} de 5 estrelas", item.rating.unwrap_or(5))}>{ stars }</div>
            {
                if let Some(quote) = &item.caption {
                    html! { <blockquote>{ format!("\"{}\"", quote) }</blockquote> }
                } else {
                    html! {}
                }
            }
            <figcaption>
                { portrait }
                <div>
                    <p class="testimonial-name">{ &item.label }</p>
                    {
                        if let Some(city) = &item.secondary_text {
                            html! { <p class="testimonial-city">{ city }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </figcaption>
        </figure>
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct IndicatorsProps {
    pub count: usize,
    pub current: usize,
    pub on_select: Callback<usize>,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// One dot per item; hidden when there is nothing to switch between.
#[function_component(Indicators)]
pub fn indicators(props: &IndicatorsProps) -> Html {
    if props.count <= 1 {
        return html! {};
    }
    let dots = (0..props.count).map(|index| {
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_select.emit(index);
            })
        };
        let active = (index == props.current).then_some("active");
        html! {
            <button
                key={index}
                class={classes!("indicator", active)}
                {onclick}
                aria-label={format!("{} {}", props.label, index + 1)}
                aria-current={(index == props.current).to_string()}
            />
        }
    });
    html! {
        <div class={classes!("indicators", props.class.clone())}>
            { for dots }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environments() -> CarouselState {
        let items: Sequence = vec![
            Item::image("/carrossel/img2.png", "Cozinha").with_caption("Cozinhas planejadas"),
            Item::image("/carrossel/img1.png", "Sala"),
            Item::image("/carrossel/img4.png", "Closet").with_caption("Closets organizados"),
            Item::image("/carrossel/img5.png", "Gourmet"),
        ]
        .into();
        CarouselState::new(items).unwrap()
    }

    #[test]
    fn empty_sequence_has_no_carousel() {
        assert!(CarouselState::new(Sequence::default()).is_none());
    }

    #[test]
    fn next_wraps_to_first() {
        let mut carousel = environments();
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.current().label, "Gourmet");
        carousel.next();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current().label, "Cozinha");
    }

    #[test]
    fn next_twice_reaches_closet() {
        let mut carousel = environments();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current().label, "Closet");
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut carousel = environments();
        carousel.prev();
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut carousel = environments();
        assert!(carousel.go_to(1));
        assert!(!carousel.go_to(4));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn failed_slide_falls_back_alone() {
        let mut carousel = environments();
        assert!(carousel.report_load_failure(2));
        assert!(matches!(carousel.slide(2), Some(Slide::Fallback(item)) if item.label == "Closet"));
        for index in [0, 1, 3] {
            assert!(matches!(carousel.slide(index), Some(Slide::Media(_))));
        }
    }

    #[test]
    fn failure_reports_are_idempotent() {
        let mut once = environments();
        once.report_load_failure(2);
        let mut twice = environments();
        twice.report_load_failure(2);
        assert!(!twice.report_load_failure(2));
        assert_eq!(once, twice);
        assert_eq!(twice.failures().len(), 1);
    }

    #[test]
    fn failure_outside_sequence_is_ignored() {
        let mut carousel = environments();
        assert!(!carousel.report_load_failure(9));
        assert_eq!(carousel.failures().len(), 0);
    }

    #[test]
    fn strip_translates_by_whole_slides() {
        let mut carousel = environments();
        assert_eq!(carousel.strip_style(), "transform: translateX(-0%);");
        carousel.go_to(3);
        assert_eq!(carousel.strip_style(), "transform: translateX(-300%);");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Maria Silva"), "MS");
        assert_eq!(initials("joão"), "J");
        assert_eq!(initials("Ana Costa Lima"), "AC");
    }
}
