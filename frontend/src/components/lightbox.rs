#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, KeyboardEvent};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::carousel::Indicators;
use crate::components::cursor::Cursor;
use crate::components::icons::{icon, Icon};
use crate::components::scroll_lock::ScrollLock;
use crate::config;
use crate::content::{Item, Sequence};

const DISMISS_KEY: &str = "Escape";

fn is_dismiss_key(key: &str) -> bool {
    key == DISMISS_KEY
}

/// Full-size viewer over a sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { items: Sequence, cursor: Cursor },
}

impl ModalState {
    /// Opens at `index`. An empty sequence leaves the modal closed, so there is
    /// never an open modal without something to show.
    pub fn open(&mut self, items: Sequence, index: usize) -> bool {
        match Cursor::starting_at(items.len(), index) {
            Some(cursor) => {
                *self = ModalState::Open { items, cursor };
                true
            }
            None => {
                *self = ModalState::Closed;
                false
            }
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            ModalState::Open { cursor, .. } => Some(cursor.index()),
            ModalState::Closed => None,
        }
    }

    pub fn current(&self) -> Option<&Item> {
        match self {
            ModalState::Open { items, cursor } => items.get(cursor.index()),
            ModalState::Closed => None,
        }
    }

    pub fn next(&mut self) {
        if let ModalState::Open { cursor, .. } = self {
            cursor.next();
        }
    }

    pub fn prev(&mut self) {
        if let ModalState::Open { cursor, .. } = self {
            cursor.prev();
        }
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        match self {
            ModalState::Open { cursor, .. } => cursor.go_to(index),
            ModalState::Closed => false,
        }
    }

    /// Returns `true` when the key closed the modal.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.is_open() && is_dismiss_key(key) {
            self.close();
            return true;
        }
        false
    }
}

/// Document keydown listener, removed when dropped.
#[cfg(target_arch = "wasm32")]
struct KeyListener {
    document: Document,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl KeyListener {
    fn install(on_key: Callback<String>) -> Option<Self> {
        let document = web_sys::window().and_then(|w| w.document())?;
        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            on_key.emit(e.key());
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if let Err(err) = document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to listen for keydown: {:?}", err);
            return None;
        }
        Some(Self { document, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove keydown listener: {:?}", err);
        }
    }
}

/// Page-level side effects of an open modal: the scroll lock and, in the
/// browser, the keydown listener. Both are released when the modal closes or
/// when the session itself is dropped.
#[derive(Default)]
struct LightboxSession {
    lock: Option<ScrollLock>,
    #[cfg(target_arch = "wasm32")]
    keys: Option<KeyListener>,
}

impl LightboxSession {
    /// Acquires or releases the session's resources to match `state`.
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    fn sync(&mut self, state: &ModalState, on_key: &Callback<String>) {
        match (state.is_open(), self.lock.is_some()) {
            (true, false) => {
                log::debug!("Lightbox opened, locking page scroll");
                self.lock = Some(ScrollLock::acquire());
                #[cfg(target_arch = "wasm32")]
                {
                    self.keys = KeyListener::install(on_key.clone());
                }
            }
            (false, true) => {
                log::debug!("Lightbox closed, releasing page scroll");
                #[cfg(target_arch = "wasm32")]
                {
                    self.keys = None;
                }
                self.lock = None;
            }
            _ => {}
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub state: ModalState,
    pub on_close: Callback<()>,
    /// Keys pressed anywhere on the page while the modal is open.
    pub on_key: Callback<String>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_select: Callback<usize>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let is_open = props.state.is_open();

    // The session is dropped with the component, so unmounting while open
    // releases the lock too.
    let session = use_mut_ref(LightboxSession::default);
    {
        let state = props.state.clone();
        let on_key = props.on_key.clone();
        use_effect_with_deps(
            move |_| {
                session.borrow_mut().sync(&state, &on_key);
                || ()
            },
            is_open,
        );
    }

    let (ModalState::Open { cursor, .. }, Some(item)) = (&props.state, props.state.current()) else {
        return html! {};
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let media = if item.is_video() {
        html! {
            <video
                key={cursor.index()}
                class="lightbox-media"
                src={config::asset_url(&item.source)}
                controls=true
                autoplay=true
                playsinline=true
                aria-label={item.alt().to_string()}
            />
        }
    } else {
        html! {
            <img
                key={cursor.index()}
                class="lightbox-media"
                src={config::asset_url(&item.source)}
                alt={item.alt().to_string()}
            />
        }
    };

    let navigation = if cursor.has_many() {
        let on_prev = {
            let on_prev = props.on_prev.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_prev.emit(());
            })
        };
        let on_next = {
            let on_next = props.on_next.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_next.emit(());
            })
        };
        html! {
            <>
                <button class="lightbox-nav prev" onclick={on_prev} aria-label="Imagem anterior">
                    { icon(Icon::ChevronLeft, "icon") }
                </button>
                <button class="lightbox-nav next" onclick={on_next} aria-label="Próxima imagem">
                    { icon(Icon::ChevronRight, "icon") }
                </button>
                <Indicators
                    class="lightbox-indicators"
                    count={cursor.len()}
                    current={cursor.index()}
                    on_select={props.on_select.clone()}
                    label="Ir para imagem"
                />
                <div class="lightbox-counter">
                    { format!("{} / {}", cursor.index() + 1, cursor.len()) }
                </div>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="lightbox-backdrop" onclick={on_backdrop} role="dialog" aria-modal="true" aria-label={item.label.clone()}>
            <div class="lightbox-content" onclick={stop}>
                <button class="lightbox-close" onclick={on_close_button} aria-label="Fechar modal">
                    { icon(Icon::Close, "icon") }
                </button>
                <div class="lightbox-stage">
                    { media }
                    <div class="lightbox-caption">
                        <p class="lightbox-title">{ &item.label }</p>
                        {
                            if let Some(caption) = &item.caption {
                                html! { <p class="lightbox-subtitle">{ caption }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
                { navigation }
            </div>
        </div>
    }
}
