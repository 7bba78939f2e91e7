//! Card wrapper that tilts toward the pointer.
//!
//! DESIGN
//! ======
//! `effects::tilt::TiltEffect` decides what to draw; this component only
//! measures the card, forwards pointer events and requests frames. The
//! effect starts inert and is armed after hydration, once the motion
//! preference has been read. With reduced motion it stays inert and the card
//! never receives an inline transform.
//!
//! Each move replaces the outstanding animation frame, so a burst of events
//! between two frames applies only the latest transform.

use leptos::prelude::*;

use effects::tilt::TiltTransform;
#[cfg(feature = "hydrate")]
use effects::tilt::{TiltConfig, TiltEffect};

#[cfg(feature = "hydrate")]
use crate::util::frame::AnimationFrame;
#[cfg(feature = "hydrate")]
use crate::util::{motion, pointer};

#[cfg(feature = "hydrate")]
type LocalValue<T> = StoredValue<T, LocalStorage>;

#[cfg(feature = "hydrate")]
fn request_flush(
    tilt: LocalValue<TiltEffect>,
    frame: LocalValue<Option<AnimationFrame>>,
    transform: RwSignal<Option<TiltTransform>>,
) {
    let flush = move || {
        if let Some(Some(next)) = tilt.try_update_value(TiltEffect::flush) {
            transform.set(Some(next));
        }
    };
    match AnimationFrame::request(flush) {
        Ok(handle) => frame.set_value(Some(handle)),
        Err(err) => {
            log::debug!("animation frame unavailable, applying tilt now: {err:?}");
            frame.set_value(None);
            flush();
        }
    }
}

#[component]
pub fn TiltCard(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let transform = RwSignal::new(None::<TiltTransform>);

    #[cfg(feature = "hydrate")]
    let tilt = StoredValue::new_local(TiltEffect::inert());
    #[cfg(feature = "hydrate")]
    let frame = StoredValue::new_local(None::<AnimationFrame>);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let preference = motion::read_preference();
            tilt.set_value(TiltEffect::new(TiltConfig::default(), preference));
        });
        on_cleanup(move || {
            tilt.try_update_value(TiltEffect::teardown);
            frame.try_update_value(Option::take);
        });
    }

    let on_mouse_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let Some(card) = card_ref.get_untracked() else {
                    return;
                };
                let bounds = pointer::element_bounds(&card);
                let (x, y) = pointer::client_point(&ev);
                if tilt.try_update_value(|t| t.pointer_move(bounds, x, y)) == Some(true) {
                    request_flush(tilt, frame, transform);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_leave = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                if tilt.try_update_value(TiltEffect::pointer_leave) == Some(true) {
                    request_flush(tilt, frame, transform);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let style = move || transform.get().map(|t| format!("transform: {};", t.to_css()));
    let class = if class.is_empty() { "tilt-card".to_owned() } else { format!("tilt-card {class}") };

    view! {
        <div
            class=class
            node_ref=card_ref
            style=style
            on:mousemove=on_mouse_move
            on:mouseleave=on_mouse_leave
        >
            {children()}
        </div>
    }
}
