//! Depth-weighted decorative layers behind the hero copy.
//!
//! The stage listens for pointer moves over the whole hero (the 3D scene
//! included, since events bubble) and offsets every layer away from the
//! pointer in proportion to its `data-depth`. Layers keep their last offset
//! when the pointer leaves.

use leptos::prelude::*;

use effects::parallax::LayerOffset;
#[cfg(feature = "hydrate")]
use effects::parallax::{ParallaxConfig, ParallaxEffect, parse_depth};

use crate::content::ParallaxLayer;
#[cfg(feature = "hydrate")]
use crate::util::{motion, pointer};

#[component]
pub fn HeroParallax(layers: &'static [ParallaxLayer], children: Children) -> impl IntoView {
    let stage_ref = NodeRef::<leptos::html::Div>::new();
    let offsets = RwSignal::new(Vec::<LayerOffset>::new());

    #[cfg(feature = "hydrate")]
    let parallax = StoredValue::new_local(ParallaxEffect::inert(layers.len()));

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let preference = motion::read_preference();
            let depths = layers.iter().map(|layer| parse_depth(Some(layer.depth)));
            parallax.set_value(ParallaxEffect::new(ParallaxConfig::default(), preference, depths));
        });
    }

    let on_mouse_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                let Some(stage) = stage_ref.get_untracked() else {
                    return;
                };
                let bounds = pointer::element_bounds(&stage);
                let (x, y) = pointer::client_point(&ev);
                let next = parallax.try_update_value(|p| p.pointer_move(bounds, x, y).map(<[LayerOffset]>::to_vec));
                if let Some(Some(next)) = next {
                    offsets.set(next);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="hero-parallax" node_ref=stage_ref on:mousemove=on_mouse_move>
            {children()}
            <div class="hero-parallax__layers" aria-hidden="true">
                {layers
                    .iter()
                    .enumerate()
                    .map(|(index, layer)| {
                        let style = move || {
                            offsets.with(|all| all.get(index).map(|o| format!("transform: {};", o.to_css())))
                        };
                        view! { <div class=layer.class data-depth=layer.depth style=style></div> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
