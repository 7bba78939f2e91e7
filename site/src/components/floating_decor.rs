//! Soft gradient orbs floating behind a section.

use leptos::prelude::*;

use effects::consts::DECOR_PERSPECTIVE_PX;
use effects::decor::{DecorVariant, instance_seed, seeded_orbs};

/// `seed_key` fixes the layout: the same key renders the same orbs on the
/// server and after hydration.
#[component]
pub fn FloatingDecor(
    #[prop(into)] seed_key: String,
    #[prop(default = 3)] count: u32,
    #[prop(optional)] variant: DecorVariant,
) -> impl IntoView {
    let orbs = seeded_orbs(count, instance_seed(&seed_key));

    view! {
        <div
            class=format!("floating-decor floating-decor--{}", variant.name())
            style=format!("perspective: {DECOR_PERSPECTIVE_PX}px;")
            aria-hidden="true"
        >
            {orbs
                .into_iter()
                .map(|orb| {
                    view! {
                        <div class="floating-decor__orb" style=orb.wrapper_style()>
                            <div class="floating-decor__body" style=orb.body_style(variant)></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
