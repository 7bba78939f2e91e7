use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};

/// Pill label with a sparkle.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="badge">
            <Icon kind=IconKind::Sparkles size=12/>
            " "
            {children()}
        </span>
    }
}
