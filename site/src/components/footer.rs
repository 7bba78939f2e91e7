#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::util::date::current_year;

pub fn footer_text(year: i32, name: &str) -> String {
    format!("© {year} {name}. Built with love, Rust, and a sprinkle of 3D.")
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{footer_text(current_year(), PROFILE.name)}</p>
        </footer>
    }
}
