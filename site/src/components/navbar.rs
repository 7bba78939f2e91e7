//! Fixed page header with desktop links and a collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `UiState::menu_open` from context. Any mobile link,
//! including the email icon, closes the menu so the target section is not
//! covered after the jump.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::{HOME_ID, NAV_LINKS, PROFILE};
use crate::state::ui::UiState;

#[component]
fn SocialLinks(#[prop(optional)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let close = move |_ev: leptos::ev::MouseEvent| {
        if let Some(cb) = on_navigate.as_ref() {
            cb.run(());
        }
    };
    view! {
        <a href=PROFILE.github_url target="_blank" rel="noreferrer" aria-label="GitHub" class="navbar__social">
            <Icon kind=IconKind::Github/>
        </a>
        <a href=PROFILE.linkedin_url target="_blank" rel="noreferrer" aria-label="LinkedIn" class="navbar__social">
            <Icon kind=IconKind::Linkedin/>
        </a>
        <a href="#contact" aria-label="Email" class="navbar__social" on:click=close>
            <Icon kind=IconKind::Mail/>
        </a>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.with(|s| s.menu_open);
    let close_menu = Callback::new(move |()| ui.update(UiState::close_menu));

    view! {
        <header class="navbar">
            <div class="navbar__bar">
                <a href=format!("#{HOME_ID}") class="navbar__brand">
                    <span class="gradient-text">{PROFILE.brand}</span>
                </a>

                <nav class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="navbar__link">{link.label}</a> })
                        .collect_view()}
                    <div class="navbar__socials">
                        <SocialLinks/>
                    </div>
                </nav>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || {
                        if menu_open() {
                            view! { <Icon kind=IconKind::Close/> }
                        } else {
                            view! { <Icon kind=IconKind::Menu/> }
                        }
                    }}
                </button>
            </div>

            <Show when=menu_open>
                <div class="navbar__mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="navbar__mobile-link" on:click=move |_| close_menu.run(())>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="navbar__mobile-socials">
                        <SocialLinks on_navigate=close_menu/>
                    </div>
                </div>
            </Show>
        </header>
    }
}
