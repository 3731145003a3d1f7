use shared::models::{Locale, ProfileAction, ProfileState, SOCIAL_LINKS};
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::{Callback, Html, function_component, html, use_effect_with, use_reducer_eq};
use yew_hooks::use_mount;

use crate::api;
use crate::components::{
    Footer, LinkCards, LocaleToggle, PhotoGallery, ProfileHeader, SocialLinks,
};

/// ProfilePage page component
///
/// Owns the locale and the photo-works state. The photo-works read is started
/// once, on mount; a result arriving after unmount is dropped by the reducer
/// handle.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let state = use_reducer_eq(ProfileState::default);

    {
        let dispatcher = state.dispatcher();
        use_mount(move || {
            spawn_local(async move {
                if let Some(outcome) = api::shared().fetch_once().await {
                    dispatcher.dispatch(ProfileAction::PhotoWorksSettled(outcome));
                }
            });
        });
    }

    // Keeps <html lang> in step with the visible text
    use_effect_with(state.locale, |locale| {
        set_document_lang(*locale);
        || ()
    });

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(ProfileAction::ToggleLocale))
    };

    let content = state.content();

    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-800 via-slate-900 to-indigo-900 py-8 px-4">
            <div class="max-w-md mx-auto">
                <header class="text-center mb-8">
                    <LocaleToggle label={content.toggle_label} {on_toggle} />
                    <ProfileHeader name={content.name} bio={content.bio} />
                    <SocialLinks links={SOCIAL_LINKS} />
                </header>
                <LinkCards links={content.links} />
                <PhotoGallery
                    heading={content.gallery_heading()}
                    description={content.gallery_description}
                    state={state.photo_works.clone()}
                />
                <Footer copyright={content.copyright} />
            </div>
        </div>
    }
}

fn set_document_lang(locale: Locale) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
    {
        let _ = html_element.set_attribute("lang", locale.code());
    }
}
