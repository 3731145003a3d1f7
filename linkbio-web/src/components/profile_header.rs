use shared::models::content::{AVATAR_FALLBACK, PROFILE_IMAGE, PROFILE_IMAGE_ALT};
use yew::{Callback, Event, Html, Properties, function_component, html, use_state_eq};

#[derive(Properties, PartialEq, Debug)]
pub struct ProfileHeaderProps {
    pub name: &'static str,
    /// Biography, one entry per line.
    pub bio: &'static [&'static str],
}

/// Avatar, name and biography.
///
/// The avatar switches to the text fallback once the photo fails to load.
#[function_component(ProfileHeader)]
pub fn profile_header(props: &ProfileHeaderProps) -> Html {
    let image_failed = use_state_eq(|| false);

    let on_error = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };

    let lines = props.bio.len();
    let bio = props.bio.iter().enumerate().map(|(index, line)| {
        html! {
            <>
                { *line }
                if index + 1 < lines {
                    <br />
                }
            </>
        }
    });

    html! {
        <>
            <div class="w-24 h-24 mx-auto mb-4 rounded-full ring-4 ring-white shadow-lg overflow-hidden">
                if *image_failed {
                    <span class="flex h-full w-full items-center justify-center text-2xl bg-gradient-to-br from-blue-400 to-indigo-500 text-white">
                        { AVATAR_FALLBACK }
                    </span>
                } else {
                    <img
                        class="h-full w-full object-cover"
                        src={ PROFILE_IMAGE }
                        alt={ PROFILE_IMAGE_ALT }
                        onerror={on_error}
                    />
                }
            </div>
            <h1 class="text-2xl font-bold text-white mb-2">{ props.name }</h1>
            <p class="text-gray-300 text-sm leading-relaxed mb-4">{ for bio }</p>
        </>
    }
}
