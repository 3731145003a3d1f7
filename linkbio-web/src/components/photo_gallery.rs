use shared::models::FetchState;
use yew::{Html, Properties, function_component, html};

use crate::components::loading::Loading;
use crate::components::photo_card::PhotoCard;

#[derive(Properties, PartialEq, Debug)]
pub struct PhotoGalleryProps {
    pub heading: &'static str,
    #[prop_or_default]
    pub description: Option<&'static str>,
    pub state: FetchState,
}

/// Photo-works section: exactly one of loading indicator, error line, or grid.
#[function_component(PhotoGallery)]
pub fn photo_gallery(props: &PhotoGalleryProps) -> Html {
    let body = match &props.state {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(message) => html! {
            <p class="photo-error text-red-400">{ message.clone() }</p>
        },
        FetchState::Loaded(works) => html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {
                    for works.iter().enumerate().map(|(index, work)| html! {
                        <PhotoCard key={work.key(index)} work={work.clone()} />
                    })
                }
            </div>
        },
    };

    html! {
        <section class="mb-8">
            <h2 class="text-lg font-bold text-white mb-2">{ props.heading }</h2>
            if let Some(description) = props.description {
                <p class="text-gray-300 text-sm mb-4">{ description }</p>
            }
            { body }
        </section>
    }
}
