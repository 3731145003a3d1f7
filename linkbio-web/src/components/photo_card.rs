use shared::models::PhotoWork;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq, Debug)]
pub struct PhotoCardProps {
    pub work: PhotoWork,
}

/// Gallery card linking out to the work. Image and subtitle are left out when
/// the entry has none.
#[function_component(PhotoCard)]
pub fn photo_card(props: &PhotoCardProps) -> Html {
    let work = &props.work;
    html! {
        <a
            class="photo-card block"
            href={work.url.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            <div class="overflow-hidden rounded-lg border border-gray-600 bg-white/10 cursor-pointer transition-all hover:shadow-xl">
                if let Some(src) = work.image_url() {
                    <img src={src.to_string()} alt={work.title.clone()} class="w-full h-60 object-cover" />
                }
                <div class="p-3">
                    <h3 class="text-white font-semibold text-sm mb-1">{ work.title.clone() }</h3>
                    if let Some(subtitle) = work.subtitle() {
                        <p class="photo-subtitle text-gray-300 text-xs mb-1">{ subtitle.to_string() }</p>
                    }
                </div>
            </div>
        </a>
    }
}
