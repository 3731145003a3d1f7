use shared::models::SocialLink;
use yew::{Html, Properties, function_component, html};
use yew_icons::Icon;

use crate::components::icons::icon_id;

#[derive(Properties, PartialEq, Debug)]
pub struct SocialLinksProps {
    pub links: &'static [SocialLink],
}

#[function_component(SocialLinks)]
pub fn social_links(props: &SocialLinksProps) -> Html {
    html! {
        <nav class="flex justify-center gap-3 mb-6">
            {
                for props.links.iter().map(|link| html! {
                    <a
                        key={link.label}
                        href={link.url}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={link.label}
                        class="flex h-10 w-10 items-center justify-center rounded-full border border-gray-300 bg-white/20 text-gray-300 transition-all duration-200 hover:scale-110 hover:bg-white/30 hover:text-white"
                    >
                        <Icon icon_id={icon_id(link.icon)} class="w-5 h-5" />
                    </a>
                })
            }
        </nav>
    }
}
