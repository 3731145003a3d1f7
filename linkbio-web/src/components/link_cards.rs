use shared::models::{IconRef, LinkEntry};
use yew::{Html, Properties, function_component, html};
use yew_icons::Icon;

use crate::components::icons::icon_id;

#[derive(Properties, PartialEq, Debug)]
pub struct LinkCardsProps {
    pub links: &'static [LinkEntry],
}

#[function_component(LinkCards)]
pub fn link_cards(props: &LinkCardsProps) -> Html {
    html! {
        <div class="space-y-4 mb-8">
            {
                for props.links.iter().enumerate().map(|(index, link)| html! {
                    <a
                        key={index}
                        href={link.url}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="block overflow-hidden rounded-lg border border-gray-600 bg-white/10 transition-all duration-300 hover:scale-[1.02] hover:shadow-lg"
                    >
                        <div class="flex items-center gap-4 p-4 w-full">
                            <div class="flex-shrink-0 w-10 h-10 bg-gradient-to-br from-blue-200/20 to-indigo-200/20 rounded-full flex items-center justify-center text-blue-300">
                                <Icon icon_id={icon_id(link.icon)} class="w-4 h-4" />
                            </div>
                            <div class="flex-1 text-left">
                                <h3 class="font-semibold text-white text-sm">{ link.title }</h3>
                                <p class="text-gray-300 text-xs">{ link.description }</p>
                            </div>
                            <Icon icon_id={icon_id(IconRef::ExternalLink)} class="w-4 h-4 text-gray-400" />
                        </div>
                    </a>
                })
            }
        </div>
    }
}
