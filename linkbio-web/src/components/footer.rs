use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq, Debug)]
pub struct FooterProps {
    pub copyright: &'static str,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="text-center mt-8 text-xs text-gray-400">
            <p>{ props.copyright }</p>
        </footer>
    }
}
