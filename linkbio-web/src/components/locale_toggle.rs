use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq, Debug)]
pub struct LocaleToggleProps {
    /// Name of the language the button switches to.
    pub label: &'static str,
    pub on_toggle: Callback<()>,
}

#[function_component(LocaleToggle)]
pub fn locale_toggle(props: &LocaleToggleProps) -> Html {
    let on_toggle = props.on_toggle.clone();
    html! {
        <div class="flex justify-end mb-2">
            <button
                type="button"
                class="ml-auto rounded-md border border-gray-300 px-3 py-1 text-sm text-gray-200 hover:bg-white/10"
                onclick={move |event: yew::MouseEvent| {
                    event.prevent_default();
                    on_toggle.emit(());
                }}>
                { props.label }
            </button>
        </div>
    }
}
