use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex items-center gap-1 text-gray-400" role="status">
            <span class="h-3 w-3 animate-spin rounded-full border-2 border-gray-400 border-t-transparent"></span>
            <span>{"Loading..."}</span>
        </div>
    }
}
