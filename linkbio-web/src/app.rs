use yew::{Html, function_component, html};

use crate::pages::ProfilePage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main>
            <ProfilePage />
        </main>
    }
}
