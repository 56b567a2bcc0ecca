use yew::prelude::*;

mod api;
mod board;
mod config;
mod message;
mod model;
mod view;

use board::ActivityBoard;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <header>
                <h1>{ "Mergington High School" }</h1>
                <h2>{ "Extracurricular Activities" }</h2>
            </header>
            <ActivityBoard />
            <footer>
                <p>{ "© 2023 Mergington High School" }</p>
            </footer>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
