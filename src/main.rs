use yew::prelude::*;
use log::{info, Level};

mod config;
mod nav;
mod theme;

mod sections {
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
}

mod pages {
    pub mod landing;
}

use nav::Nav;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
