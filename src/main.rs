use expense_tracker_frontend::{app::App, logging};

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
