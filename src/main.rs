// src/main.rs
mod api;
mod app;
mod config;
mod feedback;
mod generation;
mod model;
mod view;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
