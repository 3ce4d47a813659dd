// Presentation layer - Page controller, rendering and the console driver
pub mod app_state;
pub mod console;
pub mod controller;
pub mod handlers;
pub mod hub_state;
pub mod renderer;
