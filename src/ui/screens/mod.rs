pub mod list_screen;
