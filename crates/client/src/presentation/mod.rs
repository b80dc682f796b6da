//! Terminal rendering: setup/teardown, the mode router, and widgets.

pub mod terminal;
pub mod ui;
pub mod widgets;
