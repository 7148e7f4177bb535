pub mod mocks;

use crate::utils::{ dispatch, MenuEvent, MenuState, ThemeStore };

#[allow(dead_code)]
pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Feeds events through the same path the component uses.
pub fn run<S: ThemeStore>(state: &mut MenuState, store: &S, events: &[MenuEvent]) {
    for event in events {
        if let Err(e) = dispatch(state, store, *event) {
            log::error!("dispatch failed: {}", e);
        }
    }
}
