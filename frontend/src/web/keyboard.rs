//! 全局快捷键监听

use leptos::ev;
use leptos::prelude::*;
use trainingdiary::keyboard::{DEV_MODE_CHORD, KeyPress};

use crate::auth::AuthContext;

fn key_press(ev: &web_sys::KeyboardEvent) -> KeyPress {
    KeyPress {
        key: ev.key(),
        ctrl: ev.ctrl_key(),
        shift: ev.shift_key(),
        alt: ev.alt_key(),
        meta: ev.meta_key(),
    }
}

/// 在任何视图下切换开发者模式
pub fn install_dev_shortcut(auth: AuthContext) {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.repeat() || !DEV_MODE_CHORD.matches(&key_press(&ev)) {
            return;
        }
        ev.prevent_default();
        auth.act(|c| {
            c.toggle_dev_mode();
        });
    });
    on_cleanup(move || handle.remove());
}
