//! 把外观设置应用到文档根元素

use trainingdiary::preferences::Appearance;
use trainingdiary_shared::ThemeMode;
use wasm_bindgen::JsCast;

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

fn resolved_theme(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
        ThemeMode::System if prefers_dark() => "dark",
        ThemeMode::System => "light",
    }
}

pub fn apply_appearance(appearance: &Appearance) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.set_attribute("data-theme", resolved_theme(appearance.theme));
    let _ = root.set_attribute("lang", appearance.language.as_str());
    if let Some(el) = root.dyn_ref::<web_sys::HtmlElement>() {
        let _ = el
            .style()
            .set_property("--accent-color", appearance.accent_color.as_str());
    }
}
