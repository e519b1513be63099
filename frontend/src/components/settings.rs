use crate::auth::{sign_out, use_auth};
use leptos::prelude::*;
use trainingdiary_shared::{AccentColor, LanguageCode, ThemeMode};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let appearance = move || auth.snapshot.with(|s| s.appearance.clone());

    let on_theme = move |ev: web_sys::Event| {
        if let Some(theme) = ThemeMode::parse(&event_target_value(&ev)) {
            auth.act(|c| {
                c.set_theme(theme);
            });
        }
    };
    let on_accent = move |ev: web_sys::Event| {
        if let Some(color) = AccentColor::parse(&event_target_value(&ev)) {
            auth.act(|c| {
                c.set_accent_color(&color);
            });
        }
    };
    let on_language = move |ev: web_sys::Event| {
        if let Some(language) = LanguageCode::parse(&event_target_value(&ev)) {
            auth.act(|c| {
                c.set_language(language);
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-4">
                <h1 class="card-title text-2xl">"Settings"</h1>

                <label class="form-control">
                    <span class="label-text">"Theme"</span>
                    <select class="select select-bordered" on:change=on_theme>
                        {ThemeMode::ALL
                            .into_iter()
                            .map(|theme| view! {
                                <option
                                    value=theme.as_str()
                                    selected=move || appearance().theme == theme
                                >
                                    {theme.as_str()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="form-control">
                    <span class="label-text">"Accent color"</span>
                    <input
                        type="color"
                        class="h-10 w-20"
                        prop:value=move || appearance().accent_color.as_str().to_string()
                        on:change=on_accent
                    />
                </label>

                <label class="form-control">
                    <span class="label-text">"Language"</span>
                    <select class="select select-bordered" on:change=on_language>
                        {LanguageCode::ALL
                            .into_iter()
                            .map(|language| view! {
                                <option
                                    value=language.as_str()
                                    selected=move || appearance().language == language
                                >
                                    {language.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>

                <div class="divider"></div>

                <div class="flex flex-wrap gap-2">
                    <button class="btn btn-outline" on:click=move |_| auth.act(|c| c.switch_role())>
                        "Switch role"
                    </button>
                    <button class="btn btn-error" on:click=move |_| sign_out(auth)>
                        "Sign out"
                    </button>
                </div>
            </div>
        </div>
    }
}
