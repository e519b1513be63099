use crate::auth::use_auth;
use leptos::prelude::*;
use trainingdiary_shared::Role;

/// 开发者面板，只在开发者模式开启时出现
#[component]
pub fn DevPanel() -> impl IntoView {
    let auth = use_auth();
    let dev = move || auth.snapshot.with(|s| s.dev);
    let identity = move || {
        auth.snapshot.with(|s| match s.identity {
            Some(id) if id.is_authenticated => format!("{} (authenticated)", id.effective_role),
            Some(id) => format!("{} (signed out)", id.effective_role),
            None => "resolving...".to_string(),
        })
    };

    view! {
        <Show when=move || dev().enabled>
            <div class="fixed bottom-4 right-4 z-50 card bg-warning text-warning-content shadow-xl w-72">
                <div class="card-body p-4 gap-2 text-sm">
                    <h2 class="font-bold">"Developer mode"</h2>
                    <p>{identity}</p>

                    <div class="join">
                        {Role::ALL
                            .into_iter()
                            .map(|role| view! {
                                <button
                                    class=move || if dev().role == role { "btn btn-sm join-item btn-active" } else { "btn btn-sm join-item" }
                                    on:click=move |_| auth.act(|c| c.set_dev_role(role))
                                >
                                    {role.as_str()}
                                </button>
                            })
                            .collect_view()}
                    </div>

                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-sm"
                            prop:checked=move || dev().bypass_auth
                            on:change=move |ev| {
                                let enabled = event_target_checked(&ev);
                                auth.act(|c| c.set_dev_bypass_auth(enabled));
                            }
                        />
                        <span>"Bypass sign-in"</span>
                    </label>

                    <p class="opacity-70">"Ctrl+Shift+D to close"</p>
                </div>
            </div>
        </Show>
    }
}
