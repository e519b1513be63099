use crate::auth::{sign_in, use_auth};
use leptos::prelude::*;
use trainingdiary::AuthForm;
use trainingdiary_shared::Role;

pub(crate) fn role_heading(role: Role) -> &'static str {
    match role {
        Role::Athlete => "Athlete",
        Role::Coach => "Coach",
    }
}

/// 表单上方的错误与提示
#[component]
pub(crate) fn FormMessages() -> impl IntoView {
    let auth = use_auth();
    let error = move || auth.snapshot.with(|s| s.error.clone());
    let notice = move || auth.snapshot.with(|s| s.notice.map(|n| n.message()));

    view! {
        <Show when=move || notice().is_some()>
            <div role="status" class="alert alert-info text-sm py-2">
                <span>{move || notice().unwrap_or_default()}</span>
            </div>
        </Show>
        <Show when=move || error().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
                <span>{move || error().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let is_submitting = move || auth.snapshot.with(|s| s.submitting);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        sign_in(auth, email.get(), password.get());
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{format!("{} sign in", role_heading(role))}</h1>
                    <p class="text-base-content/70">"Welcome back to your training diary"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <FormMessages />

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                autocomplete="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_submitting>
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>

                        <div class="flex justify-between text-sm mt-2">
                            <button
                                type="button"
                                class="link"
                                on:click=move |_| auth.act(|c| c.back_to_role_selection())
                            >
                                "Back"
                            </button>
                            <button
                                type="button"
                                class="link link-primary"
                                on:click=move |_| auth.act(|c| c.show_form(AuthForm::Signup))
                            >
                                "Create an account"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
