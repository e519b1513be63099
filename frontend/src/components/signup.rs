use crate::auth::{sign_up, use_auth};
use crate::components::login::{FormMessages, role_heading};
use leptos::prelude::*;
use trainingdiary::{AuthForm, SignUpForm};
use trainingdiary_shared::Role;

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=kind
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered"
            />
        </div>
    }
}

#[component]
pub fn SignUpPage(role: Role) -> impl IntoView {
    let auth = use_auth();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let team_code = RwSignal::new(String::new());
    let is_submitting = move || auth.snapshot.with(|s| s.submitting);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = SignUpForm {
            email: email.get(),
            password: password.get(),
            full_name: full_name.get(),
            username: username.get(),
            team_code: Some(team_code.get()),
        };
        sign_up(auth, form);
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{format!("Create a {} account", role_heading(role).to_lowercase())}</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <FormMessages />

                        <TextField id="full_name" label="Full name" value=full_name />
                        <TextField id="username" label="Username" value=username />
                        <TextField id="email" label="Email" kind="email" value=email />
                        <TextField id="password" label="Password" kind="password" value=password />
                        {(role == Role::Athlete).then(|| view! {
                            <TextField id="team_code" label="Team code (optional)" value=team_code />
                        })}

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_submitting>
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Sign up".into_any()
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
                                on:click=move |_| auth.act(|c| c.show_form(AuthForm::Login))
                            >
                                "I already have an account"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
