use crate::auth::use_auth;
use leptos::prelude::*;
use trainingdiary_shared::Role;

#[component]
pub fn WelcomePage(role: Role) -> impl IntoView {
    let auth = use_auth();
    let intro = match role {
        Role::Athlete => "Your diary is ready. Log today's session or check how the week is going.",
        Role::Coach => "Your team is waiting. Review your athletes' latest sessions.",
    };

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-4xl font-bold">"Welcome back"</h1>
                    <p class="text-base-content/70">{intro}</p>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| auth.act(|c| c.acknowledge_welcome())
                    >
                        "Let's go"
                    </button>
                </div>
            </div>
        </div>
    }
}
