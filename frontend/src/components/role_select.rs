use crate::auth::use_auth;
use leptos::prelude::*;
use trainingdiary_shared::Role;

fn role_blurb(role: Role) -> &'static str {
    match role {
        Role::Athlete => "Log sessions, track shoes and injuries, follow your progress.",
        Role::Coach => "Follow your athletes, review their diaries, plan competitions.",
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Athlete => "I'm an athlete",
        Role::Coach => "I'm a coach",
    }
}

#[component]
pub fn RoleSelectPage() -> impl IntoView {
    let auth = use_auth();
    let notice = move || auth.snapshot.with(|s| s.notice.map(|n| n.message()));

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-2xl">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"TrainingDiary"</h1>
                    <p class="text-base-content/70">"How will you use the diary?"</p>
                </div>

                <Show when=move || notice().is_some()>
                    <div role="status" class="alert alert-info text-sm py-2">
                        <span>{move || notice().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="grid gap-4 md:grid-cols-2 w-full">
                    {Role::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <button
                                    class="card bg-base-100 shadow-xl text-left hover:shadow-2xl transition"
                                    on:click=move |_| auth.act(|c| c.select_role(role))
                                >
                                    <div class="card-body">
                                        <h2 class="card-title">{role_label(role)}</h2>
                                        <p class="text-base-content/70">{role_blurb(role)}</p>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
