use crate::components::settings::SettingsPage;
use crate::components::welcome::WelcomePage;
use crate::web::router::Link;
use leptos::prelude::*;
use trainingdiary::{AthleteRoute, CoachRoute, ShellRoute};
use trainingdiary_shared::Role;

/// 已认证外壳：顶部导航 + 按角色路由的页面
#[component]
pub fn Shell(role: Role, route: ShellRoute) -> impl IntoView {
    let active = route.to_path();
    let nav = ShellRoute::nav_items(role)
        .into_iter()
        .map(|item| {
            let path = item.to_path();
            let class = if path == active { "btn btn-ghost btn-active" } else { "btn btn-ghost" };
            view! { <Link to=path class=class>{item.title()}</Link> }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-base-200">
            <nav class="navbar bg-base-100 shadow">
                <div class="flex-1 px-2 font-bold">"TrainingDiary"</div>
                <div class="flex-none gap-1 overflow-x-auto">{nav}</div>
            </nav>
            <main class="max-w-5xl mx-auto p-4 md:p-8">{page(role, route)}</main>
        </div>
    }
}

fn page(role: Role, route: ShellRoute) -> AnyView {
    match route {
        ShellRoute::Welcome => view! { <WelcomePage role=role /> }.into_any(),
        ShellRoute::Athlete(AthleteRoute::Settings) | ShellRoute::Coach(CoachRoute::Settings) => {
            view! { <SettingsPage /> }.into_any()
        }
        other => view! { <PlaceholderPage route=other /> }.into_any(),
    }
}

/// 具体业务页面由各自的功能模块提供，这里只展示路由本身
#[component]
fn PlaceholderPage(route: ShellRoute) -> impl IntoView {
    let detail = match &route {
        ShellRoute::Athlete(AthleteRoute::Session(id))
        | ShellRoute::Athlete(AthleteRoute::Injury(id))
        | ShellRoute::Athlete(AthleteRoute::Shoe(id))
        | ShellRoute::Coach(CoachRoute::Athlete(id))
        | ShellRoute::Coach(CoachRoute::Session(id))
        | ShellRoute::Coach(CoachRoute::Competition(id)) => Some(id.clone()),
        _ => None,
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h1 class="card-title text-2xl">{route.title()}</h1>
                {detail.map(|id| view! { <p class="text-base-content/70">{format!("#{}", id)}</p> })}
            </div>
        </div>
    }
}
