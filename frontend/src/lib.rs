//! TrainingDiary 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `auth`: 会话控制器的 Context 包装
//! - `web::router`: History API 适配
//! - `components`: UI 组件层，只读取快照并转发用户动作

mod api;
mod auth;
mod config;
mod components {
    pub mod dev_panel;
    pub mod loading;
    pub mod login;
    pub mod role_select;
    pub mod settings;
    pub mod shell;
    pub mod signup;
    pub mod welcome;
}

pub use config::AppConfig;

use crate::api::FetchClient;
use crate::auth::{AuthContext, init_auth};
use crate::components::dev_panel::DevPanel;
use crate::components::loading::LoadingScreen;
use crate::components::login::LoginPage;
use crate::components::role_select::RoleSelectPage;
use crate::components::shell::Shell;
use crate::components::signup::SignUpPage;

use leptos::prelude::*;
use trainingdiary::{AuthForm, BackendGateway, GateState, SessionController};
use trainingdiary_shared::Timestamp;

// 浏览器 API 适配层
pub mod web {
    pub mod document;
    pub mod keyboard;
    pub mod logger;
    pub mod router;
    mod storage;

    pub use storage::BrowserStorage;
}

use web::BrowserStorage;
use web::router::{Router, RouterOutlet, current_path};

/// 门控状态到视图树的映射
fn route_matcher(state: GateState) -> AnyView {
    match state {
        GateState::Pending => view! { <LoadingScreen /> }.into_any(),
        GateState::RoleSelection => view! { <RoleSelectPage /> }.into_any(),
        GateState::UnauthenticatedForms {
            role,
            form: AuthForm::Login,
        } => view! { <LoginPage role=role /> }.into_any(),
        GateState::UnauthenticatedForms {
            role,
            form: AuthForm::Signup,
        } => view! { <SignUpPage role=role /> }.into_any(),
        GateState::AuthenticatedShell { role, route } => {
            view! { <Shell role=role route=route /> }.into_any()
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // 1. 由浏览器适配器组装控制器
    let gateway = BackendGateway::new(config.backend.clone(), FetchClient, BrowserStorage::Local);
    let controller = SessionController::new(
        gateway,
        BrowserStorage::Local,
        BrowserStorage::Session,
        Timestamp::now(),
        &current_path(),
    );

    // 2. 创建认证上下文
    let auth_ctx = AuthContext::new(controller);
    provide_context(auth_ctx);

    // 3. 全局快捷键与外观
    web::keyboard::install_dev_shortcut(auth_ctx);
    let snapshot = auth_ctx.snapshot;
    Effect::new(move |_| snapshot.with(|s| web::document::apply_appearance(&s.appearance)));

    // 4. 拉取会话（带超时）
    init_auth(auth_ctx, config.auth_timeout_ms);

    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
            <DevPanel />
        </Router>
    }
}
