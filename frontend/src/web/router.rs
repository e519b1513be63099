//! 路由服务模块 - History 适配层
//!
//! 封装了 web_sys 的 History API：所有对 window.history 的操作都集中在此模块。
//! 路由裁决由会话控制器完成，这里只负责"监听 -> 交给控制器 -> 同步地址栏"。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use trainingdiary::GateState;

use crate::auth::{AuthContext, use_auth};

/// 获取当前浏览器路径
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
#[derive(Clone, Copy)]
pub struct RouterService {
    auth: AuthContext,
    state: Memo<GateState>,
}

impl RouterService {
    fn new(auth: AuthContext) -> Self {
        Self {
            auth,
            state: auth.gate_state(),
        }
    }

    pub fn state(&self) -> Memo<GateState> {
        self.state
    }

    /// 链接导航：裁决后的落点直接入栈，被重定向的请求路径不留在历史中
    pub fn navigate(&self, path: &str) {
        self.auth.act(|c| c.navigate(path));
        let landed = self.auth.snapshot.with_untracked(|s| s.path.clone());
        if landed != current_path() {
            push_history_state(&landed);
        }
    }

    /// 浏览器后退/前进按钮
    fn init_popstate_listener(&self) {
        let auth = self.auth;

        let closure = Closure::<dyn Fn()>::new(move || {
            let requested = current_path();
            auth.act(|c| c.navigate(&requested));
            let landed = auth.snapshot.with_untracked(|s| s.path.clone());
            if landed != requested {
                log::debug!("popstate {} redirected to {}", requested, landed);
                replace_history_state(&landed);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 控制器自行改变路径时（选择角色、登出、门控重定向）同步地址栏
    ///
    /// 初次裁决产生的重定向替换当前条目，之后的变化入栈。
    fn setup_history_sync(&self) {
        let snapshot = self.auth.snapshot;

        Effect::new(move |was_pending: Option<bool>| {
            let (path, pending) =
                snapshot.with(|s| (s.path.clone(), s.state == GateState::Pending));
            if !pending && path != current_path() {
                if was_pending.unwrap_or(true) {
                    replace_history_state(&path);
                } else {
                    push_history_state(&path);
                }
            }
            pending
        });
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new(use_auth());

    router.init_popstate_listener();
    router.setup_history_sync();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，需位于 `AuthContext` 之下
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();

    children()
}

/// 路由出口组件
///
/// 根据门控状态渲染对应的视图树。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收门控状态，返回对应视图
    matcher: fn(GateState) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || matcher(router.state().get())
}

/// 站内链接，点击时走路由服务而不是整页跳转
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
