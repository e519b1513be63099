//! 认证模块
//!
//! 会话控制器是唯一的状态来源；这里把它包装成可在组件间共享的 Context，
//! 每次动作后把控制器的快照写入信号以驱动界面更新。

use std::future::Future;
use std::pin::pin;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trainingdiary::{BackendGateway, GateState, SessionController, Snapshot};

use crate::api::FetchClient;
use crate::web::BrowserStorage;

pub type Gateway = BackendGateway<FetchClient, BrowserStorage>;
pub type Controller = SessionController<Gateway, BrowserStorage, BrowserStorage>;

/// 认证上下文
///
/// 控制器不是 `Send`，因此放在本地存储的 `StoredValue` 中。
#[derive(Clone, Copy)]
pub struct AuthContext {
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    /// 最近一次动作后的快照（只读使用）
    pub snapshot: RwSignal<Snapshot>,
}

impl AuthContext {
    pub fn new(controller: Controller) -> Self {
        let snapshot = RwSignal::new(controller.snapshot());
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            snapshot,
        }
    }

    fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    pub fn refresh(&self) {
        let next = self.controller().snapshot();
        if self.snapshot.with_untracked(|current| *current != next) {
            self.snapshot.set(next);
        }
    }

    /// 门控状态；只有状态本身变化时才通知订阅者
    pub fn gate_state(&self) -> Memo<GateState> {
        let snapshot = self.snapshot;
        Memo::new(move |_| snapshot.with(|s| s.state.clone()))
    }

    /// 执行同步动作后刷新快照
    pub fn act(&self, action: impl FnOnce(&Controller)) {
        let controller = self.controller();
        action(&controller);
        self.refresh();
    }

    /// 执行异步动作
    ///
    /// 首次挂起时刷新一次（展示提交中状态），完成后再刷新。
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            let mut task = pin!(action(controller));
            if futures::poll!(task.as_mut()).is_pending() {
                ctx.refresh();
                task.await;
            }
            ctx.refresh();
        });
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 拉取会话与档案，超时后按未登录处理
pub fn init_auth(ctx: AuthContext, timeout_ms: u32) {
    ctx.spawn(move |controller| async move {
        controller.bootstrap(TimeoutFuture::new(timeout_ms)).await;
    });
}

pub fn sign_in(ctx: AuthContext, email: String, password: String) {
    ctx.spawn(move |controller| async move {
        // 失败已写入快照的错误槽
        let _ = controller.sign_in(&email, &password).await;
    });
}

pub fn sign_up(ctx: AuthContext, form: trainingdiary::SignUpForm) {
    ctx.spawn(move |controller| async move {
        let _ = controller.sign_up(&form).await;
    });
}

pub fn sign_out(ctx: AuthContext) {
    ctx.spawn(move |controller| async move {
        controller.sign_out().await;
    });
}
