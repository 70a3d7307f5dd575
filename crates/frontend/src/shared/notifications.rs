//! Transient toast notifications.
//!
//! Provided once in `App` via context; any page can push a success or error
//! toast. Toasts dismiss themselves after `AppConfig::toast_ttl_ms`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::config;
use super::icons::icon;

/// Oldest toasts are dropped beyond this
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: String,
        description: Option<String>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            title,
            description,
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NotificationKind::Success, title.into(), Some(description.into()));
    }

    /// Success toast without body text
    pub fn info(&self, title: impl Into<String>) {
        self.push(NotificationKind::Success, title.into(), None);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NotificationKind::Error, title.into(), Some(description.into()));
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn push(&self, kind: NotificationKind, title: String, description: Option<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, title, description));

        let queue = self.queue;
        let ttl = config().toast_ttl_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ttl).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the toast stack in the bottom-right corner
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    let class = match n.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <div class="toast__title">{n.title}</div>
                                {n.description.map(|d| view! { <div class="toast__description">{d}</div> })}
                            </div>
                            <button
                                class="toast__close"
                                title="Cerrar"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_dismiss_removes_only_target() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Success, "Compra creada".into(), None);
        let b = q.push(NotificationKind::Error, "Error".into(), Some("boom".into()));
        assert_ne!(a, b);

        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);
    }

    #[test]
    fn keeps_only_newest_toasts() {
        let mut q = NotificationQueue::default();
        for i in 0..8 {
            q.push(NotificationKind::Success, format!("t{}", i), None);
        }
        assert_eq!(q.items().len(), MAX_VISIBLE);
        assert_eq!(q.items()[0].title, "t3");
        assert_eq!(q.items()[MAX_VISIBLE - 1].title, "t7");
    }
}
