use gloo_timers::callback::Timeout;
use leptos::*;

const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Default, Debug)]
struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    fn push(&mut self, title: String, description: String, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            title,
            description,
            variant,
        });
        self.next_id
    }

    fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Notification queue provided at the app root.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title.into(), description.into(), ToastVariant::Default);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title.into(), description.into(), ToastVariant::Destructive);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, title: String, description: String, variant: ToastVariant) {
        let Some(id) = self.queue.try_update(|q| q.push(title, description, variant)) else {
            return;
        };
        let queue = self.queue;
        Timeout::new(TOAST_DURATION_MS, move || {
            queue.update(|q| q.dismiss(id));
        })
        .forget();
    }

    fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts.clone())
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toaster() {
    provide_context(Toaster::new());
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the active toasts; mount once near the root.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast-destructive",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <div class="toast-title">{toast.title}</div>
                            <div class="toast-description">{toast.description}</div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>
                                "×"
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
    fn test_queue_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push("a".into(), "".into(), ToastVariant::Default);
        let second = queue.push("b".into(), "".into(), ToastVariant::Destructive);
        assert!(second > first);
        assert_eq!(queue.toasts.len(), 2);
    }

    #[test]
    fn test_queue_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let first = queue.push("a".into(), "".into(), ToastVariant::Default);
        queue.push("b".into(), "".into(), ToastVariant::Default);
        queue.dismiss(first);
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].title, "b");
    }
}
