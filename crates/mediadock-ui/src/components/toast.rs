//! Toast stack for form feedback and command failures.
//!
//! At most [`MAX_VISIBLE_TOASTS`] are shown; a new toast pushes the oldest
//! out. A toast identical to one already on screen is not stacked again.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::types::Notification;

/// Toasts shown at once above the tab bar.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Put `notification` on `stack`. Returns `false` if an identical toast is
/// already visible.
fn stack_toast(stack: &mut Vec<Notification>, notification: Notification) -> bool {
    let duplicate = stack.iter().any(|shown| {
        shown.notification_type == notification.notification_type
            && shown.message == notification.message
    });
    if duplicate {
        return false;
    }

    stack.push(notification);
    let overflow = stack.len().saturating_sub(MAX_VISIBLE_TOASTS);
    stack.drain(..overflow);
    true
}

/// Shared toast stack.
#[derive(Clone, Copy)]
pub struct NotificationContext {
    /// Visible toasts, oldest first.
    pub notifications: ReadSignal<Vec<Notification>>,
    set_notifications: WriteSignal<Vec<Notification>>,
}

impl NotificationContext {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        let (notifications, set_notifications) = signal::<Vec<Notification>>(vec![]);
        Self {
            notifications,
            set_notifications,
        }
    }

    /// Show a toast and schedule its auto-dismiss.
    pub fn push(&self, notification: Notification) {
        let id = notification.id;
        let duration_ms = notification.duration_ms;

        let stacked = self
            .set_notifications
            .try_update(|stack| stack_toast(stack, notification))
            .unwrap_or(false);

        if let (true, Some(duration)) = (stacked, duration_ms) {
            let ctx = *self;
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration as u32).await;
                ctx.dismiss(id);
            });
        }
    }

    /// Remove a toast by ID.
    pub fn dismiss(&self, id: u64) {
        self.set_notifications.update(|stack| stack.retain(|n| n.id != id));
    }

    /// Show a success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    /// Show a warning toast.
    pub fn warning(&self, message: impl Into<String>) {
        self.push(Notification::warning(message));
    }

    /// Show an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }
}

impl Default for NotificationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Visible toasts, pinned above the tab bar.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let ctx = expect_context::<NotificationContext>();

    view! {
        <div class="toast-container" data-testid="toast-container">
            <For
                each=move || ctx.notifications.get()
                key=|notification| notification.id
                children=move |notification| view! { <Toast notification=notification /> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification) -> impl IntoView {
    let ctx = expect_context::<NotificationContext>();
    let id = notification.id;
    let kind = notification.notification_type;

    view! {
        <div
            class=format!("toast toast-{kind}")
            role="alert"
            aria-live="polite"
            data-testid="toast"
            data-toast-type=kind.to_string()
        >
            <svg class="toast-icon" viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                <path d=kind.icon_path() />
            </svg>
            <span class="toast-message">{notification.message}</span>
            <button
                class="toast-dismiss"
                on:click=move |_| ctx.dismiss(id)
                aria-label="Dismiss notification"
            >
                "\u{2715}"
            </button>
        </div>
    }
}

/// Provides the toast stack to `children` and renders it after them.
#[component]
pub fn NotificationProvider(
    /// Screens that raise toasts.
    children: Children,
) -> impl IntoView {
    provide_context(NotificationContext::new());

    view! {
        {children()}
        <ToastContainer />
    }
}

/// Hook to access the toast stack.
///
/// # Panics
/// Panics if called outside of a `NotificationProvider`.
pub fn use_notifications() -> NotificationContext {
    expect_context::<NotificationContext>()
}
