use contracts::domain::a003_product::Locale;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

impl ToastSeverity {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "toast toast--success",
            ToastSeverity::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: ToastSeverity,
    pub message: String,
}

/// App-wide state: loading indicator, current toast and product locale
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub loading: RwSignal<bool>,
    pub toast: RwSignal<Option<Toast>>,
    pub locale: RwSignal<Locale>,
    next_toast_id: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(false),
            toast: RwSignal::new(None),
            locale: RwSignal::new(Locale::FR),
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn set_loading(&self, value: bool) {
        self.loading.set(value);
    }

    /// Replaces the current toast; it goes away by itself after a few seconds
    pub fn show_toast(&self, severity: ToastSeverity, message: impl Into<String>) {
        let id = self.next_toast_id.get_value() + 1;
        self.next_toast_id.set_value(id);
        self.toast.set(Some(Toast {
            id,
            severity,
            message: message.into(),
        }));

        let toast = self.toast;
        Timeout::new(TOAST_DURATION_MS, move || {
            // a newer toast keeps its own timer
            if toast.get_untracked().is_some_and(|t| t.id == id) {
                toast.set(None);
            }
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show_toast(ToastSeverity::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show_toast(ToastSeverity::Error, message);
    }

    pub fn dismiss_toast(&self) {
        self.toast.set(None);
    }

    pub fn toggle_locale(&self) {
        self.locale.update(|l| *l = l.toggled());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
