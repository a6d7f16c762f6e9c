use dioxus::prelude::*;
use profilecard_core::{CardEvent, SkillNotice, Theme};

use crate::components::{Toast, TOAST_DURATION};
use crate::context::{get_launch_config, open_store};
use crate::pages::ProfilePage;
use crate::theme::{theme_script, GLOBAL_STYLES};

/// Apply or remove the document-level dark mode marker.
fn apply_theme(theme: Theme) {
    tracing::debug!(%theme, "applying document theme");
    let _ = document::eval(&theme_script(theme));
}

/// Root application component.
///
/// Provides global styles and the preference store, and carries out the
/// effects the profile card asks for.
#[component]
pub fn App() -> Element {
    let launch = use_hook(get_launch_config);
    use_context_provider(|| open_store(&launch));

    // Current toast and a sequence number so stale timers don't clear newer toasts
    let mut toast: Signal<Option<(u64, SkillNotice)>> = use_signal(|| None);
    let mut toast_seq = use_signal(|| 0u64);

    let on_card_event = move |event: CardEvent| match event {
        CardEvent::ThemeChanged(theme) => apply_theme(theme),
        CardEvent::SkillNoticed(notice) => {
            let id = toast_seq() + 1;
            toast_seq.set(id);
            toast.set(Some((id, notice)));

            spawn(async move {
                tokio::time::sleep(TOAST_DURATION).await;
                let current = toast.peek().as_ref().map(|(seq, _)| *seq);
                if current == Some(id) {
                    toast.set(None);
                }
            });
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        ProfilePage {
            profile: launch.profile.clone(),
            on_event: on_card_event,
        }
        if let Some((_, notice)) = toast() {
            Toast {
                message: notice.to_string(),
                on_dismiss: move |_| toast.set(None),
            }
        }
    }
}
