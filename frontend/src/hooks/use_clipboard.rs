use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::clipboard;
use crate::services::logging::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown after a copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn copied() -> Self {
        Self {
            kind: NoticeKind::Success,
            message: "コピーしました".to_string(),
        }
    }

    pub fn failed(error: &clipboard::ClipboardError) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: format!("コピーできませんでした（{}）", error),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice success",
            NoticeKind::Error => "notice error",
        }
    }
}

pub struct UseClipboardResult {
    pub notice: Option<Notice>,
    pub copy: Callback<String>,
}

/// Copy text to the clipboard and report the outcome as a [`Notice`] that
/// clears itself after `notice_timeout_ms`.
#[hook]
pub fn use_clipboard(notice_timeout_ms: u32) -> UseClipboardResult {
    let notice = use_state(|| Option::<Notice>::None);
    // Bumped on every copy so an older timer cannot clear a newer notice.
    let generation = use_mut_ref(|| 0u32);

    let copy = {
        let notice = notice.clone();
        let generation = generation.clone();
        use_callback(notice_timeout_ms, move |text: String, timeout_ms| {
            let notice = notice.clone();
            let generation = generation.clone();
            let timeout_ms = *timeout_ms;

            let current = {
                let mut counter = generation.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };

            spawn_local(async move {
                match clipboard::write_text(&text).await {
                    Ok(()) => {
                        Logger::info_with_component(
                            "use_clipboard",
                            &format!("Copied {} characters", text.chars().count()),
                        );
                        notice.set(Some(Notice::copied()));
                    }
                    Err(e) => {
                        Logger::warn_with_component("use_clipboard", &format!("Copy failed: {}", e));
                        notice.set(Some(Notice::failed(&e)));
                    }
                }

                TimeoutFuture::new(timeout_ms).await;
                if *generation.borrow() == current {
                    notice.set(None);
                }
            });
        })
    };

    UseClipboardResult {
        notice: (*notice).clone(),
        copy,
    }
}
