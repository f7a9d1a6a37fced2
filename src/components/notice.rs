use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::{
    notice::{NoticeAction, NoticeKind, NoticeState, NOTICE_DURATION_MS},
    sequence::RequestSequence,
};

/// Shows transient status messages; cloned freely into callbacks.
#[derive(Clone)]
pub struct Notifier {
    state: UseReducerHandle<NoticeState>,
    generations: RequestSequence,
    pending_hide: Rc<RefCell<Option<Timeout>>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pending_hide, &other.pending_hide) && self.state == other.state
    }
}

impl Notifier {
    pub fn show(&self, message: impl Into<String>, kind: NoticeKind) {
        if let Some(pending) = self.pending_hide.borrow_mut().take() {
            let _ = pending.cancel();
        }

        let generation = self.generations.issue();
        self.state.dispatch(NoticeAction::Show {
            generation,
            message: message.into(),
            kind,
        });

        let state = self.state.clone();
        let hide = Timeout::new(NOTICE_DURATION_MS, move || {
            state.dispatch(NoticeAction::Expire(generation));
        });
        *self.pending_hide.borrow_mut() = Some(hide);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NoticeKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NoticeKind::Error);
    }

    pub fn current(&self) -> &NoticeState {
        &self.state
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    let state = use_reducer(NoticeState::default);
    let generations = use_memo(|_| RequestSequence::new(), ());
    let pending_hide = use_mut_ref(|| None::<Timeout>);

    Notifier {
        state,
        generations: (*generations).clone(),
        pending_hide,
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notifier: Notifier,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let notice = props.notifier.current();
    if !notice.visible {
        return html! {};
    }

    let tone = match notice.kind {
        NoticeKind::Success => "bg-green-100 text-green-800 border-green-300",
        NoticeKind::Error => "bg-red-100 text-red-800 border-red-300",
    };

    html! {
        <div id="message" role="status" class={classes!(notice.kind.class(), "fixed", "top-4", "right-4", "z-50", "px-4", "py-3", "rounded-xl", "border", "shadow-lg", "text-sm", "font-medium", tone)}>
            { notice.message.clone() }
        </div>
    }
}
