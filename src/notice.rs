use std::rc::Rc;

use yew::functional::Reducible;

/// How long a notice stays on screen.
pub const NOTICE_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "message success",
            NoticeKind::Error => "message error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeState {
    pub message: String,
    pub kind: NoticeKind,
    pub visible: bool,
    generation: u64,
}

pub enum NoticeAction {
    Show {
        generation: u64,
        message: String,
        kind: NoticeKind,
    },
    /// Hide the notice shown with this generation, if it is still the current one.
    Expire(u64),
}

impl NoticeState {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Reducible for NoticeState {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NoticeAction::Show {
                generation,
                message,
                kind,
            } => Rc::new(NoticeState {
                message,
                kind,
                visible: true,
                generation,
            }),
            NoticeAction::Expire(generation) if generation == self.generation && self.visible => {
                Rc::new(NoticeState {
                    visible: false,
                    ..(*self).clone()
                })
            }
            NoticeAction::Expire(_) => self,
        }
    }
}
