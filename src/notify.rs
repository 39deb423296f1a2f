#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeJob {
    Show(NoticeId),
    Hide(NoticeId),
    Remove(NoticeId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
    pub phase: NoticePhase,
}

impl Notice {
    pub fn class(&self) -> String {
        let mut class = format!("notification {}", self.kind.as_str());
        if self.phase == NoticePhase::Shown {
            class.push_str(" show");
        }
        class
    }
}

/// Transient toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    next_id: u64,
    notices: Vec<Notice>,
}

impl Notifications {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            message: message.into(),
            phase: NoticePhase::Entering,
        });
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Applies one lifecycle step. Returns false for notices already gone.
    pub fn apply(&mut self, job: NoticeJob) -> bool {
        match job {
            NoticeJob::Show(id) => self.set_phase(id, NoticePhase::Shown),
            NoticeJob::Hide(id) => self.set_phase(id, NoticePhase::Leaving),
            NoticeJob::Remove(id) => {
                let before = self.notices.len();
                self.notices.retain(|notice| notice.id != id);
                self.notices.len() != before
            }
        }
    }

    fn set_phase(&mut self, id: NoticeId, phase: NoticePhase) -> bool {
        match self.notices.iter_mut().find(|notice| notice.id == id) {
            Some(notice) => {
                notice.phase = phase;
                true
            }
            None => false,
        }
    }
}
