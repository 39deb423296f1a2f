//! The page's whole interactive state, owned by one object.
//!
//! The browser layer feeds [`PageEvent`]s into [`Page::handle`], keeps
//! [`Page::advance_to`] called as time passes, and renders from the
//! accessors. Side effects that live outside the rendered tree (the
//! `data-theme` attribute, window scrolling, the body scroll lock) are
//! published to subscribers as [`PageEffect`]s.

use std::cell::RefCell;

use serde_json::json;
use thiserror::Error;
use url::Url;

use crate::config::{MotionConfig, SiteConfig};
use crate::contact::{deliver, ContactError, ContactField, ContactForm, ContactSubmission, ContactTransport};
use crate::content::{PanelStyle, SiteContent};
use crate::counter::{CounterId, CounterStart, CounterStep, CounterTask};
use crate::filter::ProjectFilter;
use crate::notify::{NoticeId, NoticeJob, NoticeKind, Notifications};
use crate::reveal::{GroupId, IntersectionSample, RevealGroup, RevealJob, RevealPlan, RevealTrigger};
use crate::scroll::{self, HeroContentStyle, ScrollMetrics, SectionOffset, Tilt};
use crate::tabs::{PanelEntry, PanelError, PanelSwitcher};
use crate::telemetry::Logger;
use crate::theme::{persist_theme, resolve_theme, PreferenceStore, Theme};
use crate::timeline::{Millis, Timeline};
use crate::typewriter::{TypeSpeeds, Typewriter, TypewriterError};

pub const HERO_GROUP: &str = "hero";
pub const ABOUT_GROUP: &str = "about";
pub const SKILLS_GROUP: &str = "skills";
pub const PROJECTS_GROUP: &str = "projects";
pub const CONTACT_GROUP: &str = "contact";

pub fn panel_group_key(panel_id: &str) -> String {
    format!("panel-{panel_id}")
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Typewriter(#[from] TypewriterError),
    #[error(transparent)]
    Panels(#[from] PanelError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Job {
    Typewriter,
    Counter(CounterId),
    Reveal(RevealJob),
    AnimatePanel(GroupId),
    Notice(NoticeJob),
    ResetFilterDelays,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    Loaded,
    ThemeToggled,
    Scrolled {
        metrics: ScrollMetrics,
        sections: Vec<SectionOffset>,
    },
    Intersection {
        group: GroupId,
        sample: IntersectionSample,
    },
    TabSelected(String),
    FilterSelected(String),
    MenuToggled,
    MenuLinkClicked,
    AnchorClicked {
        element_top: f64,
        page_y_offset: f64,
    },
    CardPointerMoved {
        card: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    CardPointerLeft {
        card: usize,
    },
    FieldEdited {
        field: ContactField,
        value: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEffect {
    ApplyTheme(Theme),
    ScrollTo(f64),
    LockScroll(bool),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub loaded: bool,
    pub scrolled: bool,
    pub menu_open: bool,
    pub active_section: Option<String>,
}

type EffectHandler = Box<dyn FnMut(&PageEffect)>;

pub struct Page<S> {
    config: SiteConfig,
    logger: Logger,
    store: S,
    theme: Theme,
    timeline: Timeline<Job>,
    typewriter: Typewriter,
    counters: Vec<CounterTask>,
    reveal: RevealTrigger,
    panels: PanelSwitcher,
    filter: ProjectFilter,
    tilts: Vec<Tilt>,
    nav: NavState,
    hero_content: HeroContentStyle,
    grid_translate_y: f64,
    scroll_progress: f64,
    notifications: Notifications,
    contact: ContactForm,
    subscribers: Vec<EffectHandler>,
}

impl<S: PreferenceStore> Page<S> {
    pub fn new(config: SiteConfig, store: S, content: &SiteContent) -> Result<Self, PageError> {
        let motion = config.motion;
        let logger = Logger::new(config.log_level);
        let theme = resolve_theme(&store);

        let typewriter = Typewriter::new(
            content.phrases.iter().map(|phrase| phrase.to_string()).collect(),
            TypeSpeeds::from_motion(&motion),
        )?;

        let counters: Vec<CounterTask> = content
            .stats
            .iter()
            .map(|stat| CounterTask::new(stat.count))
            .collect();

        let mut reveal = RevealTrigger::new();
        reveal.observe(
            RevealGroup::new(HERO_GROUP).with_counters((0..counters.len()).map(CounterId)),
        );
        reveal.observe(
            RevealGroup::new(ABOUT_GROUP).with_bars(content.skill_bars.iter().map(|skill| skill.progress)),
        );
        for key in [SKILLS_GROUP, PROJECTS_GROUP, CONTACT_GROUP] {
            reveal.observe(RevealGroup::new(key));
        }

        let panel_entries: Vec<PanelEntry> = content
            .panels
            .iter()
            .map(|panel| {
                let targets = panel.skills.iter().map(|skill| skill.progress);
                let group = RevealGroup::new(panel_group_key(panel.id));
                let group = match panel.style {
                    PanelStyle::Rings => group.with_rings(targets),
                    PanelStyle::Meters => group.with_meters(targets),
                };
                PanelEntry {
                    id: panel.id.to_string(),
                    group: reveal.observe(group),
                }
            })
            .collect();
        let panels = PanelSwitcher::new(panel_entries, content.initial_panel)?;

        let filter = ProjectFilter::new(
            content.filters.iter().map(|button| button.id.to_string()).collect(),
            content.projects.iter().map(|project| project.category.to_string()).collect(),
        );

        let contact = ContactForm::new(
            content.submit_label,
            content
                .hidden_fields
                .iter()
                .map(|field| (field.name.to_string(), field.value.to_string()))
                .collect(),
        );

        Ok(Self {
            config,
            logger,
            store,
            theme,
            timeline: Timeline::new(),
            typewriter,
            counters,
            reveal,
            panels,
            filter,
            tilts: vec![Tilt::rest(); content.projects.len()],
            nav: NavState::default(),
            hero_content: HeroContentStyle::default(),
            grid_translate_y: 0.0,
            scroll_progress: 0.0,
            notifications: Notifications::default(),
            contact,
            subscribers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&PageEffect) + 'static) {
        self.subscribers.push(Box::new(handler));
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.timeline.next_due()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn typewriter_text(&self) -> &str {
        self.typewriter.text()
    }

    pub fn counters(&self) -> &[CounterTask] {
        &self.counters
    }

    pub fn reveal(&self) -> &RevealTrigger {
        &self.reveal
    }

    pub fn group_id(&self, key: &str) -> Option<GroupId> {
        self.reveal.find(key)
    }

    pub fn panels(&self) -> &PanelSwitcher {
        &self.panels
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn card_tilt(&self, card: usize) -> Tilt {
        self.tilts.get(card).copied().unwrap_or_default()
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn hero_content(&self) -> HeroContentStyle {
        self.hero_content
    }

    pub fn grid_translate_y(&self) -> f64 {
        self.grid_translate_y
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_endpoint(&self) -> &Url {
        &self.config.contact_endpoint
    }

    /// Runs every job due at or before `now`, in due order, then moves the
    /// clock to `now`. Returns how many jobs ran.
    pub fn advance_to(&mut self, now: Millis) -> usize {
        let mut ran = 0;
        while let Some(job) = self.timeline.pop_due(now) {
            self.run_job(job);
            ran += 1;
        }
        self.timeline.advance_clock(now);
        ran
    }

    pub fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::Loaded => self.on_loaded(),
            PageEvent::ThemeToggled => self.toggle_theme(),
            PageEvent::Scrolled { metrics, sections } => self.on_scrolled(metrics, &sections),
            PageEvent::Intersection { group, sample } => {
                if let Some(plan) = self.reveal.intersect(group, sample, &self.config.motion) {
                    self.log_reveal(group, Some(sample.ratio));
                    self.run_plan(plan);
                }
            }
            PageEvent::TabSelected(id) => self.select_panel(&id),
            PageEvent::FilterSelected(id) => self.select_filter(&id),
            PageEvent::MenuToggled => {
                self.nav.menu_open = !self.nav.menu_open;
                let open = self.nav.menu_open;
                self.emit(PageEffect::LockScroll(open));
            }
            PageEvent::MenuLinkClicked => {
                if self.nav.menu_open {
                    self.nav.menu_open = false;
                    self.emit(PageEffect::LockScroll(false));
                }
            }
            PageEvent::AnchorClicked {
                element_top,
                page_y_offset,
            } => {
                let target = scroll::anchor_scroll_target(element_top, page_y_offset);
                self.emit(PageEffect::ScrollTo(target));
            }
            PageEvent::CardPointerMoved {
                card,
                x,
                y,
                width,
                height,
            } => self.set_tilt(card, Tilt::from_pointer(x, y, width, height)),
            PageEvent::CardPointerLeft { card } => self.set_tilt(card, Tilt::rest()),
            PageEvent::FieldEdited { field, value } => self.contact.set_field(field, value),
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, message: &str) -> NoticeId {
        let id = self.notifications.push(kind, message);
        let motion = self.config.motion;
        self.timeline
            .rearm(Job::Notice(NoticeJob::Show(id)), motion.toast_enter_ms);
        self.timeline
            .rearm(Job::Notice(NoticeJob::Hide(id)), motion.toast_visible_ms);
        self.logger.debug(
            "notice_shown",
            json!({ "kind": kind.as_str(), "message": message }),
        );
        id
    }

    /// Validates the form and switches it into its sending state. Returns
    /// `None` (after toasting when appropriate) if nothing should be sent.
    pub fn begin_contact_submit(&mut self) -> Option<ContactSubmission> {
        match self.contact.begin_submit() {
            Ok(submission) => {
                self.logger.info("contact_submit_started", json!({}));
                Some(submission)
            }
            Err(err) => {
                self.logger
                    .info("contact_submit_rejected", json!({ "reason": err.to_string() }));
                if let Some(message) = err.user_message() {
                    self.notify(NoticeKind::Error, message);
                }
                None
            }
        }
    }

    pub fn finish_contact_submit(&mut self, result: Result<(), ContactError>) {
        let (kind, message) = self.contact.finish_submit(&result);

        match &result {
            Ok(()) => self.logger.info("contact_submit_sent", json!({})),
            Err(err) => self
                .logger
                .warn("contact_submit_failed", json!({ "error": err.to_string() })),
        }

        self.notify(kind, message);
    }

    fn emit(&mut self, effect: PageEffect) {
        for handler in &mut self.subscribers {
            handler(&effect);
        }
    }

    fn on_loaded(&mut self) {
        if self.nav.loaded {
            return;
        }
        self.nav.loaded = true;

        let theme = self.theme;
        self.emit(PageEffect::ApplyTheme(theme));

        let motion = self.config.motion;
        self.timeline
            .rearm(Job::Typewriter, motion.typewriter_start_delay_ms);
        self.timeline.rearm(
            Job::AnimatePanel(self.panels.active().group),
            motion.initial_panel_delay_ms,
        );

        self.logger.info(
            "page_loaded",
            json!({
                "theme": theme.as_str(),
                "panel": self.panels.active().id,
                "at_ms": self.timeline.now(),
            }),
        );
    }

    fn toggle_theme(&mut self) {
        let next = self.theme.toggled();

        if let Err(err) = persist_theme(&mut self.store, next) {
            self.logger
                .warn("theme_persist_failed", json!({ "error": err.to_string() }));
        }

        self.theme = next;
        self.emit(PageEffect::ApplyTheme(next));
        self.logger
            .debug("theme_toggled", json!({ "theme": next.as_str() }));
    }

    fn on_scrolled(&mut self, metrics: ScrollMetrics, sections: &[SectionOffset]) {
        self.nav.scrolled = scroll::navbar_scrolled(metrics.scroll_y);
        self.nav.active_section =
            scroll::active_section(sections, metrics.scroll_y).map(ToString::to_string);

        let parallax = scroll::parallax(metrics);
        if let Some(content) = parallax.content {
            self.hero_content = content;
        }
        self.grid_translate_y = parallax.grid_translate_y;
        self.scroll_progress = scroll::scroll_progress(metrics);
    }

    fn select_panel(&mut self, id: &str) {
        let Some(switch) = self.panels.select(id) else {
            self.logger.debug("panel_unknown", json!({ "panel": id }));
            return;
        };

        self.timeline
            .cancel_matching(|job| matches!(job, Job::AnimatePanel(_)));
        self.animate_panel(switch.group);

        self.logger.info(
            "panel_selected",
            json!({ "panel": id, "previous": self.panels.panels()[switch.previous].id }),
        );
    }

    /// Forced re-run: drops the group's pending fills so an older run cannot
    /// land on top of the new one.
    fn animate_panel(&mut self, group: GroupId) {
        self.timeline
            .cancel_matching(|job| matches!(job, Job::Reveal(reveal) if reveal.group() == group));

        if let Some(plan) = self.reveal.force(group, &self.config.motion) {
            self.log_reveal(group, None);
            self.run_plan(plan);
        }
    }

    fn select_filter(&mut self, id: &str) {
        let motion = self.config.motion;

        match self.filter.select(id, motion.filter_card_stagger_secs) {
            Some(outcome) => {
                self.timeline
                    .rearm(Job::ResetFilterDelays, motion.filter_delay_reset_ms);
                self.logger.debug(
                    "filter_selected",
                    json!({ "filter": id, "visible": outcome.visible_count }),
                );
            }
            None => self.logger.debug("filter_unknown", json!({ "filter": id })),
        }
    }

    fn set_tilt(&mut self, card: usize, tilt: Tilt) {
        if !self.filter.is_card_visible(card) {
            return;
        }
        if let Some(slot) = self.tilts.get_mut(card) {
            *slot = tilt;
        }
    }

    fn run_plan(&mut self, plan: RevealPlan) {
        for (job, delay) in plan.jobs {
            self.timeline.rearm(Job::Reveal(job), delay);
        }
        for counter in plan.counters {
            self.start_counter(counter);
        }
    }

    fn start_counter(&mut self, id: CounterId) {
        let motion = self.config.motion;
        let Some(counter) = self.counters.get_mut(id.0) else {
            return;
        };

        if counter.start(motion.counter_duration_ms, motion.counter_tick_ms) == CounterStart::Started {
            self.timeline
                .rearm(Job::Counter(id), motion.counter_tick_ms.max(1));
        }
    }

    fn run_job(&mut self, job: Job) {
        let motion: MotionConfig = self.config.motion;

        match job {
            Job::Typewriter => {
                let delay = self.typewriter.tick();
                self.timeline.rearm(Job::Typewriter, delay.max(1));
            }
            Job::Counter(id) => {
                let step = self
                    .counters
                    .get_mut(id.0)
                    .map_or(CounterStep::Done, CounterTask::tick);
                if step == CounterStep::Continue {
                    self.timeline
                        .rearm(Job::Counter(id), motion.counter_tick_ms.max(1));
                }
            }
            Job::Reveal(reveal) => {
                self.reveal.apply(reveal);
                if let RevealJob::FillBar { group, index } = reveal {
                    self.timeline.rearm(
                        Job::Reveal(RevealJob::SettleBar { group, index }),
                        motion.bar_settle_ms,
                    );
                }
            }
            Job::AnimatePanel(group) => self.animate_panel(group),
            Job::Notice(notice) => {
                if self.notifications.apply(notice) {
                    if let NoticeJob::Hide(id) = notice {
                        self.timeline
                            .rearm(Job::Notice(NoticeJob::Remove(id)), motion.toast_exit_ms);
                    }
                }
            }
            Job::ResetFilterDelays => self.filter.clear_transition_delays(),
        }
    }

    /// `ratio` is the intersection ratio that triggered the reveal; `None`
    /// for a forced re-run.
    fn log_reveal(&self, group: GroupId, ratio: Option<f64>) {
        if let Some(revealed) = self.reveal.group(group) {
            self.logger.debug(
                "group_revealed",
                json!({ "group": revealed.key, "forced": ratio.is_none(), "ratio": ratio }),
            );
        }
    }
}

/// The full contact flow: validate, POST once, then restore the form and
/// toast the outcome. The page is never borrowed across the network await.
/// `sending` runs once the button shows its sending state, before the
/// request goes out. Returns `None` when validation stopped the submission.
pub async fn send_contact<S, T>(
    page: &RefCell<Page<S>>,
    transport: &T,
    sending: impl FnOnce(),
) -> Option<Result<(), ContactError>>
where
    S: PreferenceStore,
    T: ContactTransport,
{
    let (submission, endpoint) = {
        let mut page = page.borrow_mut();
        let submission = page.begin_contact_submit()?;
        (submission, page.contact_endpoint().clone())
    };
    sending();

    let result = deliver(transport, &endpoint, &submission).await;
    page.borrow_mut().finish_contact_submit(result.clone());
    Some(result)
}
