use gloo_events::EventListener;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use portfolio_site::config::SiteConfig;
use portfolio_site::contact::{ContactError, ContactField, ContactSubmission, ContactTransport};
use portfolio_site::content::{PanelStyle, SiteContent, SITE};
use portfolio_site::page::{
    panel_group_key, send_contact, Page, PageEffect, PageEvent, ABOUT_GROUP, CONTACT_GROUP,
    HERO_GROUP, PROJECTS_GROUP, SKILLS_GROUP,
};
use portfolio_site::reveal::{ring_circumference, GroupId, IntersectionSample};
use portfolio_site::scroll::{ScrollMetrics, SectionOffset};
use portfolio_site::telemetry::Logger;
use portfolio_site::theme::{PreferenceStore, StoreError, Theme};
use portfolio_site::timeline::Millis;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use url::Url;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Element, FormData, HtmlElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollToOptions, Storage, SubmitEvent,
};
use yew::prelude::*;

const REVEAL_ATTR: &str = "data-reveal-group";
const MENU_OPEN_CLASS: &str = "menu-open";

type SharedPage = Rc<RefCell<Page<LocalStore>>>;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

struct LocalStore;

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Rejected(format!("{err:?}")))
    }
}

fn applied_theme() -> Option<Theme> {
    let root = window()?.document()?.document_element()?;
    Theme::parse(&root.get_attribute("data-theme")?)
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if applied_theme() == Some(theme) {
        return;
    }

    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || {
        apply_theme(theme);
    });

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let _ = if enabled {
        body.class_list().add_1(class)
    } else {
        body.class_list().remove_1(class)
    };
}

fn scroll_window_to(top: f64) {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

fn apply_effect(effect: &PageEffect) {
    match *effect {
        PageEffect::ApplyTheme(theme) => apply_theme_with_transition(theme),
        PageEffect::ScrollTo(top) => scroll_window_to(top),
        PageEffect::LockScroll(locked) => set_body_class(MENU_OPEN_CLASS, locked),
    }
}

fn now_ms() -> Millis {
    window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now().max(0.0) as Millis)
        .unwrap_or(0)
}

fn scroll_metrics() -> ScrollMetrics {
    let Some(win) = window() else {
        return ScrollMetrics::default();
    };

    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);
    let document_height = win
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);

    ScrollMetrics {
        scroll_y,
        viewport_height,
        document_height,
    }
}

fn section_offsets(content: &SiteContent) -> Vec<SectionOffset> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    content
        .nav
        .iter()
        .filter_map(|link| {
            let element = document
                .get_element_by_id(link.id)?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionOffset {
                id: link.id.to_string(),
                top: f64::from(element.offset_top()),
            })
        })
        .collect()
}

fn scrolled_event() -> PageEvent {
    PageEvent::Scrolled {
        metrics: scroll_metrics(),
        sections: section_offsets(&SITE),
    }
}

fn anchor_event(id: &str) -> Option<PageEvent> {
    let win = window()?;
    let target = win.document()?.get_element_by_id(id)?;

    Some(PageEvent::AnchorClicked {
        element_top: target.get_bounding_client_rect().top(),
        page_y_offset: win.page_y_offset().unwrap_or(0.0),
    })
}

struct FetchTransport;

impl ContactTransport for FetchTransport {
    async fn post(&self, endpoint: &Url, submission: &ContactSubmission) -> Result<u16, ContactError> {
        let form_data =
            FormData::new().map_err(|err| ContactError::Transport(format!("{err:?}")))?;
        for (name, value) in submission.form_fields() {
            form_data
                .append_with_str(name, value)
                .map_err(|err| ContactError::Transport(format!("{err:?}")))?;
        }

        let request = Request::post(endpoint.as_str())
            .header("Accept", "application/json")
            .body(form_data)
            .map_err(|err| ContactError::Transport(err.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|err| ContactError::Transport(err.to_string()))?;

        Ok(response.status())
    }
}

/// Feeds events and elapsed time into the page and keeps exactly one
/// browser timeout armed for the page's next due job.
#[derive(Clone)]
struct Driver {
    page: SharedPage,
    timer: Rc<RefCell<Option<Timeout>>>,
    rerender: Callback<()>,
}

impl Driver {
    fn dispatch(&self, event: PageEvent) {
        {
            let mut page = self.page.borrow_mut();
            page.advance_to(now_ms());
            page.handle(event);
        }
        self.rerender.emit(());
        self.arm();
    }

    fn tick(&self) {
        self.page.borrow_mut().advance_to(now_ms());
        self.rerender.emit(());
        self.arm();
    }

    fn arm(&self) {
        let next_due = self.page.borrow().next_due();
        let replaced = match next_due {
            Some(due) => {
                let delay = due.saturating_sub(now_ms()).min(u64::from(u32::MAX)) as u32;
                let driver = self.clone();
                self.timer
                    .borrow_mut()
                    .replace(Timeout::new(delay, move || driver.tick()))
            }
            None => self.timer.borrow_mut().take(),
        };

        // The replaced timeout may be the one currently firing; drop it
        // after its callback has returned.
        if let Some(replaced) = replaced {
            spawn_local(async move { drop(replaced) });
        }
    }
}

type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_reveal_groups(driver: Driver, threshold: f64) -> Option<(IntersectionObserver, IntersectionCallback)> {
    let callback = IntersectionCallback::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let Some(group) = entry
                .target()
                .get_attribute(REVEAL_ATTR)
                .and_then(|value| value.parse::<usize>().ok())
            else {
                continue;
            };

            driver.dispatch(PageEvent::Intersection {
                group: GroupId(group),
                sample: IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                },
            });
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

    let nodes = window()?
        .document()?
        .query_selector_all(&format!("[{REVEAL_ATTR}]"))
        .ok()?;
    for index in 0..nodes.length() {
        if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }

    Some((observer, callback))
}

#[derive(Properties)]
struct AppProps {
    page: SharedPage,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.page, &other.page)
    }
}

fn reveal_attrs(page: &Page<LocalStore>, key: &str) -> (Option<String>, Option<&'static str>) {
    let Some(id) = page.group_id(key) else {
        return (None, None);
    };
    let revealed = page.reveal().group(id).is_some_and(|group| group.revealed);

    (Some(id.0.to_string()), revealed.then_some("animate"))
}

fn anchor_callback(driver: &Driver, id: &'static str, closes_menu: bool) -> Callback<MouseEvent> {
    let driver = driver.clone();
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if closes_menu {
            driver.dispatch(PageEvent::MenuLinkClicked);
        }
        if let Some(anchor) = anchor_event(id) {
            driver.dispatch(anchor);
        }
    })
}

fn render_nav(page: &Page<LocalStore>, driver: &Driver) -> Html {
    let nav = page.nav();
    let theme = page.theme();

    let on_toggle = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.dispatch(PageEvent::ThemeToggled))
    };
    let on_menu = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.dispatch(PageEvent::MenuToggled))
    };

    let link_class = |id: &str, base: &'static str| {
        classes!(base, (nav.active_section.as_deref() == Some(id)).then_some("active"))
    };

    html! {
        <>
            <nav
                id="navbar"
                class={classes!("navbar", nav.scrolled.then_some("scrolled"), nav.loaded.then_some("loaded"))}
            >
                <a class="logo" href="#home" onclick={anchor_callback(driver, "home", false)}>
                    {SITE.owner}
                </a>
                <ul class="nav-links">
                    { for SITE.nav.iter().map(|link| html! {
                        <li>
                            <a
                                class={link_class(link.id, "nav-link")}
                                href={format!("#{}", link.id)}
                                onclick={anchor_callback(driver, link.id, false)}
                            >
                                {link.label}
                            </a>
                        </li>
                    }) }
                </ul>
                <button
                    id="themeToggle"
                    class="theme-toggle"
                    type="button"
                    aria-label={theme.toggle_label()}
                    onclick={on_toggle}
                >
                    <i class={classes!("fas", theme.icon_class())} aria-hidden="true"></i>
                </button>
                <button
                    id="mobileMenuBtn"
                    class={classes!("mobile-menu-btn", nav.menu_open.then_some("active"))}
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded={nav.menu_open.to_string()}
                    onclick={on_menu}
                >
                    <span></span><span></span><span></span>
                </button>
            </nav>
            <div id="mobileMenu" class={classes!("mobile-menu", nav.menu_open.then_some("active"))}>
                { for SITE.nav.iter().map(|link| html! {
                    <a
                        class={link_class(link.id, "mobile-nav-link")}
                        href={format!("#{}", link.id)}
                        onclick={anchor_callback(driver, link.id, true)}
                    >
                        {link.label}
                    </a>
                }) }
            </div>
        </>
    }
}

fn render_hero(page: &Page<LocalStore>) -> Html {
    let (group, revealed) = reveal_attrs(page, HERO_GROUP);
    let grid_style = format!("transform: translateY({:.2}px);", page.grid_translate_y());

    html! {
        <section id="home" class={classes!("hero", revealed)} data-reveal-group={group}>
            <div class="hero-grid" style={grid_style}></div>
            <div class="hero-content" style={page.hero_content().to_css()}>
                <p class="hero-greeting">{SITE.greeting}</p>
                <h1 class="hero-name">{SITE.owner}</h1>
                <p class="hero-role">
                    <span id="typewriter" class="typewriter">{page.typewriter_text().to_string()}</span>
                    <span class="cursor" aria-hidden="true">{"|"}</span>
                </p>
                <div class="hero-stats">
                    { for SITE.stats.iter().zip(page.counters()).map(|(stat, counter)| html! {
                        <div class="stat">
                            <span class="stat-number" data-count={stat.count.to_string()}>
                                {counter.display().to_string()}
                            </span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_about(page: &Page<LocalStore>) -> Html {
    let (group, revealed) = reveal_attrs(page, ABOUT_GROUP);
    let bars = page
        .group_id(ABOUT_GROUP)
        .and_then(|id| page.reveal().group(id))
        .map(|group| group.bars.clone())
        .unwrap_or_default();

    html! {
        <section id="about" class={classes!("section", "animate-on-scroll", revealed)} data-reveal-group={group}>
            <h2 class="section-title">{"About Me"}</h2>
            <div class="skill-list">
                { for SITE.skill_bars.iter().zip(bars).map(|(skill, bar)| html! {
                    <div class={classes!("skill-item", bar.settled.then_some("animated"))}>
                        <div class="skill-info">
                            <span>{skill.name}</span>
                            <span class="skill-percent">{format!("{}%", skill.progress)}</span>
                        </div>
                        <div class="skill-bar">
                            <div
                                class="skill-progress"
                                data-progress={skill.progress.to_string()}
                                style={format!("width: {}%;", bar.width.unwrap_or(0))}
                            ></div>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn render_skills(page: &Page<LocalStore>, driver: &Driver) -> Html {
    let (group, revealed) = reveal_attrs(page, SKILLS_GROUP);
    let circumference = ring_circumference();

    html! {
        <section id="skills" class={classes!("section", "animate-on-scroll", revealed)} data-reveal-group={group}>
            <h2 class="section-title">{"Skills"}</h2>
            <div class="skill-tabs" role="tablist">
                { for SITE.panels.iter().map(|panel| {
                    let active = page.panels().is_active(panel.id);
                    let onclick = {
                        let driver = driver.clone();
                        let id = panel.id;
                        Callback::from(move |_: MouseEvent| driver.dispatch(PageEvent::TabSelected(id.to_string())))
                    };
                    html! {
                        <button
                            class={classes!("skill-tab", active.then_some("active"))}
                            type="button"
                            role="tab"
                            aria-selected={active.to_string()}
                            data-tab={panel.id}
                            {onclick}
                        >
                            {panel.label}
                        </button>
                    }
                }) }
            </div>
            { for SITE.panels.iter().map(|panel| {
                let active = page.panels().is_active(panel.id);
                let state = page
                    .group_id(&panel_group_key(panel.id))
                    .and_then(|id| page.reveal().group(id));
                let body = match panel.style {
                    PanelStyle::Rings => html! {
                        <div class="circular-skills">
                            { for panel.skills.iter().enumerate().map(|(index, skill)| {
                                let offset = state
                                    .and_then(|group| group.rings.get(index))
                                    .map_or(circumference, |ring| ring.offset);
                                html! {
                                    <div class="circular-skill" data-progress={skill.progress.to_string()}>
                                        <svg class="progress-ring" width="120" height="120" viewBox="0 0 120 120">
                                            <circle class="progress-ring-bg" cx="60" cy="60" r="54"></circle>
                                            <circle
                                                class="progress-ring-fill"
                                                cx="60"
                                                cy="60"
                                                r="54"
                                                style={format!("stroke-dasharray: {circumference:.3}; stroke-dashoffset: {offset:.3};")}
                                            ></circle>
                                        </svg>
                                        <span class="circular-label">{skill.name}</span>
                                        <span class="circular-value">{format!("{}%", skill.progress)}</span>
                                    </div>
                                }
                            }) }
                        </div>
                    },
                    PanelStyle::Meters => html! {
                        <div class="skill-meters">
                            { for panel.skills.iter().enumerate().map(|(index, skill)| {
                                let width = state
                                    .and_then(|group| group.meters.get(index))
                                    .and_then(|meter| meter.width)
                                    .unwrap_or(0);
                                html! {
                                    <div class="meter">
                                        <span class="meter-label">{skill.name}</span>
                                        <div class="meter-track">
                                            <div
                                                class="meter-fill"
                                                data-width={skill.progress.to_string()}
                                                style={format!("width: {width}%;")}
                                            ></div>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    },
                };
                html! {
                    <div id={panel.id} class={classes!("skills-panel", active.then_some("active"))} role="tabpanel">
                        {body}
                    </div>
                }
            }) }
        </section>
    }
}

fn render_projects(page: &Page<LocalStore>, driver: &Driver) -> Html {
    let (group, revealed) = reveal_attrs(page, PROJECTS_GROUP);
    let filter = page.filter();

    html! {
        <section id="projects" class={classes!("section", "animate-on-scroll", revealed)} data-reveal-group={group}>
            <h2 class="section-title">{"Projects"}</h2>
            <div class="project-filters">
                { for SITE.filters.iter().map(|button| {
                    let onclick = {
                        let driver = driver.clone();
                        let id = button.id;
                        Callback::from(move |_: MouseEvent| driver.dispatch(PageEvent::FilterSelected(id.to_string())))
                    };
                    html! {
                        <button
                            class={classes!("filter-btn", (filter.active() == Some(button.id)).then_some("active"))}
                            type="button"
                            data-filter={button.id}
                            {onclick}
                        >
                            {button.label}
                        </button>
                    }
                }) }
            </div>
            <div class="projects-grid">
                { for SITE.projects.iter().zip(filter.cards()).enumerate().map(|(index, (project, card))| {
                    let onmousemove = {
                        let driver = driver.clone();
                        Callback::from(move |event: MouseEvent| {
                            let Some(target) = event
                                .current_target()
                                .and_then(|target| target.dyn_into::<Element>().ok())
                            else {
                                return;
                            };
                            let rect = target.get_bounding_client_rect();
                            driver.dispatch(PageEvent::CardPointerMoved {
                                card: index,
                                x: f64::from(event.client_x()) - rect.left(),
                                y: f64::from(event.client_y()) - rect.top(),
                                width: rect.width(),
                                height: rect.height(),
                            });
                        })
                    };
                    let onmouseleave = {
                        let driver = driver.clone();
                        Callback::from(move |_: MouseEvent| driver.dispatch(PageEvent::CardPointerLeft { card: index }))
                    };
                    let style = format!(
                        "{} transition-delay: {}s;",
                        page.card_tilt(index).to_css(),
                        card.transition_delay_secs
                    );
                    html! {
                        <article
                            class={classes!("project-card", if card.visible { "show" } else { "hide" })}
                            data-category={project.category}
                            {style}
                            {onmousemove}
                            {onmouseleave}
                        >
                            <h3>{project.title}</h3>
                            <p>{project.summary}</p>
                            <ul class="project-tags">
                                { for project.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                            </ul>
                            <a class="project-link" href={project.href} target="_blank" rel="noopener noreferrer">
                                {"View project"}
                            </a>
                        </article>
                    }
                }) }
            </div>
            <p id="noResults" class={classes!("no-results", filter.no_results().then_some("show"))}>
                {"No projects match this filter yet."}
            </p>
        </section>
    }
}

fn field_callback(driver: &Driver, field: ContactField) -> Callback<InputEvent> {
    let driver = driver.clone();
    Callback::from(move |event: InputEvent| {
        let value = match field {
            ContactField::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
            _ => event.target_unchecked_into::<HtmlInputElement>().value(),
        };
        driver.dispatch(PageEvent::FieldEdited { field, value });
    })
}

fn render_contact(page: &Page<LocalStore>, driver: &Driver) -> Html {
    let (group, revealed) = reveal_attrs(page, CONTACT_GROUP);
    let form = page.contact();
    let fields = form.fields();
    let button = form.button();

    let onsubmit = {
        let driver = driver.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let driver = driver.clone();
            spawn_local(async move {
                let rerender = driver.rerender.clone();
                send_contact(&*driver.page, &FetchTransport, move || rerender.emit(())).await;
                driver.tick();
            });
        })
    };

    html! {
        <section id="contact" class={classes!("section", "animate-on-scroll", revealed)} data-reveal-group={group}>
            <h2 class="section-title">{"Get In Touch"}</h2>
            <form id="contactForm" class="contact-form" {onsubmit} novalidate="novalidate">
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    value={fields.name.clone()}
                    oninput={field_callback(driver, ContactField::Name)}
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    value={fields.email.clone()}
                    oninput={field_callback(driver, ContactField::Email)}
                />
                <textarea
                    name="message"
                    placeholder="Your Message"
                    rows="5"
                    value={fields.message.clone()}
                    oninput={field_callback(driver, ContactField::Message)}
                />
                <button type="submit" class="btn btn-primary" disabled={button.disabled}>
                    if form.is_sending() {
                        <>
                            <i class="fas fa-spinner fa-spin" aria-hidden="true"></i>
                            {" "}
                        </>
                    }
                    {button.label.clone()}
                </button>
            </form>
            <p class="contact-direct">
                {"Or email me directly at "}
                <a href={format!("mailto:{}", SITE.email)}>{SITE.email}</a>
            </p>
        </section>
    }
}

fn render_notifications(page: &Page<LocalStore>) -> Html {
    html! {
        <div class="notification-stack" aria-live="polite">
            { for page.notifications().iter().map(|notice| html! {
                <div class={notice.class()}>
                    <i class={classes!("fas", notice.kind.icon_class())} aria-hidden="true"></i>
                    <span>{notice.message.clone()}</span>
                </div>
            }) }
        </div>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let force_update = use_force_update();
    let timer = use_mut_ref(|| None::<Timeout>);

    let driver = Driver {
        page: props.page.clone(),
        timer,
        rerender: Callback::from(move |_: ()| force_update.force_update()),
    };

    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            let threshold = {
                let mut page = driver.page.borrow_mut();
                page.subscribe(apply_effect);
                page.config().motion.reveal_threshold
            };

            driver.dispatch(PageEvent::Loaded);
            driver.dispatch(scrolled_event());

            let window_listeners: Vec<EventListener> = window()
                .map(|win| {
                    ["scroll", "resize"]
                        .into_iter()
                        .map(|kind| {
                            let driver = driver.clone();
                            EventListener::new(&win, kind, move |_| driver.dispatch(scrolled_event()))
                        })
                        .collect()
                })
                .unwrap_or_default();
            let observer = observe_reveal_groups(driver.clone(), threshold);

            move || {
                drop(window_listeners);
                if let Some((observer, callback)) = observer {
                    observer.disconnect();
                    drop(callback);
                }
                driver.timer.borrow_mut().take();
            }
        });
    }

    let page = props.page.borrow();
    let progress_style = format!("width: {:.2}%;", page.scroll_progress());

    html! {
        <>
            <a class="skip-link" href="#about">{"Skip to main content"}</a>
            <div class="scroll-progress" style={progress_style}></div>
            {render_nav(&page, &driver)}
            <main id="content">
                {render_hero(&page)}
                {render_about(&page)}
                {render_skills(&page, &driver)}
                {render_projects(&page, &driver)}
                {render_contact(&page, &driver)}
            </main>
            <footer class="footer">
                <p>{format!("© {} · Built with Rust and Yew", SITE.owner)}</p>
            </footer>
            {render_notifications(&page)}
        </>
    }
}

pub fn run() {
    let config = SiteConfig::from_build_env();
    let logger = Logger::new(config.log_level);

    let page = match Page::new(config, LocalStore, &SITE) {
        Ok(page) => page,
        Err(err) => {
            logger.warn("page_init_failed", json!({ "error": err.to_string() }));
            return;
        }
    };
    apply_theme(page.theme());

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            page: Rc::new(RefCell::new(page)),
        },
    )
    .render();
}
