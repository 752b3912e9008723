use yew::prelude::*;

use crate::catalog::{CERTIFICATIONS, EDUCATION, EXPERIENCE, PROFILE, PROJECTS, SKILLS};
use crate::content::{select, Bundle, Project, Section, SkillGroup};
use crate::host;
use crate::preferences::{Language, Preferences, SharedStore};
use crate::reveal::{RevealOptions, REVEAL_CLASS};

/// Smooth-scrolls to one of the fixed section anchors. Unknown ids do nothing.
pub fn scroll_to_section(id: &str) -> bool {
    Section::from_id(id).is_some_and(host::scroll_into_view)
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    hint: AttrValue,
    children: Html,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.children.clone()}
            if !props.hint.is_empty() {
                <span class="sr-only">{props.hint.clone()}</span>
            }
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct PreferenceTogglesProps {
    copy: &'static Bundle,
    prefs: Preferences,
    on_toggle_language: Callback<MouseEvent>,
    on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(PreferenceToggles)]
fn preference_toggles(props: &PreferenceTogglesProps) -> Html {
    html! {
        <>
            <button
                class="language-toggle"
                type="button"
                title={props.copy.toggle_language}
                aria-label={props.copy.toggle_language}
                onclick={props.on_toggle_language.clone()}
            >
                {props.prefs.language.badge()}
            </button>
            <button
                class="theme-toggle"
                type="button"
                title={props.copy.toggle_theme}
                aria-label={props.copy.toggle_theme}
                aria-pressed={props.prefs.theme.is_dark().to_string()}
                onclick={props.on_toggle_theme.clone()}
            >
                <span aria-hidden="true">{props.prefs.theme.toggle_icon()}</span>
            </button>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    copy: &'static Bundle,
    prefs: Preferences,
    menu_open: bool,
    on_navigate: Callback<&'static str>,
    on_toggle_language: Callback<MouseEvent>,
    on_toggle_theme: Callback<MouseEvent>,
    on_toggle_menu: Callback<MouseEvent>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let nav_button = |section: Section, class: &'static str, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        html! {
            <button
                key={section.id()}
                class={class}
                type="button"
                data-target={section.id()}
                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section.id()))}
            >
                {label}
            </button>
        }
    };

    let menu_icon = if props.menu_open { "✕" } else { "☰" };

    html! {
        <nav class="site-nav">
            <div class="nav-inner">
                <div class="nav-links">
                    { for Section::ALL.into_iter().map(|section| nav_button(section, "nav-link", section.label(props.copy))) }
                </div>
                <div class="nav-actions">
                    <PreferenceToggles
                        copy={props.copy}
                        prefs={props.prefs}
                        on_toggle_language={props.on_toggle_language.clone()}
                        on_toggle_theme={props.on_toggle_theme.clone()}
                    />
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={props.copy.toggle_menu}
                        aria-expanded={props.menu_open.to_string()}
                        onclick={props.on_toggle_menu.clone()}
                    >
                        <span aria-hidden="true">{menu_icon}</span>
                    </button>
                </div>
            </div>
            if props.menu_open {
                <div class="mobile-menu">
                    { for Section::ALL.into_iter().map(|section| {
                        let label = mobile_label(section);
                        nav_button(section, "mobile-link", label)
                    }) }
                </div>
            }
        </nav>
    }
}

fn mobile_label(section: Section) -> &'static str {
    match section {
        Section::Home => "HOME",
        Section::Projects => "PROJECTS",
        Section::Skills => "SKILLS",
        Section::Experience => "EXPERIENCE",
        Section::Contact => "CONTACT",
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    copy: &'static Bundle,
    language: Language,
    on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let copy = props.copy;
    let on_view_projects = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Projects.id()))
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-grid">
                <div class="hero-text">
                    <div class="hero-role">{copy.role}</div>
                    // Keyed by language so the copy remounts and replays its fade.
                    <div class="hero-copy-frame">
                        <div key={props.language.as_str()} class="hero-copy fade-in">
                            <h1 class="hero-title">
                                {copy.hi}{" "}
                                <span class="gradient-text">{PROFILE.name}</span>
                            </h1>
                            <p class="hero-bio">{copy.bio_short}</p>
                            <div class="hero-actions">
                                <a class="button primary" href={PROFILE.cv_href} download={PROFILE.cv_file_name}>
                                    <span aria-hidden="true">{"⤓ "}</span>{copy.download}
                                </a>
                                <button class="button outline" type="button" onclick={on_view_projects}>
                                    <span aria-hidden="true">{"↗ "}</span>{copy.view_projects}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="hero-photo">
                    <div class="hero-glow" aria-hidden="true"></div>
                    <img class="portrait" src={PROFILE.photo} alt={PROFILE.name} />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CopyProps {
    copy: &'static Bundle,
}

#[function_component(About)]
fn about(props: &CopyProps) -> Html {
    html! {
        <section class="about">
            <div class={classes!(REVEAL_CLASS, "card")}>
                <h3>{props.copy.about_title}</h3>
                <p class="about-bio">{props.copy.bio_long}</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct LocalizedProps {
    copy: &'static Bundle,
    language: Language,
}

fn project_card(project: &'static Project, copy: &'static Bundle, language: Language) -> Html {
    html! {
        <article key={project.id} class={classes!(REVEAL_CLASS, "card", "project-card")} data-project={project.id}>
            <div class="project-media">
                <img src={project.image} alt={project.title} loading="lazy" />
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{*project.description.get(language)}</p>
                <div class="tech-tags">
                    { for project.tech.iter().map(|tech| html! { <span key={*tech} class="tag">{*tech}</span> }) }
                </div>
                <div class="project-links">
                    <ExternalLink href={project.link} class={classes!("repo-link")} hint={copy.opens_new_tab}>
                        {copy.view_repo}<span aria-hidden="true">{" ↗"}</span>
                    </ExternalLink>
                    <ExternalLink href={project.image} class={classes!("preview-link")} hint={copy.opens_new_tab}>
                        {copy.preview}
                    </ExternalLink>
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
fn projects(props: &LocalizedProps) -> Html {
    html! {
        <section id={Section::Projects.id()} class="projects">
            <div class="section-header">
                <h2 class="section-title">{props.copy.projects_title}</h2>
                <p class="section-desc">{props.copy.projects_desc}</p>
            </div>
            <div class="project-grid">
                { for PROJECTS.iter().map(|project| project_card(project, props.copy, props.language)) }
            </div>
        </section>
    }
}

fn skill_card(group: &'static SkillGroup) -> Html {
    html! {
        <div key={group.category} class={classes!(REVEAL_CLASS, "card", "skill-card")}>
            <div class="skill-heading">
                <span class="skill-icon" aria-hidden="true">{group.icon.glyph()}</span>
                <h3>{group.category}</h3>
            </div>
            <ul class="skill-list">
                { for group.items.iter().map(|skill| html! {
                    <li key={skill.name} class="skill">
                        <span class="skill-name">{skill.name}</span>
                        <div
                            class="skill-bar"
                            role="progressbar"
                            aria-label={skill.name}
                            aria-valuenow={skill.percent.to_string()}
                            aria-valuemin="0"
                            aria-valuemax="100"
                        >
                            <div class="skill-fill" style={format!("width: {}%", skill.percent)}></div>
                        </div>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Skills)]
fn skills(props: &CopyProps) -> Html {
    html! {
        <section id={Section::Skills.id()} class="skills">
            <div class="section-header">
                <h2 class="section-title">{props.copy.skills_title}</h2>
                <p class="section-desc">{props.copy.skills_desc}</p>
            </div>
            <div class="skill-grid">
                { for SKILLS.iter().map(skill_card) }
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
fn experience_section(props: &LocalizedProps) -> Html {
    let language = props.language;

    html! {
        <section id={Section::Experience.id()} class="experience">
            <h2 class="section-title">{props.copy.experience_title}</h2>
            <div class="experience-grid">
                <div class={classes!(REVEAL_CLASS, "card", "experience-card")}>
                    <h3>{EXPERIENCE.role}</h3>
                    <p class="muted">{format!("{} • {}", EXPERIENCE.place, EXPERIENCE.period)}</p>
                    <ul class="experience-bullets">
                        { for EXPERIENCE.bullets.get(language).iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                    </ul>
                </div>
                <div class="experience-side">
                    <div class={classes!(REVEAL_CLASS, "card", "education-card")}>
                        <h3 class="education-title">{props.copy.education_title}</h3>
                        <p class="education-school">{EDUCATION.school}</p>
                        <p class="muted">{format!("{} • {}", EDUCATION.period, EDUCATION.degree.get(language))}</p>
                        <p class="education-gpa">{EDUCATION.gpa}</p>
                        <p class="education-highlights">{*EDUCATION.highlights.get(language)}</p>
                    </div>
                    <div class={classes!(REVEAL_CLASS, "card", "certs-card")}>
                        <h3 class="certs-title">{props.copy.certs_title}</h3>
                        <ul class="certs">
                            { for CERTIFICATIONS.iter().map(|cert| html! {
                                <li class="cert">
                                    <strong class="cert-title">{*cert.title.get(language)}</strong>
                                    <div class="cert-issuer muted">{*cert.issuer.get(language)}</div>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact(props: &CopyProps) -> Html {
    let copy = props.copy;
    let whatsapp = PROFILE.whatsapp_url();

    html! {
        <section id={Section::Contact.id()} class="contact">
            <div class="contact-grid">
                <div class={classes!(REVEAL_CLASS, "card")}>
                    <h2 class="section-title">{copy.contact_title}</h2>
                    <p class="contact-desc">{copy.contact_desc}</p>
                    <div class="contact-actions">
                        <a class="button primary" href={PROFILE.mailto()}>
                            <span aria-hidden="true">{"✉ "}</span>{copy.send_email}
                        </a>
                        <ExternalLink href={whatsapp.clone()} class={classes!("button", "outline")} hint={copy.opens_new_tab}>
                            <span aria-hidden="true">{"☏ "}</span>{PROFILE.phone_display}
                        </ExternalLink>
                    </div>
                </div>
                <div class={classes!(REVEAL_CLASS, "card")}>
                    <h3 class="find-me">{copy.find_me}</h3>
                    <ul class="contact-list">
                        <li>
                            <span>{"Email"}</span>
                            <a class="link" href={PROFILE.mailto()}>{PROFILE.email}</a>
                        </li>
                        <li>
                            <span>{"LinkedIn"}</span>
                            <ExternalLink href={PROFILE.linkedin_url()} class={classes!("link")} hint={copy.opens_new_tab}>
                                {format!("/{}", PROFILE.linkedin_handle)}
                            </ExternalLink>
                        </li>
                        <li>
                            <span>{"GitHub"}</span>
                            <ExternalLink href={PROFILE.github_url()} class={classes!("link")} hint={copy.opens_new_tab}>
                                {format!("/{}", PROFILE.github_handle)}
                            </ExternalLink>
                        </li>
                        <li>
                            <span>{"WhatsApp"}</span>
                            <ExternalLink href={whatsapp} class={classes!("link")} hint={copy.opens_new_tab}>
                                {PROFILE.phone_display}
                            </ExternalLink>
                        </li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub store: SharedStore,
    #[prop_or_default]
    pub reveal: RevealOptions,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let prefs = {
        let store = props.store.clone();
        use_state(move || Preferences::load(&*store))
    };
    let menu_open = use_state(|| false);
    let reveal_root = use_node_ref();

    {
        let current = *prefs;
        use_effect_with((), move |_| {
            host::apply_theme(current.theme);
            host::apply_language(current.language);
            || ()
        });
    }

    {
        let reveal_root = reveal_root.clone();
        let options = props.reveal.clone();
        use_effect_with((), move |_| {
            let mut handle = host::attach_reveal(&reveal_root, &options);
            move || handle.dispose()
        });
    }

    let on_toggle_theme = {
        let prefs = prefs.clone();
        let store = props.store.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*prefs).toggle_theme(&*store);
            host::apply_theme_with_transition(next.theme);
            prefs.set(next);
        })
    };

    let on_toggle_language = {
        let prefs = prefs.clone();
        let store = props.store.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*prefs).toggle_language(&*store);
            host::apply_language(next.language);
            prefs.set(next);
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let current = *prefs;
    let copy = select(current.language);

    html! {
        <div
            class={classes!("page", current.theme.as_str())}
            data-theme={current.theme.as_str()}
            lang={current.language.as_str()}
        >
            <NavBar
                copy={copy}
                prefs={current}
                menu_open={*menu_open}
                on_navigate={on_navigate.clone()}
                on_toggle_language={on_toggle_language.clone()}
                on_toggle_theme={on_toggle_theme.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            <main class="content" ref={reveal_root}>
                <Hero copy={copy} language={current.language} on_navigate={on_navigate} />
                <About copy={copy} />
                <Projects copy={copy} language={current.language} />
                <Skills copy={copy} />
                <ExperienceSection copy={copy} language={current.language} />
                <Contact copy={copy} />
            </main>
            <footer class="site-footer">
                <div class="footer-inner">
                    <div class="footer-note">
                        {format!("© {} {} • {}", PROFILE.copyright_year, PROFILE.name, copy.footer)}
                    </div>
                    <div class="footer-actions">
                        <PreferenceToggles
                            copy={copy}
                            prefs={current}
                            on_toggle_language={on_toggle_language}
                            on_toggle_theme={on_toggle_theme}
                        />
                    </div>
                </div>
            </footer>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
pub fn run() {
    use serde_json::json;
    use web_sys::window;

    use crate::content::validate_catalog;
    use crate::log::{log_event, set_log_level, LogLevel};

    let mount = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));

    if let Some(level) = mount
        .as_ref()
        .and_then(|element| element.get_attribute("data-log-level"))
        .and_then(|value| LogLevel::parse(&value))
    {
        set_log_level(level);
    }

    if let Err(error) = validate_catalog() {
        log_event(
            LogLevel::Warn,
            "catalog_invalid",
            json!({ "error": error.to_string() }),
        );
    }

    let props = AppProps {
        store: SharedStore::new(host::LocalStorageStore),
        reveal: RevealOptions::default(),
    };

    match mount {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}
