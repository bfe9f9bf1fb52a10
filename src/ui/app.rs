//! Application state and action dispatch

use super::actions::{Action, InputMode};
use super::page::{ListPage, Page};
use crate::config::Config;
use crate::domains::{self, Domain};
use crate::export::ExportFormat;
use crate::filter::SearchDebouncer;
use crate::logger::Logger;
use crate::notification::NotificationCenter;
use crate::record::{Record, RecordId};
use crate::source::{DataSource, JsonFileSource, SeedSource};
use crate::utils::datetime;
use crate::view::ListView;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Application state
pub struct App {
    pub should_quit: bool,
    pub pages: Vec<Box<dyn Page>>,
    pub active: usize,
    pub mode: InputMode,
    pub notifications: NotificationCenter,
    /// Search text being typed, applied through the debouncer
    pub search_input: String,
    pub filter_slot: usize,
    pub delete_confirmation: Option<RecordId>,
    pub help_scroll_offset: usize,
    pub log_scroll_offset: usize,
    pub logger: Logger,
    export_dir: PathBuf,
    debouncer: SearchDebouncer,
}

fn build_page<R: Record>(config: &Config, domain: Domain, seed: Vec<R>) -> Box<dyn Page> {
    let view = ListView::new(domain.schema(), config.ui.page_size).with_quoting(config.export.quote_fields);

    let source: Arc<dyn DataSource<R>> = match &config.data.directory {
        Some(dir) => Arc::new(JsonFileSource::new(dir.join(format!("{}.json", domain.slug())))),
        None => Arc::new(SeedSource::new(domain.slug(), seed.clone()).with_latency(config.data.simulated_latency())),
    };

    let page = ListPage::new(domain, view, source);
    if config.data.fallback_to_seed {
        Box::new(page.with_fallback(seed))
    } else {
        Box::new(page)
    }
}

/// One page per domain, in sidebar order.
pub fn build_pages(config: &Config) -> Vec<Box<dyn Page>> {
    Domain::ALL
        .iter()
        .map(|&domain| match domain {
            Domain::AuditLogs => build_page(config, domain, domains::audit_log::seed()),
            Domain::Roles => build_page(config, domain, domains::role::seed()),
            Domain::Integrations => build_page(config, domain, domains::integration::seed()),
            Domain::NotificationRules => build_page(config, domain, domains::notification_rule::seed()),
            Domain::Compliance => build_page(config, domain, domains::compliance::seed()),
            Domain::Onboarding => build_page(config, domain, domains::onboarding::seed()),
            Domain::Recruitment => build_page(config, domain, domains::candidate::seed()),
            Domain::Reviews => build_page(config, domain, domains::review::seed()),
            Domain::Accounts => build_page(config, domain, domains::account::seed()),
            Domain::Escalations => build_page(config, domain, domains::escalation::seed()),
            Domain::TimeTracking => build_page(config, domain, domains::time_entry::seed()),
        })
        .collect()
}

impl App {
    /// Create the app and start loading the configured default page.
    #[must_use]
    pub fn new(config: &Config, logger: Logger) -> Self {
        let pages = build_pages(config);
        let active = Domain::from_slug(&config.ui.default_page)
            .map(Domain::index)
            .unwrap_or(0);

        let mut app = Self {
            should_quit: false,
            pages,
            active,
            mode: InputMode::Normal,
            notifications: NotificationCenter::new(config.notifications.timeout(), config.notifications.max_visible),
            search_input: String::new(),
            filter_slot: 0,
            delete_confirmation: None,
            help_scroll_offset: 0,
            log_scroll_offset: 0,
            logger,
            export_dir: config.export.resolved_directory(),
            debouncer: SearchDebouncer::new(config.search.debounce()),
        };
        app.mount_active();
        app
    }

    pub fn page(&self) -> &dyn Page {
        self.pages[self.active].as_ref()
    }

    pub fn page_mut(&mut self) -> &mut dyn Page {
        self.pages[self.active].as_mut()
    }

    fn mount_active(&mut self) {
        self.search_input.clear();
        self.filter_slot = 0;
        self.delete_confirmation = None;
        self.page_mut().start_load();
    }

    /// Leave the current page and mount `index`. Rows of the old page are dropped.
    pub fn switch_page(&mut self, index: usize) {
        if index == self.active || index >= self.pages.len() {
            return;
        }
        if let Some(term) = self.debouncer.flush() {
            log::debug!("Dropping pending search '{}' on page switch", term);
        }
        self.page_mut().unmount();
        self.active = index;
        log::info!("Switched to {}", self.page().domain().title());
        self.mount_active();
    }

    /// Periodic work: finished loads, debounced search, notification lifetimes.
    pub async fn tick(&mut self, now: Instant) {
        let active = self.active;
        self.pages[active].poll_load(&mut self.notifications).await;

        if let Some(term) = self.debouncer.poll(now) {
            self.page_mut().set_search(&term);
        }
        self.notifications.tick(now);
    }

    /// Wait for the active page's load to complete.
    pub async fn settle(&mut self) {
        let active = self.active;
        self.pages[active].settle(&mut self.notifications).await;
    }

    fn push_search(&mut self, now: Instant) {
        if let Some(term) = self.debouncer.push(&self.search_input, now) {
            self.page_mut().set_search(&term);
        }
    }

    pub fn apply(&mut self, action: Action) {
        self.apply_at(action, Instant::now());
    }

    pub fn apply_at(&mut self, action: Action, now: Instant) {
        let active = self.active;
        match action {
            Action::Quit => self.should_quit = true,

            Action::NextRow => self.page_mut().next_row(),
            Action::PreviousRow => self.page_mut().previous_row(),
            Action::NextPage => {
                self.page_mut().next_page();
            }
            Action::PreviousPage => {
                self.page_mut().previous_page();
            }
            Action::FirstPage => {
                self.page_mut().first_page();
            }
            Action::LastPage => {
                self.page_mut().last_page();
            }
            Action::NextDomain => self.switch_page((self.active + 1) % self.pages.len()),
            Action::PreviousDomain => {
                self.switch_page((self.active + self.pages.len() - 1) % self.pages.len())
            }

            Action::StartSearch => {
                self.search_input = self.page().search().to_string();
                self.mode = InputMode::Search;
            }
            Action::SearchInput(c) => {
                self.search_input.push(c);
                self.push_search(now);
            }
            Action::SearchBackspace => {
                self.search_input.pop();
                self.push_search(now);
            }
            Action::SubmitSearch => {
                self.debouncer.flush();
                let term = self.search_input.clone();
                self.page_mut().set_search(&term);
                self.mode = InputMode::Normal;
            }
            Action::CancelSearch => {
                self.debouncer.flush();
                self.search_input.clear();
                self.page_mut().set_search("");
                self.mode = InputMode::Normal;
            }
            Action::CycleFilter => {
                let slot = self.filter_slot;
                self.page_mut().cycle_filter(slot);
            }
            Action::NextFilterSlot => {
                let slots = self.page().schema().filters.len();
                if slots > 0 {
                    self.filter_slot = (self.filter_slot + 1) % slots;
                }
            }
            Action::ClearFilters => {
                self.search_input.clear();
                self.debouncer.flush();
                self.page_mut().clear_filters();
            }

            Action::ToggleSelect => {
                self.page_mut().toggle_select();
            }
            Action::SelectPage => self.page_mut().select_page(),

            Action::ToggleField => {
                self.pages[active].toggle_current(&mut self.notifications);
            }
            Action::RequestDelete => {
                if let Some(id) = self.page().current_id() {
                    self.delete_confirmation = Some(id);
                    self.mode = InputMode::ConfirmDelete;
                }
            }
            Action::ConfirmDelete => {
                if let Some(id) = self.delete_confirmation.take() {
                    self.pages[active].delete(id, &mut self.notifications);
                }
                self.mode = InputMode::Normal;
            }
            Action::CancelDelete => {
                self.delete_confirmation = None;
                self.mode = InputMode::Normal;
            }
            Action::Duplicate => {
                self.pages[active].duplicate_current(&mut self.notifications);
            }
            Action::Export(format) => {
                self.export(format);
            }
            Action::Reload => self.page_mut().start_load(),

            Action::DismissNotification => {
                self.notifications.dismiss_latest();
            }
            Action::ToggleHelp => {
                self.mode = if self.mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    self.help_scroll_offset = 0;
                    InputMode::Help
                };
            }
            Action::ToggleLogs => {
                self.mode = if self.mode == InputMode::Logs {
                    InputMode::Normal
                } else {
                    self.log_scroll_offset = 0;
                    InputMode::Logs
                };
            }
            Action::ScrollUp => match self.mode {
                InputMode::Help => self.help_scroll_offset = self.help_scroll_offset.saturating_sub(1),
                InputMode::Logs => self.log_scroll_offset = self.log_scroll_offset.saturating_sub(1),
                _ => {}
            },
            Action::ScrollDown => match self.mode {
                InputMode::Help => self.help_scroll_offset = self.help_scroll_offset.saturating_add(1),
                InputMode::Logs => self.log_scroll_offset = self.log_scroll_offset.saturating_add(1),
                _ => {}
            },
        }
    }

    /// Export the current scope into the configured directory.
    pub fn export(&mut self, format: ExportFormat) -> Option<PathBuf> {
        let active = self.active;
        let dir = self.export_dir.clone();
        self.pages[active].export(format, &dir, datetime::today(), &mut self.notifications)
    }

    pub fn export_dir(&self) -> &PathBuf {
        &self.export_dir
    }
}
