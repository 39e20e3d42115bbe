//! Service detail page state: focusable rows, reveal toggles, open config panel

use stackview_core::{Section, ServiceDetails};
use std::collections::HashSet;

/// A focusable line on the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRow {
    SwarmName,
    ServiceId,
    Image,
    /// Variable count with the "Copy as .env" action
    EnvHeader,
    Env(usize),
    NetworkAlias,
    GlobalAlias,
    Url(usize),
    Port(usize),
    Healthcheck,
    Volume(usize),
    Config(usize),
}

impl DetailRow {
    pub fn section(&self) -> Section {
        match self {
            DetailRow::SwarmName | DetailRow::ServiceId => Section::Details,
            DetailRow::Image => Section::Source,
            DetailRow::EnvHeader | DetailRow::Env(_) => Section::Environment,
            DetailRow::NetworkAlias
            | DetailRow::GlobalAlias
            | DetailRow::Url(_)
            | DetailRow::Port(_) => Section::Networking,
            DetailRow::Healthcheck => Section::Health,
            DetailRow::Volume(_) => Section::Volumes,
            DetailRow::Config(_) => Section::Configs,
        }
    }
}

/// Rows of a detail page in display order
pub fn rows_for(details: &ServiceDetails) -> Vec<DetailRow> {
    let mut rows = vec![
        DetailRow::SwarmName,
        DetailRow::ServiceId,
        DetailRow::Image,
        DetailRow::EnvHeader,
    ];
    rows.extend((0..details.environment.len()).map(DetailRow::Env));
    rows.push(DetailRow::NetworkAlias);
    rows.push(DetailRow::GlobalAlias);
    rows.extend((0..details.urls.len()).map(DetailRow::Url));
    rows.extend((0..details.ports.len()).map(DetailRow::Port));
    if details.healthcheck.is_some() {
        rows.push(DetailRow::Healthcheck);
    }
    rows.extend((0..details.volumes.len()).map(DetailRow::Volume));
    rows.extend((0..details.configs.len()).map(DetailRow::Config));
    rows
}

/// State for one open service detail page.
///
/// Recreated whenever a page is opened, so reveal and panel state never
/// carry over from a previous visit.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub details: ServiceDetails,
    pub rows: Vec<DetailRow>,
    /// Index into `rows`
    pub focused: usize,
    /// Environment rows currently showing their value
    pub revealed: HashSet<usize>,
    /// The single config panel that is open, if any
    pub expanded_config: Option<usize>,
}

impl DetailState {
    pub fn new(details: ServiceDetails) -> Self {
        let rows = rows_for(&details);
        Self {
            details,
            rows,
            focused: 0,
            revealed: HashSet::new(),
            expanded_config: None,
        }
    }

    /// Swap in freshly derived details, keeping focus and toggles where they still apply
    pub fn update(&mut self, details: ServiceDetails) {
        let focused_row = self.focused_row();
        self.rows = rows_for(&details);
        self.focused = focused_row
            .and_then(|row| self.rows.iter().position(|r| *r == row))
            .unwrap_or_else(|| self.focused.min(self.rows.len().saturating_sub(1)));

        let env_len = details.environment.len();
        self.revealed.retain(|i| *i < env_len);
        if self.expanded_config.is_some_and(|i| i >= details.configs.len()) {
            self.expanded_config = None;
        }
        self.details = details;
    }

    pub fn focused_row(&self) -> Option<DetailRow> {
        self.rows.get(self.focused).copied()
    }

    pub fn current_section(&self) -> Section {
        self.focused_row()
            .map(|r| r.section())
            .unwrap_or(Section::Details)
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.focused = (self.focused + 1) % self.rows.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.rows.is_empty() {
            self.focused = if self.focused == 0 {
                self.rows.len() - 1
            } else {
                self.focused - 1
            };
        }
    }

    /// Focus the first row of the next section that has rows
    pub fn next_section(&mut self) {
        self.jump_section(Section::next);
    }

    pub fn prev_section(&mut self) {
        self.jump_section(Section::prev);
    }

    fn jump_section(&mut self, step: fn(&Section) -> Section) {
        let mut section = self.current_section();
        for _ in 0..Section::all().len() {
            section = step(&section);
            if let Some(pos) = self.rows.iter().position(|r| r.section() == section) {
                self.focused = pos;
                return;
            }
        }
    }

    pub fn is_revealed(&self, env_index: usize) -> bool {
        self.revealed.contains(&env_index)
    }

    pub fn toggle_reveal(&mut self, env_index: usize) {
        if !self.revealed.remove(&env_index) {
            self.revealed.insert(env_index);
        }
    }

    /// Open a config panel, closing any other; toggling the open one closes it
    pub fn toggle_config(&mut self, config_index: usize) {
        self.expanded_config = if self.expanded_config == Some(config_index) {
            None
        } else {
            Some(config_index)
        };
    }

    /// Toggle whatever the focused row toggles. Returns false if it has nothing to toggle.
    pub fn toggle_focused(&mut self) -> bool {
        match self.focused_row() {
            Some(DetailRow::Env(i)) => {
                self.toggle_reveal(i);
                true
            }
            Some(DetailRow::Config(i)) => {
                self.toggle_config(i);
                true
            }
            _ => false,
        }
    }

    /// Value to copy for the focused row and a label for the status line
    pub fn copy_target(&self) -> Option<(String, String)> {
        let d = &self.details;
        match self.focused_row()? {
            DetailRow::SwarmName => Some((d.swarm_service_name(), "service name".to_string())),
            DetailRow::ServiceId => Some((d.id.clone(), "service ID".to_string())),
            DetailRow::Image => Some((d.image.full(), "image".to_string())),
            DetailRow::EnvHeader => Some((d.dotenv(), "variables as .env".to_string())),
            DetailRow::Env(i) => d
                .environment
                .get(i)
                .map(|env| (env.value.clone(), format!("value of {}", env.key))),
            DetailRow::NetworkAlias => {
                Some((d.network_alias_short(), "environment alias".to_string()))
            }
            DetailRow::GlobalAlias => Some((d.global_alias_short(), "global alias".to_string())),
            DetailRow::Url(i) => d.urls.get(i).map(|url| (url.address(), url.address())),
            DetailRow::Port(_)
            | DetailRow::Healthcheck
            | DetailRow::Volume(_)
            | DetailRow::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackview_core::test_support::{blog_stack, full_stack};

    fn api_state() -> DetailState {
        let stack = full_stack();
        DetailState::new(ServiceDetails::derive(&stack, "api", "zaneops.internal").unwrap())
    }

    #[test]
    fn test_rows_follow_section_order() {
        let state = api_state();
        let sections: Vec<Section> = state.rows.iter().map(|r| r.section()).collect();
        let mut sorted = sections.clone();
        sorted.sort_by_key(|s| s.index());
        assert_eq!(sections, sorted);
        assert_eq!(state.rows.len(), 4 + 3 + 2 + 2 + 1 + 1 + 3 + 2);
    }

    #[test]
    fn test_reveal_is_per_row() {
        let mut state = api_state();
        assert!(!state.is_revealed(0));
        state.toggle_reveal(1);
        assert!(state.is_revealed(1));
        assert!(!state.is_revealed(0));
        assert!(!state.is_revealed(2));
        state.toggle_reveal(1);
        assert!(!state.is_revealed(1));
    }

    #[test]
    fn test_single_config_panel() {
        let mut state = api_state();
        state.toggle_config(0);
        assert_eq!(state.expanded_config, Some(0));
        state.toggle_config(1);
        assert_eq!(state.expanded_config, Some(1));
        state.toggle_config(1);
        assert_eq!(state.expanded_config, None);
    }

    #[test]
    fn test_section_jumps_skip_empty_sections() {
        let stack = blog_stack();
        let mut state =
            DetailState::new(ServiceDetails::derive(&stack, "web", "zaneops.internal").unwrap());

        state.next_section();
        assert_eq!(state.current_section(), Section::Source);
        state.next_section();
        assert_eq!(state.current_section(), Section::Environment);
        state.next_section();
        assert_eq!(state.current_section(), Section::Networking);
        // No health check, volumes or configs: wraps back to the top
        state.next_section();
        assert_eq!(state.current_section(), Section::Details);
        state.prev_section();
        assert_eq!(state.current_section(), Section::Networking);
    }

    #[test]
    fn test_copy_targets() {
        let mut state = api_state();
        assert_eq!(
            state.copy_target(),
            Some(("shop_k3f9_api".to_string(), "service name".to_string()))
        );

        state.focused = state
            .rows
            .iter()
            .position(|r| *r == DetailRow::Url(0))
            .unwrap();
        assert_eq!(state.copy_target().unwrap().0, "shop.example.com/api");

        state.focused = state
            .rows
            .iter()
            .position(|r| *r == DetailRow::Volume(0))
            .unwrap();
        assert_eq!(state.copy_target(), None);
    }

    #[test]
    fn test_update_keeps_focus_and_drops_stale_toggles() {
        let mut state = api_state();
        state.toggle_reveal(2);
        state.toggle_config(1);
        state.focused = state
            .rows
            .iter()
            .position(|r| *r == DetailRow::GlobalAlias)
            .unwrap();

        let mut stack = full_stack();
        let api = stack.services.get_mut("api").unwrap();
        api.environment.truncate(1);
        api.configs.truncate(1);
        state.update(ServiceDetails::derive(&stack, "api", "zaneops.internal").unwrap());

        assert_eq!(state.focused_row(), Some(DetailRow::GlobalAlias));
        assert!(state.revealed.is_empty());
        assert_eq!(state.expanded_config, None);
    }
}
