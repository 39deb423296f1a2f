use thiserror::Error;

use crate::reveal::GroupId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("a panel switcher needs at least one panel")]
    NoPanels,
    #[error("initial panel `{0}` is not one of the panels")]
    UnknownInitial(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelEntry {
    pub id: String,
    pub group: GroupId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSwitch {
    pub previous: usize,
    pub current: usize,
    pub group: GroupId,
}

/// Exclusive selection over a fixed set of panels. Exactly one panel is
/// active from construction on.
#[derive(Clone, Debug)]
pub struct PanelSwitcher {
    panels: Vec<PanelEntry>,
    active: usize,
}

impl PanelSwitcher {
    pub fn new(panels: Vec<PanelEntry>, initial: &str) -> Result<Self, PanelError> {
        if panels.is_empty() {
            return Err(PanelError::NoPanels);
        }

        let active = panels
            .iter()
            .position(|panel| panel.id == initial)
            .ok_or_else(|| PanelError::UnknownInitial(initial.to_string()))?;

        Ok(Self { panels, active })
    }

    pub fn panels(&self) -> &[PanelEntry] {
        &self.panels
    }

    pub fn active(&self) -> &PanelEntry {
        &self.panels[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().id == id
    }

    /// Activates the panel named `id`. An unknown id leaves the current
    /// panel active and returns `None`.
    pub fn select(&mut self, id: &str) -> Option<PanelSwitch> {
        let current = self.panels.iter().position(|panel| panel.id == id)?;
        let previous = std::mem::replace(&mut self.active, current);

        Some(PanelSwitch {
            previous,
            current,
            group: self.panels[current].group,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switcher() -> PanelSwitcher {
        PanelSwitcher::new(
            vec![
                PanelEntry { id: "technical".to_string(), group: GroupId(1) },
                PanelEntry { id: "tools".to_string(), group: GroupId(2) },
                PanelEntry { id: "soft".to_string(), group: GroupId(3) },
            ],
            "technical",
        )
        .expect("valid panels")
    }

    #[test]
    fn construction_requires_a_known_initial_panel() {
        assert_eq!(PanelSwitcher::new(Vec::new(), "x").err(), Some(PanelError::NoPanels));
        assert_eq!(
            PanelSwitcher::new(
                vec![PanelEntry { id: "a".to_string(), group: GroupId(0) }],
                "b"
            )
            .err(),
            Some(PanelError::UnknownInitial("b".to_string()))
        );
    }

    #[test]
    fn unknown_id_keeps_current_panel() {
        let mut switcher = switcher();

        assert_eq!(switcher.select("design"), None);
        assert!(switcher.is_active("technical"));
    }

    #[test]
    fn known_id_swaps_exactly_one_panel() {
        let mut switcher = switcher();
        let switch = switcher.select("soft").expect("known panel");

        assert_eq!(switch, PanelSwitch { previous: 0, current: 2, group: GroupId(3) });
        assert!(switcher.is_active("soft"));
        assert_eq!(
            switcher.panels().iter().filter(|p| switcher.is_active(&p.id)).count(),
            1
        );
    }
}
