// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{AppMode, FormKind, TabKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub active_tab: TabKind,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Browse,
            active_tab: TabKind::Fleet,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    NextTab,
    PrevTab,
    SetTab(TabKind),
    OpenDrawer(FormKind),
    CloseDrawer,
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    TabChanged(TabKind),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextTab => self.rotate_tab(1),
            AppCommand::PrevTab => self.rotate_tab(-1),
            AppCommand::SetTab(tab) => {
                self.active_tab = tab;
                vec![AppEvent::TabChanged(tab)]
            }
            AppCommand::OpenDrawer(kind) => {
                self.mode = AppMode::Drawer(kind);
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::CloseDrawer => {
                self.mode = AppMode::Browse;
                vec![AppEvent::ModeChanged(self.mode), self.set_status("browse")]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_tab(&mut self, delta: isize) -> Vec<AppEvent> {
        let tabs = TabKind::ALL;
        let current = tabs
            .iter()
            .position(|tab| *tab == self.active_tab)
            .unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.active_tab = tabs[next];
        vec![AppEvent::TabChanged(self.active_tab)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::{AppMode, FormKind, TabKind};

    #[test]
    fn tab_rotation_wraps() {
        let mut state = AppState {
            active_tab: TabKind::Orders,
            ..AppState::default()
        };

        let events = state.dispatch(AppCommand::NextTab);
        assert_eq!(state.active_tab, TabKind::Fleet);
        assert_eq!(events, vec![AppEvent::TabChanged(TabKind::Fleet)]);

        state.dispatch(AppCommand::PrevTab);
        assert_eq!(state.active_tab, TabKind::Orders);
    }

    #[test]
    fn drawer_open_and_close_toggle_mode() {
        let mut state = AppState::default();

        let opened = state.dispatch(AppCommand::OpenDrawer(FormKind::Trip));
        assert_eq!(state.mode, AppMode::Drawer(FormKind::Trip));
        assert_eq!(
            opened,
            vec![AppEvent::ModeChanged(AppMode::Drawer(FormKind::Trip))]
        );

        let closed = state.dispatch(AppCommand::CloseDrawer);
        assert_eq!(state.mode, AppMode::Browse);
        assert_eq!(
            closed,
            vec![
                AppEvent::ModeChanged(AppMode::Browse),
                AppEvent::StatusUpdated("browse".to_owned()),
            ],
        );
    }

    #[test]
    fn set_tab_and_clear_status() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetTab(TabKind::Trips));
        assert_eq!(state.active_tab, TabKind::Trips);

        state.dispatch(AppCommand::CloseDrawer);
        assert!(state.status_line.is_some());
        let events = state.dispatch(AppCommand::ClearStatus);
        assert!(state.status_line.is_none());
        assert_eq!(events, vec![AppEvent::StatusCleared]);
    }
}
