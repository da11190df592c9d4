//! Mini-applications launched from the main menu.
//!
//! Every app runs its own loop with a short long-press threshold and returns
//! to the menu on exit (long press, or the end of a game).

pub mod eyes;
pub mod mines;
pub mod running_light;

use crate::config::{MENU_LONG_PRESS_MS, MENU_TITLE};
use crate::error::Error;
use crate::platform::Platform;
use crate::ui::{Cursor, Menu};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum App {
    Eyes,
    Mines,
    RunningLight,
}

impl App {
    pub const ALL: [App; 3] = [App::Eyes, App::Mines, App::RunningLight];

    pub fn label(self) -> &'static str {
        match self {
            App::Eyes => "Eyes",
            App::Mines => "Mines",
            App::RunningLight => "Running LED",
        }
    }
}

/// Run `app` to completion. The menu's cursor is handed to apps that use one.
pub fn launch<P: Platform>(app: App, platform: &mut P, cursor: &mut Cursor) {
    info!("Launching {}", app.label());
    match app {
        App::Eyes => eyes::run(platform),
        App::Mines => mines::run(platform, cursor),
        App::RunningLight => running_light::run(platform),
    }
}

/// Power-on flow: Eyes is the idle screen, and its long press opens `menu`.
/// Returns when the menu closes.
pub fn boot<P: Platform>(platform: &mut P, menu: &mut Menu<App>) {
    info!("Boot: eyes");
    eyes::run(platform);
    menu.run(platform, launch);
}

/// The top-level menu. It has no back row, so it never closes on its own.
pub fn main_menu() -> Result<Menu<App>, Error> {
    let rows = App::ALL.map(|app| (app.label(), Some(app)));
    Menu::new(MENU_TITLE, &rows, MENU_LONG_PRESS_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_lists_apps_in_order() {
        let menu = main_menu().unwrap();
        assert_eq!(menu.title(), "BSidesSLC 2022");
        let labels: heapless::Vec<&str, 3> = menu.rows().iter().map(|r| r.label).collect();
        assert_eq!(labels.as_slice(), &["Eyes", "Mines", "Running LED"]);
        assert!(menu.rows().iter().all(|r| r.action.is_some()));
    }
}
