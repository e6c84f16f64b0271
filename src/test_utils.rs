#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::app::{App, LaunchMode};
    use crate::config::Config;
    use crate::error::{LauncherError, LoadError};
    use crate::target::{Opener, ResolvedTarget};

    pub const TEST_ROSTER: &[&str] = &["Ahri", "Akali", "Dr. Mundo", "Kai'Sa", "Karma"];

    /// Opener that records every target instead of launching anything
    #[derive(Clone, Default)]
    pub struct RecordingOpener {
        pub opened: Rc<RefCell<Vec<String>>>,
        pub fail: bool,
    }

    impl Opener for RecordingOpener {
        fn open(&self, target: &ResolvedTarget) -> Result<(), LauncherError> {
            if self.fail {
                return Err(LauncherError::OpenFailed {
                    target: target.to_string(),
                    message: "no handler".to_string(),
                });
            }
            self.opened.borrow_mut().push(target.to_string());
            Ok(())
        }
    }

    pub fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// App over `names` that records opened targets
    pub fn test_app(names: &[&str]) -> (App, Rc<RefCell<Vec<String>>>) {
        let opener = RecordingOpener::default();
        let opened = Rc::clone(&opener.opened);
        let app = App::new(
            Ok(roster(names)),
            &Config::default(),
            LaunchMode::Open(Box::new(opener)),
        );
        (app, opened)
    }

    pub fn print_app(names: &[&str]) -> App {
        App::new(Ok(roster(names)), &Config::default(), LaunchMode::Print)
    }

    pub fn missing_roster_app() -> App {
        let error = LoadError::NotFound {
            path: PathBuf::from("champions.txt"),
        };
        App::new(Err(error), &Config::default(), LaunchMode::Print)
    }

    pub fn type_query(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }
}
