//! Menu navigation state machine
//!
//! The [`Navigator`] tracks the menu being shown, the selected entry and a
//! stack of the menus the user descended from. It owns the menu and
//! description panels and keeps both in step with the selection. Running
//! a command is left to the caller: activating a command entry yields
//! [`Transition::Launch`].

use std::io;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Size;

use crate::error::Result;
use crate::menu::{Command, EntryKind, MenuEntry, MenuSet, ProviderRegistry};
use crate::tui::event::is_back_key;
use crate::tui::region::Panel;
use crate::tui::surface::Surface;
use crate::tui::widgets::{DescriptionBox, MenuPanel};

/// Title of the top-level menu
pub const ROOT_TITLE: &str = "Main menu";

/// Keys the navigator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Activate,
    Back,
}

impl NavKey {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Up => Some(NavKey::Up),
            KeyCode::Down => Some(NavKey::Down),
            KeyCode::Enter => Some(NavKey::Activate),
            _ if is_back_key(key) => Some(NavKey::Back),
            _ => None,
        }
    }
}

/// A menu the user descended from
#[derive(Debug, Clone)]
pub struct NavigationFrame {
    pub menu: MenuSet,
    pub selected: usize,
    pub title: String,
}

/// Outcome of a navigation key
#[derive(Debug)]
pub enum Transition {
    /// The key had no effect
    Ignored,
    /// The selection moved within the current menu
    Moved,
    /// A group or dynamic menu was entered
    Entered,
    /// The previous menu was restored
    Returned,
    /// Back was pressed on the top-level menu
    AtRoot,
    /// The selected command should be run
    Launch(Command),
}

#[derive(Debug)]
pub struct Navigator {
    current: MenuSet,
    title: String,
    history: Vec<NavigationFrame>,
    providers: ProviderRegistry,
    menu: MenuPanel,
    description: DescriptionBox,
    size: Size,
}

impl Navigator {
    pub fn new(root: MenuSet, providers: ProviderRegistry) -> Self {
        let mut navigator = Self {
            current: root.clone(),
            title: ROOT_TITLE.to_string(),
            history: Vec::new(),
            providers,
            menu: MenuPanel::new(ROOT_TITLE),
            description: DescriptionBox::new("Description"),
            size: Size::default(),
        };
        navigator.show(root, 0, ROOT_TITLE.to_string());
        navigator
    }

    pub fn current(&self) -> &MenuSet {
        &self.current
    }

    pub fn selected(&self) -> usize {
        self.menu.selected()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of menus on the history stack
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.current.get(self.menu.selected())
    }

    pub fn menu_panel(&self) -> &MenuPanel {
        &self.menu
    }

    pub fn description(&self) -> &DescriptionBox {
        &self.description
    }

    pub fn layout(&mut self, size: Size) {
        self.size = size;
        self.menu.layout(size);
        self.description.layout(size);
    }

    pub fn render(&mut self, surface: &mut dyn Surface) -> io::Result<()> {
        self.menu.render(surface)?;
        self.description.render(surface)
    }

    /// Apply `key`, redrawing whatever it changed
    pub fn handle(&mut self, key: NavKey, surface: &mut dyn Surface) -> Result<Transition> {
        match key {
            NavKey::Up | NavKey::Down => {
                let code = if key == NavKey::Up {
                    KeyCode::Up
                } else {
                    KeyCode::Down
                };
                if !self.menu.handle_key(code, surface)? {
                    return Ok(Transition::Ignored);
                }
                self.refresh_description();
                self.description.render(surface)?;
                Ok(Transition::Moved)
            }
            NavKey::Activate => self.activate(surface),
            NavKey::Back => {
                let Some(frame) = self.history.pop() else {
                    tracing::debug!("No previous menu to return to");
                    return Ok(Transition::AtRoot);
                };
                self.display(surface, frame.menu, frame.selected, frame.title)?;
                Ok(Transition::Returned)
            }
        }
    }

    fn activate(&mut self, surface: &mut dyn Surface) -> Result<Transition> {
        let Some(entry) = self.selected_entry() else {
            return Ok(Transition::Ignored);
        };
        let name = entry.name().to_string();
        let kind = entry.kind().clone();
        match kind {
            EntryKind::Group(children) => {
                self.descend(surface, children, name)?;
                Ok(Transition::Entered)
            }
            EntryKind::Dynamic(id) => {
                // Failure leaves the current menu untouched
                let menu = self.providers.build(&id)?;
                tracing::info!("Built dynamic menu '{}' with {} entries", id, menu.len());
                self.descend(surface, menu, name)?;
                Ok(Transition::Entered)
            }
            EntryKind::Command(command) => Ok(Transition::Launch(command)),
        }
    }

    fn descend(&mut self, surface: &mut dyn Surface, menu: MenuSet, title: String) -> io::Result<()> {
        self.history.push(NavigationFrame {
            menu: self.current.clone(),
            selected: self.menu.selected(),
            title: self.title.clone(),
        });
        self.display(surface, menu, 0, title)
    }

    /// Switch to `menu` and redraw both panels
    fn display(
        &mut self,
        surface: &mut dyn Surface,
        menu: MenuSet,
        selected: usize,
        title: String,
    ) -> io::Result<()> {
        let previous = self.menu.region().area();
        self.show(menu, selected, title);
        self.layout(self.size);
        if self.menu.region().is_visible() {
            surface.clear_area(previous)?;
        }
        self.render(surface)
    }

    fn show(&mut self, menu: MenuSet, selected: usize, title: String) {
        self.menu.set_title(title.clone());
        self.menu.set_entries(menu.names(), selected);
        self.current = menu;
        self.title = title;
        self.refresh_description();
    }

    fn refresh_description(&mut self) {
        let lines = self
            .selected_entry()
            .map(MenuEntry::description_lines)
            .unwrap_or_default();
        self.description.set_lines(lines);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crossterm::event::KeyModifiers;
    use proptest::prelude::*;

    use super::*;
    use crate::error::TimedialError;
    use crate::tui::surface::testing::RecordingSurface;

    fn command(name: &str, program: &str) -> MenuEntry {
        MenuEntry::command(name, format!("Run {}", name), Command::new([program]).unwrap()).unwrap()
    }

    fn root() -> MenuSet {
        let retro = MenuEntry::group(
            "Retro",
            "Old games",
            vec![
                command("Zork", "/usr/games/zork"),
                command("Play", "/usr/games/play"),
            ],
        )
        .unwrap();
        let sims = MenuEntry::dynamic("Simulators", "Vintage machines", "fresh").unwrap();
        MenuSet::new(vec![retro, sims, command("Exit", "/bin/false")]).unwrap()
    }

    fn counting_registry(calls: Rc<Cell<usize>>) -> ProviderRegistry {
        let mut registry = ProviderRegistry::new();
        registry.register("fresh", move || {
            calls.set(calls.get() + 1);
            Ok(MenuSet::new(vec![command("PDP-11", "/usr/local/bin/pdp11")])?)
        });
        registry
    }

    fn navigator() -> (Navigator, RecordingSurface) {
        let surface = RecordingSurface::new(80, 24);
        let mut nav = Navigator::new(root(), counting_registry(Rc::new(Cell::new(0))));
        nav.layout(surface.size().unwrap());
        (nav, surface)
    }

    #[test]
    fn test_nav_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(NavKey::from_key(&key(KeyCode::Up)), Some(NavKey::Up));
        assert_eq!(NavKey::from_key(&key(KeyCode::Enter)), Some(NavKey::Activate));
        assert_eq!(NavKey::from_key(&key(KeyCode::Left)), Some(NavKey::Back));
        assert_eq!(NavKey::from_key(&key(KeyCode::Esc)), Some(NavKey::Back));
        assert_eq!(NavKey::from_key(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_initial_state() {
        let (nav, _) = navigator();
        assert_eq!(nav.selected(), 0);
        assert_eq!(nav.depth(), 0);
        assert_eq!(nav.title(), ROOT_TITLE);
        assert_eq!(nav.description().lines(), &["Old games", ""]);
    }

    #[test]
    fn test_move_updates_description() {
        let (mut nav, mut surface) = navigator();
        let transition = nav.handle(NavKey::Up, &mut surface).unwrap();
        assert!(matches!(transition, Transition::Moved));
        assert_eq!(nav.selected(), 2);
        assert_eq!(nav.description().lines(), &["Run Exit", ""]);
    }

    #[test]
    fn test_group_back_restores_frame() {
        let (mut nav, mut surface) = navigator();
        let before = nav.current().clone();

        let transition = nav.handle(NavKey::Activate, &mut surface).unwrap();
        assert!(matches!(transition, Transition::Entered));
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.title(), "Retro");
        assert_eq!(nav.menu_panel().entries(), &["Zork", "Play"]);

        nav.handle(NavKey::Down, &mut surface).unwrap();
        let transition = nav.handle(NavKey::Back, &mut surface).unwrap();
        assert!(matches!(transition, Transition::Returned));
        assert!(MenuSet::same(nav.current(), &before));
        assert_eq!(nav.selected(), 0);
        assert_eq!(nav.title(), ROOT_TITLE);
    }

    #[test]
    fn test_back_at_root() {
        let (mut nav, mut surface) = navigator();
        let transition = nav.handle(NavKey::Back, &mut surface).unwrap();
        assert!(matches!(transition, Transition::AtRoot));
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_command_yields_launch() {
        let (mut nav, mut surface) = navigator();
        nav.handle(NavKey::Up, &mut surface).unwrap();
        match nav.handle(NavKey::Activate, &mut surface).unwrap() {
            Transition::Launch(command) => assert_eq!(command.argv(), &["/bin/false"]),
            other => panic!("unexpected transition {:?}", other),
        }
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_dynamic_menus_built_fresh() {
        let calls = Rc::new(Cell::new(0));
        let mut surface = RecordingSurface::new(80, 24);
        let mut nav = Navigator::new(root(), counting_registry(calls.clone()));
        nav.layout(surface.size().unwrap());

        nav.handle(NavKey::Down, &mut surface).unwrap();
        nav.handle(NavKey::Activate, &mut surface).unwrap();
        let first = nav.current().clone();
        assert_eq!(nav.title(), "Simulators");
        nav.handle(NavKey::Back, &mut surface).unwrap();
        assert_eq!(nav.selected(), 1);

        nav.handle(NavKey::Activate, &mut surface).unwrap();
        let second = nav.current().clone();
        assert_eq!(calls.get(), 2);
        assert!(!MenuSet::same(&first, &second));
    }

    #[test]
    fn test_provider_failure_keeps_state() {
        let mut registry = ProviderRegistry::new();
        registry.register("fresh", || Err(anyhow::anyhow!("no simulators are installed")));
        let mut surface = RecordingSurface::new(80, 24);
        let mut nav = Navigator::new(root(), registry);
        nav.layout(surface.size().unwrap());

        nav.handle(NavKey::Down, &mut surface).unwrap();
        let err = nav.handle(NavKey::Activate, &mut surface).unwrap_err();
        assert!(matches!(err, TimedialError::Provider { .. }));
        assert_eq!(nav.depth(), 0);
        assert_eq!(nav.selected(), 1);
    }

    #[test]
    fn test_unknown_provider() {
        let mut surface = RecordingSurface::new(80, 24);
        let mut nav = Navigator::new(root(), ProviderRegistry::new());
        nav.layout(surface.size().unwrap());
        nav.handle(NavKey::Down, &mut surface).unwrap();
        let err = nav.handle(NavKey::Activate, &mut surface).unwrap_err();
        assert!(matches!(err, TimedialError::UnknownProvider(id) if id == "fresh"));
    }

    #[test]
    fn test_submenu_replaces_larger_menu() {
        let (mut nav, mut surface) = navigator();
        let root_area = nav.menu_panel().region().area();
        surface.reset();
        nav.handle(NavKey::Activate, &mut surface).unwrap();
        assert!(surface.clears.contains(&root_area));
    }

    fn nav_key() -> impl Strategy<Value = NavKey> {
        prop_oneof![
            Just(NavKey::Up),
            Just(NavKey::Down),
            Just(NavKey::Back),
            Just(NavKey::Activate),
        ]
    }

    proptest! {
        #[test]
        fn prop_selection_stays_in_range(keys in prop::collection::vec(nav_key(), 0..60)) {
            let (mut nav, mut surface) = navigator();
            for key in keys {
                let _ = nav.handle(key, &mut surface).unwrap();
                prop_assert!(nav.selected() < nav.current().len());
                prop_assert_eq!(nav.menu_panel().entries().len(), nav.current().len());
            }
        }

        #[test]
        fn prop_descend_then_back_is_identity(moves in 0usize..6) {
            let (mut nav, mut surface) = navigator();
            for _ in 0..moves {
                nav.handle(NavKey::Down, &mut surface).unwrap();
            }
            let before = nav.current().clone();
            let index = nav.selected();
            if let Transition::Entered = nav.handle(NavKey::Activate, &mut surface).unwrap() {
                nav.handle(NavKey::Back, &mut surface).unwrap();
            }
            prop_assert!(MenuSet::same(nav.current(), &before));
            prop_assert_eq!(nav.selected(), index);
        }
    }
}
