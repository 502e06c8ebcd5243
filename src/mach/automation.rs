use super::{Color, Direction, Key};
use log::{info, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Synthetic input backend
///
/// The runtime never touches the operating system itself. Pointer
/// movement, key toggling, pixel sampling and sleeping all go through
/// this trait.
pub trait Automation {
    fn move_pointer(&mut self, x: i64, y: i64);
    fn toggle_key(&mut self, key: Key, direction: Direction);
    fn tap_key(&mut self, key: Key);
    /// Color of the screen pixel at `x`,`y` as `RRGGBB` hex, `#` optional.
    fn read_pixel_color(&mut self, x: i64, y: i64) -> String;
    fn sleep(&mut self, ms: u64);
}

/// Logs every event instead of injecting it. Sleeps are real.
#[derive(Debug)]
pub struct Headless {
    pixel: Color,
}

impl Headless {
    pub fn new(pixel: Color) -> Headless {
        Headless { pixel }
    }
}

impl Default for Headless {
    fn default() -> Headless {
        Headless::new(Color { r: 0, g: 0, b: 0 })
    }
}

impl Automation for Headless {
    fn move_pointer(&mut self, x: i64, y: i64) {
        info!("move pointer to {},{}", x, y);
    }
    fn toggle_key(&mut self, key: Key, direction: Direction) {
        info!("{} {:?}", key, direction);
    }
    fn tap_key(&mut self, key: Key) {
        info!("tap {}", key);
    }
    fn read_pixel_color(&mut self, x: i64, y: i64) -> String {
        warn!("no screen attached; pixel {},{} reads as {}", x, y, self.pixel);
        self.pixel.to_string()
    }
    fn sleep(&mut self, ms: u64) {
        std::thread::sleep(std::time::Duration::from_millis(ms));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Move(i64, i64),
    Toggle(Key, Direction),
    Tap(Key),
    ReadPixel(i64, i64),
    Sleep(u64),
}

/// Records events without performing them. Clones share one log, so a
/// caller can keep a handle after moving the recorder into a runtime.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    actions: Rc<RefCell<Vec<Action>>>,
    pixels: Rc<RefCell<HashMap<(i64, i64), String>>>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    /// Recorded events other than sleeps.
    pub fn input(&self) -> Vec<Action> {
        self.actions
            .borrow()
            .iter()
            .filter(|a| !matches!(a, Action::Sleep(_)))
            .cloned()
            .collect()
    }

    pub fn set_pixel(&self, x: i64, y: i64, hex: &str) {
        self.pixels.borrow_mut().insert((x, y), hex.to_string());
    }

    fn record(&self, action: Action) {
        self.actions.borrow_mut().push(action);
    }
}

impl Automation for Recorder {
    fn move_pointer(&mut self, x: i64, y: i64) {
        self.record(Action::Move(x, y));
    }
    fn toggle_key(&mut self, key: Key, direction: Direction) {
        self.record(Action::Toggle(key, direction));
    }
    fn tap_key(&mut self, key: Key) {
        self.record(Action::Tap(key));
    }
    fn read_pixel_color(&mut self, x: i64, y: i64) -> String {
        self.record(Action::ReadPixel(x, y));
        match self.pixels.borrow().get(&(x, y)) {
            Some(hex) => hex.clone(),
            None => "000000".to_string(),
        }
    }
    fn sleep(&mut self, ms: u64) {
        self.record(Action::Sleep(ms));
    }
}
