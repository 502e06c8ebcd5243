use super::*;
use crate::error;
use crate::lang::{unquote, Error, Kind};
use log::{debug, info, trace};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Script interpreter
///
/// Owns every piece of run state: the listing and its labels, variables,
/// the return stack, the held keys and the skip flag. Output and failures
/// are handed back to the caller as [`Event`]s.
pub struct Runtime {
    listing: Listing,
    dirty: bool,
    link: Link,
    var: Var,
    stack: Stack<Address>,
    pressed: BTreeMap<String, Key>,
    saved_color: Option<Color>,
    execute_next: bool,
    pc: Address,
    state: State,
    interrupted: Arc<AtomicBool>,
    automation: Box<dyn Automation>,
    settings: Settings,
}

/// ## Events for the user interface
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Text to write to standard output.
    Print(String),
    /// A fatal error stopped the run.
    Error(Error),
    /// The quit signal stopped the run.
    Interrupted(Error),
    /// The iteration budget ran out; call `execute` again.
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Ready,
    Running,
    Stopped,
}

enum Flow {
    Next,
    Jump(Address),
    Print(String),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Box::new(Headless::default()), Settings::default())
    }
}

impl Runtime {
    pub fn new(automation: Box<dyn Automation>, settings: Settings) -> Runtime {
        Runtime {
            listing: Listing::default(),
            dirty: false,
            link: Link::new(),
            var: Var::new(),
            stack: Stack::with_max_len("too many nested gosub calls", settings.max_call_depth),
            pressed: BTreeMap::new(),
            saved_color: None,
            execute_next: true,
            pc: 0,
            state: State::Ready,
            interrupted: Arc::new(AtomicBool::new(false)),
            automation,
            settings,
        }
    }

    /// Append one line of source. The next `execute` starts from the top.
    pub fn enter(&mut self, line: &str) {
        self.listing.load_str(line);
        self.dirty = true;
        self.reset();
    }

    pub fn set_listing(&mut self, listing: Listing) {
        self.listing = listing;
        self.dirty = true;
        self.reset();
    }

    /// Start over from the first line on the next `execute`.
    pub fn run(&mut self) {
        self.reset();
    }

    /// A quit requested after this point stops the next run.
    fn reset(&mut self) {
        self.interrupted.store(false, Ordering::SeqCst);
        self.state = State::Ready;
    }

    /// Request a stop. Honored before the next line executes.
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// Shared flag for signal handlers on other threads.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn var(&self, name: &str) -> Option<&Val> {
        self.var.fetch(name)
    }

    pub fn pressed(&self) -> Vec<&str> {
        self.pressed.keys().map(|s| s.as_str()).collect()
    }

    pub fn call_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn saved_color(&self) -> Option<Color> {
        self.saved_color
    }

    /// Execute at most `iterations` lines.
    pub fn execute(&mut self, iterations: usize) -> Event {
        match self.state {
            State::Stopped => return Event::Stopped,
            State::Ready => self.start(),
            State::Running => {}
        }
        let listing = self.listing.clone();
        for _ in 0..iterations {
            let index = self.pc;
            if self.interrupted.swap(false, Ordering::SeqCst) {
                info!("interrupted before line {}", index + 1);
                self.stop();
                return Event::Interrupted(error!(Interrupted, Some(index + 1)));
            }
            let line = match listing.get(index) {
                Some(line) => line,
                None => {
                    info!("end of script");
                    self.stop();
                    return Event::Stopped;
                }
            };
            self.pc = index + 1;
            let (command, args) = match line.kind() {
                Kind::Statement { command, args } => (command, args),
                _ => continue,
            };
            if !self.execute_next {
                self.execute_next = true;
                trace!("{:>4} skipped: {}", index + 1, line);
                continue;
            }
            trace!("{:>4} {}", index + 1, line);
            match self.statement(command, args, index) {
                Ok(Flow::Next) => {}
                Ok(Flow::Jump(addr)) => self.pc = addr,
                Ok(Flow::Print(s)) => return Event::Print(s),
                Err(error) => {
                    let error = error.in_line_number(Some(index + 1));
                    info!("stopped: {}", error);
                    self.stop();
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }

    fn start(&mut self) {
        if self.dirty {
            self.link.index(self.listing.lines());
            self.dirty = false;
        }
        self.var.clear();
        self.stack.clear();
        self.pressed.clear();
        self.saved_color = None;
        self.execute_next = true;
        self.pc = 0;
        self.state = State::Running;
        info!("running {} lines", self.listing.len());
    }

    fn stop(&mut self) {
        self.state = State::Stopped;
        if self.settings.release_on_exit {
            for (name, key) in std::mem::take(&mut self.pressed) {
                debug!("releasing held key {}", name);
                self.automation.toggle_key(key, Direction::Up);
            }
        }
    }

    fn statement(&mut self, keyword: &str, args: &[String], index: Address) -> Result<Flow> {
        use Command::*;
        let command = Command::decode(keyword, args.len())?;
        match command {
            Print => Ok(Flow::Print(self.interpolate(args))),
            Println => Ok(Flow::Print(self.interpolate(args) + "\n")),
            Printnl => Ok(Flow::Print("\n".to_string())),
            Printvar => Ok(Flow::Print(self.var.fetch_declared(&args[0])?.to_string())),
            Move => {
                let x = self.integer(&args[0])?;
                let y = self.integer(&args[1])?;
                self.automation.move_pointer(x, y);
                Ok(Flow::Next)
            }
            Autopress => self.autopress(args),
            Press => self.press(args, Direction::Down),
            Release => self.press(args, Direction::Up),
            Tap => {
                let keys = self.keys(args)?;
                let settle = self.settings.tap_settle_ms;
                self.automation.sleep(settle);
                for (_, key) in keys {
                    self.automation.tap_key(key);
                    self.automation.sleep(settle);
                }
                Ok(Flow::Next)
            }
            Ifpressed | Ifnotpressed => {
                Key::lookup(&args[0])?;
                let held = self.pressed.contains_key(&args[0]);
                self.execute_next = held == (command == Ifpressed);
                Ok(Flow::Next)
            }
            Wait => {
                let ms = self.integer(&args[0])?;
                if ms < 0 {
                    return Err(error!(MalformedLiteral; "negative wait: {}", ms));
                }
                self.automation.sleep(ms as u64);
                Ok(Flow::Next)
            }
            Goto => {
                let addr = self.link.resolve(&args[0], index)?;
                debug!("goto {} -> line {}", args[0], addr + 1);
                Ok(Flow::Jump(addr))
            }
            Gosub => {
                let addr = self.link.resolve(&args[0], index)?;
                self.stack.push(index + 1)?;
                debug!("gosub {} -> line {} depth {}", args[0], addr + 1, self.stack.len());
                Ok(Flow::Jump(addr))
            }
            Goclr => {
                if !self.stack.is_empty() {
                    debug!("discarding {} return addresses", self.stack.len());
                }
                self.stack.clear();
                Ok(Flow::Next)
            }
            Return => {
                let call_site = self.stack.pop()?;
                debug!("return to line {}", call_site + 1);
                Ok(Flow::Jump(call_site))
            }
            Set => {
                let val = self.var.resolve(&args[1])?;
                self.var.store(&args[0], val)?;
                Ok(Flow::Next)
            }
            Add | Sub => {
                let lhs = self.var.fetch_declared(&args[0])?.clone();
                let rhs = self.var.resolve(&args[1])?;
                let val = if command == Add {
                    Operation::sum(lhs, rhs)?
                } else {
                    Operation::subtract(lhs, rhs)?
                };
                self.var.store(&args[0], val)?;
                Ok(Flow::Next)
            }
            Ifequal | Ifnotequal | Ifless | Ifgreater => {
                let lhs = self.var.fetch_declared(&args[0])?;
                let rhs = self.var.resolve(&args[1])?;
                self.execute_next = match command {
                    Ifequal => Operation::equal_bool(lhs, &rhs)?,
                    Ifnotequal => !Operation::equal_bool(lhs, &rhs)?,
                    Ifless => Operation::less_bool(lhs, &rhs)?,
                    _ => Operation::greater_bool(lhs, &rhs)?,
                };
                Ok(Flow::Next)
            }
            Getcolor => {
                let color = self.pixel(&args[1], &args[2])?;
                self.var.store(&args[0], Val::String(color.to_string()))?;
                Ok(Flow::Next)
            }
            Colorsmatch => {
                let a = self.color(&args[0])?;
                let b = self.color(&args[1])?;
                let threshold = self.threshold(&args[2])?;
                self.execute_next = a.matches(&b, threshold);
                Ok(Flow::Next)
            }
            Savecolor => {
                self.saved_color = Some(self.pixel(&args[0], &args[1])?);
                Ok(Flow::Next)
            }
            Printcolorrgb => Ok(Flow::Print(self.saved()?.to_rgb_string())),
            Printcolorhex => Ok(Flow::Print(self.saved()?.to_string())),
            Ifcolor => {
                let saved = self.saved()?;
                let target = self.color(&args[0])?;
                let threshold = self.threshold(&args[1])?;
                self.execute_next = saved.matches(&target, threshold);
                Ok(Flow::Next)
            }
        }
    }

    /// Quoted text as written, variables by value, anything else verbatim.
    fn interpolate(&self, args: &[String]) -> String {
        let mut s = String::new();
        for arg in args {
            if let Some(text) = unquote(arg) {
                s.push_str(&text);
            } else if let Some(val) = self.var.fetch(arg) {
                s.push_str(&val.to_string());
            } else {
                s.push_str(arg);
            }
        }
        s
    }

    fn integer(&self, token: &str) -> Result<i64> {
        i64::try_from(&self.var.resolve(token)?)
    }

    /// Resolve every key name before any event is sent.
    fn keys(&self, names: &[String]) -> Result<Vec<(String, Key)>> {
        names
            .iter()
            .map(|name| Key::lookup(name).map(|key| (name.clone(), key)))
            .collect()
    }

    fn press(&mut self, args: &[String], direction: Direction) -> Result<Flow> {
        let keys = self.keys(args)?;
        let settle = self.settings.press_settle_ms;
        self.automation.sleep(settle);
        for (name, key) in keys {
            self.toggle(name, key, direction);
            self.automation.sleep(settle);
        }
        Ok(Flow::Next)
    }

    fn autopress(&mut self, args: &[String]) -> Result<Flow> {
        let keys = self.keys(args)?;
        let settle = self.settings.autopress_settle_ms;
        self.automation.sleep(settle);
        for (name, key) in keys.iter().cloned() {
            self.toggle(name, key, Direction::Down);
            self.automation.sleep(settle);
        }
        self.automation.sleep(settle);
        for (name, key) in keys {
            self.toggle(name, key, Direction::Up);
            self.automation.sleep(settle);
        }
        self.automation.sleep(settle);
        Ok(Flow::Next)
    }

    fn toggle(&mut self, name: String, key: Key, direction: Direction) {
        self.automation.toggle_key(key, direction);
        match direction {
            Direction::Down => {
                self.pressed.insert(name, key);
            }
            Direction::Up => {
                self.pressed.remove(&name);
            }
        }
    }

    fn pixel(&mut self, x: &str, y: &str) -> Result<Color> {
        let x = self.integer(x)?;
        let y = self.integer(y)?;
        let hex = self.automation.read_pixel_color(x, y);
        Color::parse(&hex)
    }

    /// A color literal, or a String variable holding one.
    fn color(&self, token: &str) -> Result<Color> {
        match self.var.fetch(token) {
            Some(Val::String(s)) => Color::parse(s),
            Some(val) => Err(error!(TypeMismatch; "{} is {}, expected a color STRING", token, val.kind())),
            None => Color::parse(token),
        }
    }

    fn threshold(&self, token: &str) -> Result<u8> {
        match self.var.fetch(token) {
            Some(Val::String(s)) => Color::parse_threshold(s),
            Some(val) => Err(error!(TypeMismatch; "{} is {}, expected a threshold STRING", token, val.kind())),
            None => Color::parse_threshold(token),
        }
    }

    fn saved(&self) -> Result<Color> {
        match self.saved_color {
            Some(color) => Ok(color),
            None => Err(error!(UndefinedReference; "no color saved, use savecolor first")),
        }
    }
}
