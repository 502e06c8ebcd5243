#![allow(dead_code)]
use macrolang::mach::{Event, Recorder, Runtime, Settings};

pub fn runtime() -> (Runtime, Recorder) {
    let recorder = Recorder::new();
    let runtime = Runtime::new(Box::new(recorder.clone()), Settings::default());
    (runtime, recorder)
}

pub fn enter(runtime: &mut Runtime, src: &str) {
    for line in src.lines() {
        runtime.enter(line);
    }
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) | Event::Interrupted(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

/// Run `src` in a fresh recorded runtime and return its output.
pub fn run(src: &str) -> String {
    let (mut r, _) = runtime();
    enter(&mut r, src);
    exec(&mut r)
}
