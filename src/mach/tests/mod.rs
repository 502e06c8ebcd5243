use crate::lang::ErrorCode;
use crate::mach::{Action, Direction, Event, Key, Recorder, Runtime, Settings, Val};

fn runtime(src: &str) -> (Runtime, Recorder) {
    let recorder = Recorder::new();
    let mut r = Runtime::new(Box::new(recorder.clone()), Settings::default());
    for line in src.lines() {
        r.enter(line);
    }
    (r, recorder)
}

fn run(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Print(ps) => s.push_str(&ps),
            Event::Error(error) | Event::Interrupted(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                s.push_str("\nExecution cycles exceeded.\n");
                break;
            }
        }
    }
    s
}

#[test]
fn test_interrupt_before_first_line() {
    let (mut r, _) = runtime("set:x,1");
    r.execute(0);
    r.interrupt();
    match r.execute(10) {
        Event::Interrupted(e) => {
            assert_eq!(e.code(), ErrorCode::Interrupted);
            assert_eq!(e.line_number(), Some(1));
        }
        event => panic!("unexpected {:?}", event),
    }
    assert_eq!(r.var("x"), None);
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_interrupt_before_first_execute() {
    let (mut r, rec) = runtime("println:\"ran\"");
    r.interrupt();
    match r.execute(10) {
        Event::Interrupted(e) => {
            assert_eq!(e.code(), ErrorCode::Interrupted);
            assert_eq!(e.line_number(), Some(1));
        }
        event => panic!("unexpected {:?}", event),
    }
    assert!(rec.actions().is_empty());
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_new_run_forgets_earlier_interrupt() {
    let (mut r, _) = runtime("println:\"ran\"");
    r.interrupt();
    r.run();
    assert_eq!(run(&mut r), "ran\n");
}

#[test]
fn test_interrupt_from_other_thread_releases_keys() {
    let (mut r, rec) = runtime("press:lshift,a\n#@\ngoto:@b");
    assert_eq!(r.execute(50), Event::Running);
    assert_eq!(r.pressed(), vec!["a", "lshift"]);
    let handle = r.interrupt_handle();
    std::thread::spawn(move || handle.store(true, std::sync::atomic::Ordering::SeqCst))
        .join()
        .unwrap();
    assert!(matches!(r.execute(50), Event::Interrupted(_)));
    assert!(r.pressed().is_empty());
    let input = rec.input();
    assert_eq!(
        &input[input.len() - 2..],
        &[
            Action::Toggle(Key::Keyboard("a"), Direction::Up),
            Action::Toggle(Key::Keyboard("shift"), Direction::Up),
        ]
    );
}

#[test]
fn test_keys_kept_when_configured() {
    let recorder = Recorder::new();
    let settings = Settings {
        release_on_exit: false,
        ..Settings::default()
    };
    let mut r = Runtime::new(Box::new(recorder.clone()), settings);
    r.enter("press:q");
    assert_eq!(run(&mut r), "");
    assert_eq!(
        recorder.input(),
        vec![Action::Toggle(Key::Keyboard("q"), Direction::Down)]
    );
    assert_eq!(r.pressed(), vec!["q"]);
}

#[test]
fn test_error_stops_and_releases() {
    let (mut r, rec) = runtime("press:lmouse\nset:x,1\nset:x,\"one\"\nset:y,2");
    assert_eq!(
        run(&mut r),
        "TYPE MISMATCH IN LINE 3; cannot store STRING in INTEGER variable x\n"
    );
    assert_eq!(r.var("y"), None);
    assert_eq!(r.var("x"), Some(&Val::Integer(1)));
    assert_eq!(
        rec.input().last(),
        Some(&Action::Toggle(
            Key::Mouse(crate::mach::MouseButton::Left),
            Direction::Up
        ))
    );
}

#[test]
fn test_budget_yields_running() {
    let (mut r, _) = runtime("#top\ngoto:top");
    assert_eq!(r.execute(100), Event::Running);
    assert_eq!(r.execute(100), Event::Running);
}

#[test]
fn test_rerun_resets_state() {
    let (mut r, _) = runtime("gosub:sub\n#sub\nadd:n,1");
    assert_eq!(
        run(&mut r),
        "UNDEFINED REFERENCE IN LINE 3; variable not declared: n\n"
    );
    let (mut r2, _) = runtime("set:n,0\ngosub:sub\ngoto:end\n#sub\nadd:n,1\nreturn\n#end");
    assert_eq!(run(&mut r2), "");
    assert_eq!(r2.var("n"), Some(&Val::Integer(1)));
    assert_eq!(r2.call_depth(), 0);
    r2.run();
    assert_eq!(run(&mut r2), "");
    assert_eq!(r2.var("n"), Some(&Val::Integer(1)));
}

#[test]
fn test_call_depth_limit() {
    let recorder = Recorder::new();
    let settings = Settings {
        max_call_depth: 3,
        ..Settings::default()
    };
    let mut r = Runtime::new(Box::new(recorder), settings);
    r.enter("#again");
    r.enter("gosub:again");
    assert_eq!(
        run(&mut r),
        "GOSUB NESTED TOO DEEPLY IN LINE 2; too many nested gosub calls\n"
    );
}
