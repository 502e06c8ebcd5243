mod common;
use common::*;

#[test]
fn test_ifequal_true_runs_next_line() {
    let src = r#"
set:x,5
ifequal:x,5
println:"equal"
println:"after"
"#;
    assert_eq!(run(src), "equal\nafter\n");
}

#[test]
fn test_ifequal_false_skips_one_line() {
    let src = r#"
set:x,4
ifequal:x,5
println:"equal"
println:"after"
"#;
    assert_eq!(run(src), "after\n");
}

#[test]
fn test_skip_ignores_blank_comment_and_label_lines() {
    let src = r#"
set:x,4
ifequal:x,5

; only the next statement is guarded
#label
println:"guarded"
println:"after"
"#;
    assert_eq!(run(src), "after\n");
}

#[test]
fn test_skipped_line_is_not_checked() {
    let src = r#"
set:x,1
ifequal:x,2
bogus:command,that,would,fail
println:"ok"
"#;
    assert_eq!(run(src), "ok\n");
}

#[test]
fn test_skipped_goto_does_not_jump() {
    let src = r#"
set:x,1
ifnotequal:x,1
goto:end
println:"not skipped"
#end
"#;
    assert_eq!(run(src), "not skipped\n");
}

#[test]
fn test_comparisons() {
    let src = r#"
set:i,4
set:f,4.5
ifless:i,f
println:"i<f"
ifgreater:f,i
println:"f>i"
ifless:i,4
println:"wrong"
ifgreater:i,4
println:"wrong"
ifequal:i,4.0
println:"i==4.0"
ifnotequal:f,4.5
println:"wrong"
"#;
    assert_eq!(run(src), "i<f\nf>i\ni==4.0\n");
}

#[test]
fn test_string_comparisons() {
    let src = r#"
set:s,"abc"
set:t,"abc"
ifequal:s,t
println:"same"
ifnotequal:s,"abd"
println:"different"
"#;
    assert_eq!(run(src), "same\ndifferent\n");
    assert_eq!(
        run("set:s,\"a\"\nifless:s,\"b\""),
        "TYPE MISMATCH IN LINE 2; strings can only be compared for equality\n"
    );
    assert_eq!(
        run("set:s,\"a\"\nifequal:s,1"),
        "TYPE MISMATCH IN LINE 2; cannot compare STRING and INTEGER\n"
    );
}

#[test]
fn test_compare_undeclared() {
    assert_eq!(
        run("ifgreater:x,1"),
        "UNDEFINED REFERENCE IN LINE 1; variable not declared: x\n"
    );
}

#[test]
fn test_flag_resets_after_consumption() {
    let src = r#"
set:x,0
ifequal:x,1
println:"one"
println:"two"
println:"three"
"#;
    assert_eq!(run(src), "two\nthree\n");
}

#[test]
fn test_guarded_if_is_skipped() {
    let src = r#"
set:x,0
ifequal:x,1
ifequal:x,5
println:"runs"
"#;
    assert_eq!(run(src), "runs\n");
}
