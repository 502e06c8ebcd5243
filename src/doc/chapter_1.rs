/*!
# Script Format

## Lines
A line is one of four things.

* Blank, or starting with `;`. A comment.
* `#name`. A label that `goto` and `gosub` can jump to.
* `#@`. An anonymous label, reached relative to the jumping line.
* `command` or `command:arg1,arg2,...`. A statement.

Leading and trailing space around commands and arguments is ignored.
Arguments are separated by commas. A comma inside double quotes is part of
the argument. Write `\"` for a quote inside a quoted string.

## Values
Variables hold one of three kinds of value.

| Kind    | Literal         |
|---------|-----------------|
| String  | `"text"`        |
| Integer | `42`, `-7`      |
| Float   | `3.5`, `.25`    |

The first `set` of a name fixes its kind. Setting a different kind later
is a `TYPE MISMATCH`. Adding a Float to an Integer variable keeps it an
Integer; the fraction is dropped.

```text
set:x,10
add:x,3.5
println:x
13
```

## Anonymous labels
`@f` jumps to the next `#@` below the current line, `@ff` to the one after
that. `@b` and `@bb` count upward.

```text
#@
autopress:a
goto:@b
```

## Conditions
Every `if` command decides only whether the next statement runs. Blank
lines, comments and labels in between do not count.

```text
ifequal:x,5
println:"five"
println:"always"
```

## Errors
The first error stops the script. The message names the line.

```text
goto:nowhere
UNDEFINED REFERENCE IN LINE 1; undefined label: nowhere
```

*/
