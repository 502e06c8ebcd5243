/*!
# `ifequal:<variable>,<value>`
Also `ifnotequal`, `ifless` and `ifgreater`.

## Purpose
Run the next statement only if the comparison holds.

## Remarks
The left side must be a variable. The right side is a variable or a
literal. Numbers compare by value whatever their kind. Strings can only
be tested for equality.

## Example
```text
set:x,4
ifless:x,4.5
println:"less"
less
```

*/
