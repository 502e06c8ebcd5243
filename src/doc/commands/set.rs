/*!
# `set:<variable>,<value>`
Also `add` and `sub`.

## Purpose
Store a value in a variable.

## Remarks
A quoted value is a String, a number with a decimal point is a Float and
any other number is an Integer. When the value names another variable,
its value is copied.

A variable keeps the kind of its first value. Storing a different kind
later stops the script with `TYPE MISMATCH`.

`add` and `sub` need an existing variable. Adding a Float to an Integer
variable drops the fraction. `add` joins text or an Integer onto a String
variable.

## Example
```text
set:name,"count="
set:n,2
add:name,n
println:name
count=2
```

*/
