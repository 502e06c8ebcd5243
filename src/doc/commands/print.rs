/*!
# `print:<value>[,<value>...]`
Also `println`, `printnl` and `printvar`.

## Purpose
Write text to the terminal.

## Remarks
Quoted arguments are written as they are. A variable name is replaced by
its value. Anything else is written as typed. `println` ends the line,
`printnl` writes only a line ending.

## Example
```text
set:n,3
println:"n is ",n
n is 3
```

*/
