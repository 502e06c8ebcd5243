/*!
# `ifpressed:<key>`
Also `ifnotpressed`.

## Purpose
Run the next statement only if the script is holding the key.

## Remarks
Only keys held with `press` count. `lshift` and `rshift` are separate
names even though they drive the same key.

## Example
```text
press:lmouse
ifpressed:lmouse
println:"dragging"
dragging
```

*/
