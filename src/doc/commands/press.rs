/*!
# `press:<key>[,<key>...]`
Also `release` and `tap`.

## Purpose
Hold down keys, let them go, or strike them once.

## Remarks
`press` holds each listed key and `release` lets each one go. The script
remembers what it holds until `release`, `autopress` or the end of the
run. Keys still held when the script stops are let go.

`tap` presses and lets go of each key in turn. Every key name is checked
before any key moves, so a misspelled name sends nothing.

## Example
```text
press:lshift
tap:h,i
release:lshift
```

*/
