/*!
# `wait:<milliseconds>`

## Purpose
Pause the script.

## Remarks
The time is an integer or a numeric variable. A negative time stops the
script with `MALFORMED LITERAL`.

## Example
```text
set:delay,250
wait:delay
```

*/
