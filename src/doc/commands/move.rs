/*!
# `move:<x>,<y>`

## Purpose
Put the pointer at a screen position.

## Remarks
Coordinates are integers or numeric variables. Floats are cut to whole
numbers.

## Example
```text
set:x,100
move:x,200
```

*/
