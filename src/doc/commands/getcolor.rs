/*!
# `getcolor:<variable>,<x>,<y>`

## Purpose
Read the color of a screen pixel into a String variable.

## Remarks
The value is written as `#RRGGBB` in capitals. The variable must be new
or already hold a String.

## Example
```text
getcolor:c,10,20
println:c
#FF8000
```

*/
