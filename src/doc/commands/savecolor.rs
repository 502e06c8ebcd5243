/*!
# `savecolor:<x>,<y>`
Also `ifcolor`, `printcolorhex` and `printcolorrgb`.

## Purpose
Keep one pixel color aside for later checks.

## Remarks
`ifcolor:<color>,<threshold>` runs the next statement only if the saved
color is within the threshold of the given color. `printcolorhex` writes
the saved color as `#RRGGBB` and `printcolorrgb` as `RGB(r, g, b)`. Using
any of them before `savecolor` stops the script with
`UNDEFINED REFERENCE`.

## Example
```text
savecolor:3,4
printcolorrgb
printnl
RGB(10, 20, 30)
```

*/
