/*!
# `colorsmatch:<color>,<color>,<threshold>`

## Purpose
Run the next statement only if the two colors are close.

## Remarks
Colors are six hex digits with an optional `#`, or a String variable
holding one, such as one written by `getcolor`. The threshold is two hex
digits. Every channel must differ by no more than the threshold.

See `savecolor` for comparing against one color kept aside.

## Example
```text
getcolor:c,640,360
colorsmatch:c,"#FF0000","#10"
autopress:lmouse
```

*/
