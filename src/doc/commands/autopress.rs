/*!
# `autopress:<key>[,<key>...]`

## Purpose
Hold down every listed key in order, then let them all go in the same order.

## Remarks
The script pauses briefly before the first key, after every key and
between holding and letting go. See `press` for holding keys across
statements.

Key names are lower case: `a`-`z`, `0`-`9`, `f1`-`f12`, `numpad0`-`numpad9`,
`lshift`, `rctrl`, `lalt`, `space`, `enter`, `esc`, `lmouse`, `rmouse`
and so on.

## Example
```text
autopress:lctrl,c
```

*/
