/*!
# `return`
Also `goclr`.

## Purpose
Go back to the line after the latest `gosub`.

## Remarks
`return` with no `gosub` waiting stops the script with
`RETURN WITHOUT GOSUB`. `goclr` forgets every waiting `gosub`; use it when
a subroutine leaves with `goto` for good.

## Example
```text
gosub:sub
println:"back"
goto:end
#sub
println:"in sub"
return
#end
in sub
back
```

*/
