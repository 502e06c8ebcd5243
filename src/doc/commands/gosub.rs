/*!
# `gosub:<label>`

## Purpose
Remember the current line and move execution to the label.

## Remarks
`return` resumes on the line after the most recent `gosub`. `goclr` forgets
every remembered line.

## Example
```text
gosub:hello
println:"WORLD"
goto:end
#hello
print:"HELLO "
return
#end
HELLO WORLD
```

*/
