/*!
# `goto:<label>`

## Purpose
Move execution to the label.

## Remarks
The label is a name written as `#name`, or `@f`/`@b` for the next
anonymous label forward or back.

## Example
```text
goto:@f
println:"skipped"
#@
println:"done"
done
```

*/
