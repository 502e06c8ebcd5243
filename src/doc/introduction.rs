/*!
# Introduction

A macro script is a plain text file with one command per line. Run it by
passing the file to the executable.

<pre><code>&nbsp;> macrolang hello.mac
&nbsp;  Hello World
</code></pre>

Where `hello.mac` holds one line.

```text
println:"Hello World"
```

 Stop a running script with CTRL-C. The script ends before its next line
and any key it still holds down is released.

Scripts move the mouse pointer, press and release keys and read the color
of screen pixels. They do not run in structured blocks. Every line is
addressed by position and the only way to repeat or branch is to jump to
a label.

```text
set:count,0
#again
autopress:space
add:count,1
ifless:count,10
goto:again
println:"pressed space ",count," times"
```

*/
