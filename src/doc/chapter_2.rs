/*!
# Commands
*/

#[path = "commands/autopress.rs"]
#[allow(non_snake_case)]
pub mod AUTOPRESS;

#[path = "commands/colorsmatch.rs"]
#[allow(non_snake_case)]
pub mod COLORSMATCH;

#[path = "commands/getcolor.rs"]
#[allow(non_snake_case)]
pub mod GETCOLOR;

#[path = "commands/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "commands/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "commands/ifequal.rs"]
#[allow(non_snake_case)]
pub mod IFEQUAL;

#[path = "commands/ifpressed.rs"]
#[allow(non_snake_case)]
pub mod IFPRESSED;

#[path = "commands/move.rs"]
#[allow(non_snake_case)]
pub mod MOVE;

#[path = "commands/press.rs"]
#[allow(non_snake_case)]
pub mod PRESS;

#[path = "commands/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "commands/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "commands/savecolor.rs"]
#[allow(non_snake_case)]
pub mod SAVECOLOR;

#[path = "commands/set.rs"]
#[allow(non_snake_case)]
pub mod SET;

#[path = "commands/wait.rs"]
#[allow(non_snake_case)]
pub mod WAIT;
