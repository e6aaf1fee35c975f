// schismrs-swan/src/command.rs

/// Rendering of a value as a fragment of a SWAN command file.
pub trait SwanCommand {
    fn cmd(&self) -> String;
}
