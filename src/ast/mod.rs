/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The `Node` sum type, spans and structural comparison
/// - format: Source-like pretty printing of nodes and programs
pub mod ast;
pub mod format;
