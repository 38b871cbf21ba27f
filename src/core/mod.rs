// ─── ViPER Launcher Generator Core ───
//
// Architecture:
//   core/
//     config     — Working directory + CLASSPATH
//     layout     — Fixed suite paths (library folder, module jars, prefs)
//     launch/    — Archive collector, classpath composer, batch writer
//     generator  — The run: scan, compose, write

pub mod config;
pub mod error;
pub mod generator;
pub mod launch;
pub mod layout;
