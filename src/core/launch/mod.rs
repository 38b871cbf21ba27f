pub mod archives;
pub mod batch;
pub mod classpath;

pub use archives::{collect_archives, ArchiveRef};
pub use batch::{write_launcher, LauncherTemplate};
pub use classpath::suite_classpath;
